//! The single in-memory home of the current [`LocationCollection`].
//!
//! [`LocationStore`] keeps the current collection behind an [`Arc`] and
//! swaps that pointer under a [`RwLock`]. Readers clone the `Arc` and
//! release the lock immediately, so serialization of a response always
//! works on an immutable snapshot and never blocks a writer.
//!
//! A reader observes either the whole previous collection or the whole
//! replacement. Elements are never mutated in place.

use std::sync::{Arc, PoisonError, RwLock};

use consultant_types::{LocationCollection, LocationRecord};
use tracing::debug;

/// Build the collection every fresh store starts with.
///
/// Two records, in this order:
/// 1. `Matt Roberts` / `SW1A 2NH`
/// 2. `Paulo Menon` / `EC2M 7LS`
pub fn seed_collection() -> LocationCollection {
    LocationCollection::new(vec![
        LocationRecord::new("Matt Roberts", "SW1A 2NH"),
        LocationRecord::new("Paulo Menon", "EC2M 7LS"),
    ])
}

/// Owner of the current location collection.
///
/// Shared between request handlers via [`Arc`]. Both operations are
/// infallible and never suspend.
#[derive(Debug)]
pub struct LocationStore {
    current: RwLock<Arc<LocationCollection>>,
}

impl LocationStore {
    /// Create a store seeded with [`seed_collection`].
    pub fn new() -> Self {
        Self::with_collection(seed_collection())
    }

    /// Create a store holding `collection` as its initial state.
    pub fn with_collection(collection: LocationCollection) -> Self {
        Self {
            current: RwLock::new(Arc::new(collection)),
        }
    }

    /// Return the current collection.
    ///
    /// The returned snapshot is immutable and stays valid after later
    /// replacements.
    pub fn get(&self) -> Arc<LocationCollection> {
        // The guarded value is only ever a complete Arc, so a poisoned
        // lock still holds a consistent snapshot.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Atomically make `collection` the current collection and return it.
    ///
    /// Any collection is accepted, including an empty one.
    pub fn replace(&self, collection: LocationCollection) -> Arc<LocationCollection> {
        let next = Arc::new(collection);
        let previous = {
            let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *guard, Arc::clone(&next))
        };
        debug!(
            previous_len = previous.len(),
            new_len = next.len(),
            "Location collection replaced"
        );
        next
    }

    /// Number of records in the current collection.
    pub fn len(&self) -> usize {
        self.get().len()
    }

    /// Whether the current collection is empty.
    pub fn is_empty(&self) -> bool {
        self.get().is_empty()
    }
}

impl Default for LocationStore {
    fn default() -> Self {
        Self::new()
    }
}
