//! Shared type definitions for the consultant locations service.
//!
//! A [`LocationRecord`] pairs a consultant's name with a location (usually
//! a postal code). Records carry no identifier: they only exist as elements
//! of a [`LocationCollection`], which is always handled as a whole.
//!
//! # Wire shapes
//!
//! - JSON: a [`LocationCollection`] serializes as a bare array of records.
//! - XML: the collection is wrapped in a [`LocationsDocument`] whose root
//!   element is `<consultantLocations>` with one `<locations>` child per
//!   record.

use serde::{Deserialize, Serialize};

/// A single consultant and where they are based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationRecord {
    /// Consultant display name.
    pub name: String,
    /// Free-form location, e.g. a postal code.
    pub location: String,
}

impl LocationRecord {
    /// Create a record from anything string-like.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// An ordered sequence of [`LocationRecord`]s.
///
/// Collections are never edited in place once handed to the store; a new
/// collection replaces the old one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationCollection {
    records: Vec<LocationRecord>,
}

impl LocationCollection {
    /// Wrap an existing vector of records, preserving order.
    pub const fn new(records: Vec<LocationRecord>) -> Self {
        Self { records }
    }

    /// An empty collection.
    pub const fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Borrow the records in order.
    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, LocationRecord> {
        self.records.iter()
    }

    /// Consume the collection, returning the underlying records.
    pub fn into_records(self) -> Vec<LocationRecord> {
        self.records
    }
}

impl From<Vec<LocationRecord>> for LocationCollection {
    fn from(records: Vec<LocationRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<LocationRecord> for LocationCollection {
    fn from_iter<I: IntoIterator<Item = LocationRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LocationCollection {
    type Item = &'a LocationRecord;
    type IntoIter = std::slice::Iter<'a, LocationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// XML document form of a [`LocationCollection`].
///
/// Serializes as:
///
/// ```xml
/// <consultantLocations>
///   <locations><name>Matt Roberts</name><location>SW1A 2NH</location></locations>
/// </consultantLocations>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "consultantLocations", deny_unknown_fields)]
pub struct LocationsDocument {
    /// One element per record, in collection order.
    #[serde(rename = "locations", default)]
    pub locations: Vec<LocationRecord>,
}

impl From<LocationCollection> for LocationsDocument {
    fn from(collection: LocationCollection) -> Self {
        Self {
            locations: collection.into_records(),
        }
    }
}

impl From<&LocationCollection> for LocationsDocument {
    fn from(collection: &LocationCollection) -> Self {
        Self {
            locations: collection.records().to_vec(),
        }
    }
}

impl From<LocationsDocument> for LocationCollection {
    fn from(document: LocationsDocument) -> Self {
        Self::new(document.locations)
    }
}
