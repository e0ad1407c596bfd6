//! Core state and configuration for the consultant locations service.
//!
//! # Modules
//!
//! - [`store`] -- the single shared [`LocationStore`] with atomic
//!   snapshot replacement
//! - [`config`] -- typed service configuration loaded from YAML with
//!   environment overrides

pub mod config;
pub mod store;

pub use config::{ConfigError, LoggingConfig, ServerSection, ServiceConfig};
pub use store::{LocationStore, seed_collection};
