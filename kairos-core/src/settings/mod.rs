//! Persisted settings record and its store
//!
//! The record is the single source of truth for configuration, stored
//! in flash as one postcard-serialized blob.

pub mod store;
pub mod types;

pub use store::{ConfigStore, SETTINGS_BLOB_MAX};
pub use types::PersistedSettings;
