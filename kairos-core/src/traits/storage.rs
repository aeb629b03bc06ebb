//! Persistent storage seam for the settings blob

/// Errors from the settings store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// No blob stored under the settings key
    NotFound,
    /// Stored data could not be read back intact
    Corrupted,
    /// Blob exceeds the space reserved for it
    Capacity,
    /// Underlying storage operation failed
    Io,
}

/// Blocking store for the single settings record.
///
/// Implementations keep one blob under one well-known key and handle
/// wear leveling and data integrity themselves. There is no version
/// tag on the blob; compatibility is the reader's problem (see
/// `ConfigStore::load`). Calls block until the underlying storage
/// returns; there is no cancellation or timeout.
pub trait SettingsStore {
    /// Read the blob into `buffer`, returning the byte count
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize, StorageError>;

    /// Replace the blob
    fn write(&mut self, data: &[u8]) -> Result<(), StorageError>;
}
