//! Settings persistence
//!
//! Whole-record, synchronous persistence: every mutation path ends in
//! one full write of the postcard-serialized record. There is no
//! partial-update API and no version tag.

use crate::settings::types::PersistedSettings;
use crate::traits::storage::SettingsStore;

/// Upper bound for the serialized settings blob.
///
/// The record serializes to ~110 bytes with every string at its bound;
/// the headroom absorbs future fields without a flash layout change.
pub const SETTINGS_BLOB_MAX: usize = 192;

/// Owns loading and persisting the settings record
pub struct ConfigStore<P: SettingsStore> {
    store: P,
}

impl<P: SettingsStore> ConfigStore<P> {
    pub fn new(store: P) -> Self {
        Self { store }
    }

    /// Load the settings record.
    ///
    /// Starts from defaults; a stored blob that decodes overlays them
    /// wholesale. A blob that fails to decode (foreign or stale layout)
    /// counts as absent - there is no versioned recovery.
    pub fn load(&mut self) -> PersistedSettings {
        let mut buffer = [0u8; SETTINGS_BLOB_MAX];
        match self.store.read(&mut buffer) {
            Ok(len) => postcard::from_bytes(&buffer[..len]).unwrap_or_default(),
            Err(_) => PersistedSettings::default(),
        }
    }

    /// Serialize and write the full record.
    ///
    /// Fire-and-forget: a failure is logged and swallowed, leaving the
    /// previous blob (if any) in place. The in-memory record stays
    /// authoritative either way.
    pub fn persist(&mut self, settings: &PersistedSettings) {
        let mut buffer = [0u8; SETTINGS_BLOB_MAX];
        match postcard::to_slice(settings, &mut buffer) {
            Ok(blob) => {
                if self.store.write(blob).is_err() {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("settings write failed");
                }
            }
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("settings blob exceeded its buffer");
            }
        }
    }

    /// The underlying store
    pub fn store(&self) -> &P {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::icon::IconId;
    use crate::settings::types::copy_truncated;
    use crate::testutil::MemoryStore;

    #[test]
    fn test_load_absent_gives_defaults() {
        let mut config = ConfigStore::new(MemoryStore::empty());
        assert_eq!(config.load(), PersistedSettings::default());
    }

    #[test]
    fn test_persist_then_load_roundtrip() {
        let mut config = ConfigStore::new(MemoryStore::empty());

        let mut settings = PersistedSettings::default();
        settings.update_interval = 45;
        settings.vibrate_disconnect = true;
        settings.icon = IconId::Snow;
        settings.battery_bar = Color::from_hex(0x00FF8800);
        copy_truncated(&mut settings.conditions, "Heavy snow showers");

        config.persist(&settings);
        assert_eq!(config.load(), settings);
        assert_eq!(config.store().writes, 1);
    }

    #[test]
    fn test_foreign_blob_treated_as_absent() {
        let mut config = ConfigStore::new(MemoryStore::with_blob(&[0xDE, 0xAD, 0xBE, 0xEF]));
        assert_eq!(config.load(), PersistedSettings::default());
    }

    #[test]
    fn test_write_failure_swallowed() {
        let mut config = ConfigStore::new(MemoryStore::failing());
        config.persist(&PersistedSettings::default());
        assert_eq!(config.store().writes, 0);
    }
}
