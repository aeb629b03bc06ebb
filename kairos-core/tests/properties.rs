//! Property tests for the pure gauge math and the persistence round-trip

use kairos_core::color::Color;
use kairos_core::display::battery::bar_width;
use kairos_core::icon::IconId;
use kairos_core::settings::store::{ConfigStore, SETTINGS_BLOB_MAX};
use kairos_core::settings::types::{self, PersistedSettings};
use kairos_core::traits::storage::{SettingsStore, StorageError};
use proptest::prelude::*;

/// Minimal in-memory store for round-trip checks
#[derive(Default)]
struct VecStore {
    blob: Option<Vec<u8>>,
}

impl SettingsStore for VecStore {
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize, StorageError> {
        match &self.blob {
            Some(blob) if blob.len() <= buffer.len() => {
                buffer[..blob.len()].copy_from_slice(blob);
                Ok(blob.len())
            }
            Some(_) => Err(StorageError::Capacity),
            None => Err(StorageError::NotFound),
        }
    }

    fn write(&mut self, data: &[u8]) -> Result<(), StorageError> {
        self.blob = Some(data.to_vec());
        Ok(())
    }
}

fn color_strategy() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
        .prop_map(|(r, g, b, a)| Color { r, g, b, a })
}

fn bounded_text<const N: usize>() -> impl Strategy<Value = heapless::String<N>> {
    proptest::string::string_regex(&format!("[ -~]{{0,{}}}", N))
        .unwrap()
        .prop_map(|s| {
            let mut out = heapless::String::new();
            types::copy_truncated(&mut out, &s);
            out
        })
}

prop_compose! {
    fn settings_strategy()(
        colors in proptest::array::uniform5(color_strategy()),
        date_format in bounded_text::<14>(),
        vibrate_disconnect in any::<bool>(),
        update_interval in any::<i32>(),
        show_conditions in any::<bool>(),
        time in bounded_text::<9>(),
        date in bounded_text::<9>(),
        temperature in bounded_text::<7>(),
        conditions in bounded_text::<31>(),
        icon in (0i32..=12).prop_map(IconId::from_number),
    ) -> PersistedSettings {
        let [time_bg, weather_bg, battery_bar, time_stroke, weather_stroke] = colors;
        PersistedSettings {
            time_bg,
            weather_bg,
            battery_bar,
            time_stroke,
            weather_stroke,
            date_format,
            vibrate_disconnect,
            update_interval,
            show_conditions,
            time,
            date,
            temperature,
            conditions,
            icon,
        }
    }
}

proptest! {
    #[test]
    fn battery_bar_endpoints(width in 0u16..=512) {
        prop_assert_eq!(bar_width(0, width), 0);
        prop_assert_eq!(bar_width(100, width), width);
    }

    #[test]
    fn battery_bar_monotonic(width in 0u16..=512, a in 0u8..=100, b in 0u8..=100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(bar_width(lo, width) <= bar_width(hi, width));
    }

    #[test]
    fn battery_bar_never_overflows_region(percent in any::<u8>(), width in 0u16..=512) {
        prop_assert!(bar_width(percent, width) <= width);
    }

    #[test]
    fn settings_round_trip(settings in settings_strategy()) {
        let mut config = ConfigStore::new(VecStore::default());
        config.persist(&settings);
        prop_assert_eq!(config.load(), settings);
    }

    #[test]
    fn settings_blob_fits_reserved_space(settings in settings_strategy()) {
        let mut buffer = [0u8; SETTINGS_BLOB_MAX];
        prop_assert!(postcard::to_slice(&settings, &mut buffer).is_ok());
    }
}
