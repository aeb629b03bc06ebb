//! Settings record definition
//!
//! One fixed set of fields covering colors, behavior flags, the date
//! pattern, and the last-shown display strings. Constructed with
//! defaults at boot, overlaid wholesale by a persisted blob when one
//! exists, then mutated one field at a time by the message merger.

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::icon::IconId;

/// Maximum date pattern length
pub const DATE_FORMAT_LEN: usize = 14;

/// Maximum formatted clock text length
pub const TIME_LEN: usize = 9;

/// Maximum formatted date text length
pub const DATE_LEN: usize = 9;

/// Maximum formatted temperature text length
pub const TEMPERATURE_LEN: usize = 7;

/// Maximum conditions text length
pub const CONDITIONS_LEN: usize = 31;

/// Copy text into a bounded field, truncating silently at a char boundary
pub fn copy_truncated<const N: usize>(dst: &mut String<N>, src: &str) {
    dst.clear();
    for c in src.chars() {
        if dst.push(c).is_err() {
            break;
        }
    }
}

/// The persisted settings record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PersistedSettings {
    /// Clock and date region background
    pub time_bg: Color,
    /// Window backdrop behind the weather regions
    pub weather_bg: Color,
    /// Battery gauge fill
    pub battery_bar: Color,
    /// Clock and date text color
    pub time_stroke: Color,
    /// Weather text and icon stroke color
    pub weather_stroke: Color,
    /// strftime-style date pattern
    pub date_format: String<DATE_FORMAT_LEN>,
    /// Double-pulse when the phone link drops
    pub vibrate_disconnect: bool,
    /// Minutes between refresh pings.
    ///
    /// Stored exactly as merged; values below 1 are clamped where the
    /// interval is evaluated, not here.
    pub update_interval: i32,
    /// Conditions region visibility
    pub show_conditions: bool,
    /// Last formatted clock text
    pub time: String<TIME_LEN>,
    /// Last formatted date text
    pub date: String<DATE_LEN>,
    /// Last formatted temperature text
    pub temperature: String<TEMPERATURE_LEN>,
    /// Last received conditions text
    pub conditions: String<CONDITIONS_LEN>,
    /// Current weather icon
    pub icon: IconId,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        let mut date_format = String::new();
        let _ = date_format.push_str("%a %m/%d");
        Self {
            time_bg: Color::WHITE,
            weather_bg: Color::BLACK,
            battery_bar: Color::WHITE,
            time_stroke: Color::BLACK,
            weather_stroke: Color::WHITE,
            date_format,
            vibrate_disconnect: false,
            update_interval: 20,
            show_conditions: true,
            time: blank(),
            date: blank(),
            temperature: blank(),
            conditions: blank(),
            icon: IconId::Default,
        }
    }
}

/// Single-space placeholder so a region never renders truly empty
fn blank<const N: usize>() -> String<N> {
    let mut s = String::new();
    let _ = s.push(' ');
    s
}
