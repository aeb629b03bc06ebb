//! Stable key identifiers for the companion dictionary

// Wire format values. Keys are stable identifiers, not positional:
// the phone side may send any subset in any order.
const KEY_TEMPERATURE: u32 = 0x01;
const KEY_CONDITIONS: u32 = 0x02;
const KEY_ICON_NUMBER: u32 = 0x03;
const KEY_SHOW_CONDITIONS: u32 = 0x04;
const KEY_VIBRATE_DISCONNECT: u32 = 0x05;
const KEY_UPDATE_INTERVAL: u32 = 0x06;
const KEY_COLOR_TIME_BG: u32 = 0x10;
const KEY_COLOR_TIME_STROKE: u32 = 0x11;
const KEY_COLOR_WEATHER_BG: u32 = 0x12;
const KEY_COLOR_WEATHER_STROKE: u32 = 0x13;
const KEY_COLOR_BATTERY_BAR: u32 = 0x14;
const KEY_DATE_FORMAT: u32 = 0x20;

/// Keys the watch recognizes in an inbound dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TupleKey {
    /// Current temperature, whole degrees
    Temperature,
    /// Short weather description text
    Conditions,
    /// Index into the fixed weather icon set
    IconNumber,
    /// Conditions region visibility flag (0/1)
    ShowConditions,
    /// Haptic-on-disconnect flag (0/1)
    VibrateDisconnect,
    /// Minutes between refresh pings, as numeric text
    UpdateInterval,
    /// Clock/date region background, packed 0xRRGGBB
    ColorTimeBg,
    /// Clock/date text color, packed 0xRRGGBB
    ColorTimeStroke,
    /// Window backdrop behind the weather regions, packed 0xRRGGBB
    ColorWeatherBg,
    /// Weather text and icon stroke color, packed 0xRRGGBB
    ColorWeatherStroke,
    /// Battery gauge fill color, packed 0xRRGGBB
    ColorBatteryBar,
    /// strftime-style date pattern text
    DateFormat,
}

impl TupleKey {
    /// Every recognized key, in the order the watch merges them.
    ///
    /// Weather values first, then behavior flags, then colors, then the
    /// date pattern. A key's position here decides when its side effects
    /// run relative to other keys in the same dictionary.
    pub const MERGE_ORDER: [TupleKey; 12] = [
        TupleKey::Temperature,
        TupleKey::Conditions,
        TupleKey::IconNumber,
        TupleKey::ShowConditions,
        TupleKey::VibrateDisconnect,
        TupleKey::UpdateInterval,
        TupleKey::ColorTimeBg,
        TupleKey::ColorTimeStroke,
        TupleKey::ColorWeatherBg,
        TupleKey::ColorWeatherStroke,
        TupleKey::ColorBatteryBar,
        TupleKey::DateFormat,
    ];

    /// Parse a key from its wire format value
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            KEY_TEMPERATURE => Some(TupleKey::Temperature),
            KEY_CONDITIONS => Some(TupleKey::Conditions),
            KEY_ICON_NUMBER => Some(TupleKey::IconNumber),
            KEY_SHOW_CONDITIONS => Some(TupleKey::ShowConditions),
            KEY_VIBRATE_DISCONNECT => Some(TupleKey::VibrateDisconnect),
            KEY_UPDATE_INTERVAL => Some(TupleKey::UpdateInterval),
            KEY_COLOR_TIME_BG => Some(TupleKey::ColorTimeBg),
            KEY_COLOR_TIME_STROKE => Some(TupleKey::ColorTimeStroke),
            KEY_COLOR_WEATHER_BG => Some(TupleKey::ColorWeatherBg),
            KEY_COLOR_WEATHER_STROKE => Some(TupleKey::ColorWeatherStroke),
            KEY_COLOR_BATTERY_BAR => Some(TupleKey::ColorBatteryBar),
            KEY_DATE_FORMAT => Some(TupleKey::DateFormat),
            _ => None,
        }
    }

    /// Convert to wire format value
    pub fn as_u32(self) -> u32 {
        match self {
            TupleKey::Temperature => KEY_TEMPERATURE,
            TupleKey::Conditions => KEY_CONDITIONS,
            TupleKey::IconNumber => KEY_ICON_NUMBER,
            TupleKey::ShowConditions => KEY_SHOW_CONDITIONS,
            TupleKey::VibrateDisconnect => KEY_VIBRATE_DISCONNECT,
            TupleKey::UpdateInterval => KEY_UPDATE_INTERVAL,
            TupleKey::ColorTimeBg => KEY_COLOR_TIME_BG,
            TupleKey::ColorTimeStroke => KEY_COLOR_TIME_STROKE,
            TupleKey::ColorWeatherBg => KEY_COLOR_WEATHER_BG,
            TupleKey::ColorWeatherStroke => KEY_COLOR_WEATHER_STROKE,
            TupleKey::ColorBatteryBar => KEY_COLOR_BATTERY_BAR,
            TupleKey::DateFormat => KEY_DATE_FORMAT,
        }
    }
}
