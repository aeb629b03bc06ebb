//! Device services seam

/// System services of the watch itself
pub trait DeviceServices {
    /// Device-wide 12/24-hour clock style flag
    fn is_24h_clock(&self) -> bool;

    /// Fire the double-pulse haptic alert
    fn vibrate_double_pulse(&mut self);
}
