//! Periodic refresh requests
//!
//! Once per minute tick the controller decides whether to ask the
//! companion for fresh weather. The request is a single empty ping:
//! no retry, no deduplication, no correlation with the response. The
//! eventual inbound batch, if any, is merged on whatever tick it lands.

use crate::traits::channel::MessageOutbox;

/// Stateless refresh-tick policy
pub struct RefreshRequester;

impl RefreshRequester {
    /// True when a tick at `minute` is due a refresh request.
    ///
    /// The merge layer stores the interval exactly as received; values
    /// below 1 are clamped here so a zero or negative interval degrades
    /// to every-minute requests instead of a division fault.
    pub fn due(minute: u8, interval_minutes: i32) -> bool {
        let interval = interval_minutes.max(1) as u32;
        u32::from(minute) % interval == 0
    }

    /// Emit at most one refresh ping for this tick.
    ///
    /// Returns whether the tick was due. A failed send is logged and
    /// dropped; the next due tick starts over.
    pub fn run<O: MessageOutbox>(minute: u8, interval_minutes: i32, outbox: &mut O) -> bool {
        if !Self::due(minute, interval_minutes) {
            return false;
        }
        if outbox.send_refresh_request().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("refresh ping dropped");
        }
        true
    }
}
