//! Outbound side of the companion channel

/// Errors from the outbound channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendError {
    /// Outbox busy or full
    Busy,
    /// Companion link is down
    Closed,
}

/// Outbound message channel.
///
/// Delivery and ordering are not guaranteed. A failed send is a dropped
/// message: callers log it and move on, and the next due tick tries
/// again from scratch.
pub trait MessageOutbox {
    /// Queue one empty refresh ping for the companion
    fn send_refresh_request(&mut self) -> Result<(), SendError>;
}
