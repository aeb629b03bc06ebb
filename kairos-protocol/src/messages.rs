//! Typed tuples and dictionaries for the companion channel
//!
//! Inbound messages are a [`Batch`] of key-value [`Tuple`]s; the only
//! outbound message is the empty [`RefreshRequest`] ping.

use heapless::{String, Vec};

use crate::dict::DictError;
use crate::keys::TupleKey;

/// Maximum text payload the watch keeps from a single tuple.
///
/// Longer inbound text is truncated here; the settings record applies
/// its own tighter per-field bounds on top.
pub const MAX_TEXT_LEN: usize = 32;

/// Maximum tuples in one batch (the schema has 12 recognized keys)
pub const MAX_TUPLES: usize = 16;

/// Value carried by one tuple
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TupleValue {
    /// Signed integer (temperatures, icon indices, flags, packed colors)
    Int(i32),
    /// UTF-8 text, truncated to [`MAX_TEXT_LEN`]
    Text(String<MAX_TEXT_LEN>),
}

impl TupleValue {
    /// Build a text value, truncating at a char boundary
    pub fn text_from(text: &str) -> Self {
        let mut out = String::new();
        for c in text.chars() {
            if out.push(c).is_err() {
                break;
            }
        }
        TupleValue::Text(out)
    }

    /// Integer payload, or `None` for text tuples
    pub fn as_int(&self) -> Option<i32> {
        match self {
            TupleValue::Int(value) => Some(*value),
            TupleValue::Text(_) => None,
        }
    }

    /// Text payload, or `None` for integer tuples
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TupleValue::Int(_) => None,
            TupleValue::Text(text) => Some(text.as_str()),
        }
    }
}

/// One key-value pair of an inbound dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuple {
    pub key: TupleKey,
    pub value: TupleValue,
}

/// One delivered inbound message: zero or more recognized tuples.
///
/// Lookups are keyed, not positional; a batch never holds more than one
/// tuple per key in practice, and `get` returns the first if it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Batch {
    tuples: Vec<Tuple, MAX_TUPLES>,
}

impl Batch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self { tuples: Vec::new() }
    }

    /// Append a tuple, returning it back if the batch is full
    pub fn push(&mut self, tuple: Tuple) -> Result<(), Tuple> {
        self.tuples.push(tuple)
    }

    /// Append an integer tuple
    pub fn push_int(&mut self, key: TupleKey, value: i32) -> Result<(), Tuple> {
        self.push(Tuple {
            key,
            value: TupleValue::Int(value),
        })
    }

    /// Append a text tuple (truncating to the protocol bound)
    pub fn push_text(&mut self, key: TupleKey, text: &str) -> Result<(), Tuple> {
        self.push(Tuple {
            key,
            value: TupleValue::text_from(text),
        })
    }

    /// Look up the value for a key, if present
    pub fn get(&self, key: TupleKey) -> Option<&TupleValue> {
        self.tuples.iter().find(|t| t.key == key).map(|t| &t.value)
    }

    /// Integer value for a key; `None` if absent or of text kind
    pub fn int(&self, key: TupleKey) -> Option<i32> {
        self.get(key).and_then(TupleValue::as_int)
    }

    /// Text value for a key; `None` if absent or of integer kind
    pub fn text(&self, key: TupleKey) -> Option<&str> {
        self.get(key).and_then(TupleValue::as_text)
    }

    /// Number of tuples in the batch
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// True if the batch carries no tuples
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Iterate over the tuples in arrival order
    pub fn iter(&self) -> impl Iterator<Item = &Tuple> {
        self.tuples.iter()
    }
}

/// Outbound refresh ping.
///
/// Carries no payload; it only asks the phone to push a fresh weather
/// batch. There is no retry, no deduplication, and no correlation with
/// the eventual response - whatever batch arrives later is merged like
/// any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshRequest;

impl RefreshRequest {
    /// Encode the ping as an empty dictionary
    pub fn encode(buffer: &mut [u8]) -> Result<usize, DictError> {
        Batch::new().encode(buffer)
    }
}
