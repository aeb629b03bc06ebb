//! Companion channel message schema for the Kairos watchface
//!
//! This crate defines the key-value messages exchanged between the watch
//! and the companion phone app. The channel is asynchronous and carries
//! one dictionary per message: the phone pushes weather and settings
//! updates to the watch, the watch sends an empty refresh ping back.
//!
//! # Wire Overview
//!
//! Each message is a length-prefixed dictionary:
//! ```text
//! ┌───────┬─────────────────────────────────────────────┐
//! │ COUNT │ ENTRY × COUNT                               │
//! │ 1B    │ KEY (4B LE) KIND (1B) LEN (2B LE) PAYLOAD   │
//! └───────┴─────────────────────────────────────────────┘
//! ```
//!
//! A message may carry any subset of the recognized keys, in any order.
//! Entries with unknown keys or value kinds are skipped over their
//! length prefix, so schema additions on the phone side never break an
//! older watch.

#![no_std]
#![deny(unsafe_code)]

pub mod dict;
pub mod keys;
pub mod messages;

pub use dict::{DictError, VALUE_KIND_INT, VALUE_KIND_TEXT};
pub use keys::TupleKey;
pub use messages::{Batch, RefreshRequest, Tuple, TupleValue, MAX_TEXT_LEN, MAX_TUPLES};
