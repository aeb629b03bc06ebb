//! Dictionary wire codec for the companion channel.
//!
//! Message format:
//! - COUNT (1 byte): number of entries
//! - per entry:
//!   - KEY (4 bytes LE): stable key identifier
//!   - KIND (1 byte): 0x00 signed 32-bit integer, 0x01 UTF-8 text
//!   - LEN (2 bytes LE): payload length in bytes
//!   - PAYLOAD (LEN bytes)
//!
//! The length prefix makes every entry skippable: unknown keys, unknown
//! kinds, and malformed payloads are stepped over without failing the
//! dictionary. Only a physically truncated buffer is a decode error.

use crate::keys::TupleKey;
use crate::messages::{Batch, Tuple, TupleValue};

/// Value kind for signed 32-bit integers
pub const VALUE_KIND_INT: u8 = 0x00;

/// Value kind for UTF-8 text
pub const VALUE_KIND_TEXT: u8 = 0x01;

/// Bytes of entry header ahead of each payload (KEY + KIND + LEN)
const ENTRY_HEADER_LEN: usize = 7;

/// Errors that can occur during dictionary encoding or decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictError {
    /// Input ended before the announced entry count was read
    Truncated,
    /// Output buffer too small for encoding
    BufferTooSmall,
}

impl Batch {
    /// Encode this batch into a byte buffer.
    ///
    /// Returns the number of bytes written.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, DictError> {
        if buffer.is_empty() {
            return Err(DictError::BufferTooSmall);
        }
        buffer[0] = self.len() as u8;
        let mut offset = 1;

        for tuple in self.iter() {
            let payload_len = match &tuple.value {
                TupleValue::Int(_) => 4,
                TupleValue::Text(text) => text.len(),
            };
            let entry_len = ENTRY_HEADER_LEN + payload_len;
            if buffer.len() < offset + entry_len {
                return Err(DictError::BufferTooSmall);
            }

            buffer[offset..offset + 4].copy_from_slice(&tuple.key.as_u32().to_le_bytes());
            match &tuple.value {
                TupleValue::Int(value) => {
                    buffer[offset + 4] = VALUE_KIND_INT;
                    buffer[offset + 5..offset + 7].copy_from_slice(&4u16.to_le_bytes());
                    buffer[offset + 7..offset + 11].copy_from_slice(&value.to_le_bytes());
                }
                TupleValue::Text(text) => {
                    buffer[offset + 4] = VALUE_KIND_TEXT;
                    buffer[offset + 5..offset + 7]
                        .copy_from_slice(&(text.len() as u16).to_le_bytes());
                    buffer[offset + 7..offset + 7 + text.len()]
                        .copy_from_slice(text.as_bytes());
                }
            }
            offset += entry_len;
        }

        Ok(offset)
    }

    /// Decode a batch from a received message.
    ///
    /// Entries with unknown keys or kinds, mis-sized integer payloads,
    /// or invalid UTF-8 are skipped; over-long text is truncated to
    /// [`MAX_TEXT_LEN`](crate::messages::MAX_TEXT_LEN). Tuples beyond
    /// the batch capacity are dropped.
    pub fn decode(bytes: &[u8]) -> Result<Batch, DictError> {
        let count = *bytes.first().ok_or(DictError::Truncated)?;
        let mut offset = 1;
        let mut batch = Batch::new();

        for _ in 0..count {
            if bytes.len() < offset + ENTRY_HEADER_LEN {
                return Err(DictError::Truncated);
            }
            let raw_key = u32::from_le_bytes([
                bytes[offset],
                bytes[offset + 1],
                bytes[offset + 2],
                bytes[offset + 3],
            ]);
            let kind = bytes[offset + 4];
            let len = u16::from_le_bytes([bytes[offset + 5], bytes[offset + 6]]) as usize;
            offset += ENTRY_HEADER_LEN;

            if bytes.len() < offset + len {
                return Err(DictError::Truncated);
            }
            let payload = &bytes[offset..offset + len];
            offset += len;

            let Some(key) = TupleKey::from_u32(raw_key) else {
                continue;
            };
            let value = match kind {
                VALUE_KIND_INT => {
                    let Ok(raw) = payload.try_into() else {
                        continue;
                    };
                    TupleValue::Int(i32::from_le_bytes(raw))
                }
                VALUE_KIND_TEXT => {
                    let Ok(text) = core::str::from_utf8(payload) else {
                        continue;
                    };
                    TupleValue::text_from(text)
                }
                _ => continue,
            };

            let _ = batch.push(Tuple { key, value });
        }

        Ok(batch)
    }
}
