//! # Occupancy Bitmap
//!
//! One bit per word, packed into bytes behind a length prefix.
//!
//! ## Format
//!
//! ```text
//! [2 bytes: payload length N, little-endian]
//! [N bytes: payload]
//!
//! word i -> byte i / 8, bit i % 8 (bit 0 = least significant)
//! bit value 1 = allocated, unused high bits of the last byte = 0
//! ```

use crate::error::{ArenaError, ArenaResult};
use crate::MAX_WORDS;

/// Size of the length prefix in bytes.
pub const PREFIX_LEN: usize = 2;

/// Encodes an occupancy table as a length-prefixed bitmap.
///
/// Only the first [`MAX_WORDS`] entries are encoded, which keeps the payload
/// length inside the 16-bit prefix. Ownership of the returned buffer passes
/// to the caller.
#[must_use]
pub fn encode(occupancy: &[bool]) -> Vec<u8> {
    let words = &occupancy[..occupancy.len().min(MAX_WORDS)];
    let payload_len = words.len().div_ceil(8);
    let prefix = u16::try_from(payload_len).unwrap_or(u16::MAX);

    let mut buffer = vec![0u8; PREFIX_LEN + payload_len];
    buffer[..PREFIX_LEN].copy_from_slice(&prefix.to_le_bytes());

    let payload = &mut buffer[PREFIX_LEN..];
    for (index, &allocated) in words.iter().enumerate() {
        if allocated {
            payload[index / 8] |= 1 << (index % 8);
        }
    }

    buffer
}

/// Returns the payload of a bitmap buffer after checking its prefix.
///
/// # Errors
///
/// Returns [`ArenaError::MalformedBitmap`] if the buffer is shorter than its
/// prefix or the prefix disagrees with the payload length.
pub fn payload(buffer: &[u8]) -> ArenaResult<&[u8]> {
    if buffer.len() < PREFIX_LEN {
        return Err(malformed(format!(
            "buffer of {} bytes has no length prefix",
            buffer.len()
        )));
    }

    let (prefix, payload) = buffer.split_at(PREFIX_LEN);
    let declared = usize::from(u16::from_le_bytes([prefix[0], prefix[1]]));
    if declared != payload.len() {
        return Err(malformed(format!(
            "prefix declares {declared} bytes but payload has {}",
            payload.len()
        )));
    }

    Ok(payload)
}

/// Decodes a bitmap buffer back into an occupancy table of `words` entries.
///
/// # Errors
///
/// Returns [`ArenaError::MalformedBitmap`] if the payload is not exactly
/// `ceil(words / 8)` bytes or a padding bit past `words` is set.
pub fn decode(buffer: &[u8], words: usize) -> ArenaResult<Vec<bool>> {
    let payload = payload(buffer)?;

    if payload.len() != words.div_ceil(8) {
        return Err(malformed(format!(
            "{words} words need {} payload bytes, got {}",
            words.div_ceil(8),
            payload.len()
        )));
    }

    if let Some(&last) = payload.last() {
        let used_bits = words - (payload.len() - 1) * 8;
        let padding = if used_bits == 8 { 0 } else { last >> used_bits };
        if padding != 0 {
            return Err(malformed(format!(
                "padding bits past word {words} are set"
            )));
        }
    }

    Ok((0..words)
        .map(|index| payload[index / 8] & (1 << (index % 8)) != 0)
        .collect())
}

fn malformed(reason: String) -> ArenaError {
    ArenaError::MalformedBitmap(reason)
}
