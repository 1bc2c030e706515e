//! The order-preserving wire codec.
//!
//! Each backing byte packs 7 payload bits into its top 7 bit positions
//! with the low bit reserved as a zero tag. Encoding folds in how many of
//! those 7 bits are zero so that the emitted byte both sorts correctly
//! against every other encoded sequence and tells `decode` exactly how
//! many bits it represents, with no separate length prefix.

use crate::compat::{vec, Vec};

/// `7` for every full backing byte; for the last byte, `bit_length mod 7`
/// (or `7` when that remainder is `0`).
fn last_byte_width(bit_length: usize) -> u8 {
    let r = (bit_length % 7) as u8;
    if r == 0 {
        7
    } else {
        r
    }
}

/// Encode `bit_length` payload bits packed into `data` (7 bits/byte, tag
/// bit always zero) into the order-preserving wire form.
pub fn encode(bit_length: usize, data: &[u8]) -> Vec<u8> {
    let n = data.len();
    let mut out = vec![0u8; n];
    for (i, &d) in data.iter().enumerate() {
        let width = if i + 1 == n { last_byte_width(bit_length) } else { 7 };
        let zero_count = width - d.count_ones() as u8;
        out[i] = d + zero_count;
    }
    out
}

/// Decode the wire form back into `(bit_length, data)`, `data` using the
/// same 7-bits-per-byte, zero-tag interior layout `encode` consumed.
pub fn decode(bytes: &[u8]) -> (usize, Vec<u8>) {
    let mut bits: Vec<bool> = Vec::new();
    for &byte in bytes {
        let mut remaining = byte;
        let mut cursor: u16 = 128;
        while remaining != 0 && cursor > 0 {
            if remaining as u16 >= cursor {
                bits.push(true);
                remaining -= cursor as u8;
            } else {
                bits.push(false);
                remaining -= 1;
            }
            cursor >>= 1;
        }
    }
    let bit_length = bits.len();
    let mut out = vec![0u8; (bit_length + 6) / 7];
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            let byte = i / 7;
            let pos = 7 - (i % 7) as u8;
            out[byte] |= 1u8 << pos;
        }
    }
    (bit_length, out)
}
