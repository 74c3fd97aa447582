//! Byte-mode bit packing
//!
//! Bits are `bool`s, most significant bit first within every byte.

use crate::error::EncodeError;
use crate::models::Version;

use super::tables::{BYTE_MODE_INDICATOR, PAD_BYTES};

const TERMINATOR_BITS: usize = 4;

/// Append-only MSB-first bit buffer
#[derive(Debug, Default)]
struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    fn push_bits(&mut self, value: u32, count: usize) {
        for i in (0..count).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    fn len(&self) -> usize {
        self.bits.len()
    }
}

/// Serialize `text` into `capacity * 8` bits for `version`.
///
/// Layout: 4-bit mode indicator, 8-bit byte count, payload bytes, up to four
/// terminator zeros, zero fill to a byte boundary, then alternating filler
/// bytes.
///
/// Payloads of `capacity - 1` or `capacity` bytes do not leave room for the
/// 12 header bits; their stream runs one or two bytes past `capacity * 8`
/// (see [`packed_len`]) and no payload bit is dropped.
pub fn pack_bits(text: &str, version: Version) -> Result<Vec<bool>, EncodeError> {
    let data = text.as_bytes();
    let capacity = version.capacity();
    if data.len() > capacity {
        return Err(EncodeError::PayloadTooLarge {
            len: data.len(),
            capacity,
        });
    }

    let total_bits = capacity * 8;
    let mut buf = BitBuffer::with_capacity(total_bits);
    buf.push_bits(BYTE_MODE_INDICATOR as u32, 4);
    buf.push_bits(data.len() as u32, 8);
    for &byte in data {
        buf.push_bits(byte as u32, 8);
    }

    let terminator = TERMINATOR_BITS.min(total_bits.saturating_sub(buf.len()));
    buf.push_bits(0, terminator);
    while buf.len() % 8 != 0 {
        buf.bits.push(false);
    }

    for &pad in PAD_BYTES.iter().cycle() {
        if buf.len() >= total_bits {
            break;
        }
        buf.push_bits(pad as u32, 8);
    }

    debug_assert_eq!(buf.len(), packed_len(data.len(), version));
    Ok(buf.bits)
}

/// Bit length `pack_bits` produces for a payload of `byte_len` bytes.
pub fn packed_len(byte_len: usize, version: Version) -> usize {
    let header_and_data = 12 + byte_len * 8;
    (version.capacity() * 8).max(header_and_data.next_multiple_of(8))
}

/// Group bits eight at a time, MSB first. A trailing partial group is
/// left-aligned as if padded with zeros.
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, &bit)| acc | ((bit as u8) << (7 - i)))
        })
        .collect()
}

/// Expand bytes to bits, MSB first
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
        .collect()
}
