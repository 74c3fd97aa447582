/// Largest supported version
pub const MAX_VERSION: u8 = 5;

// Payload bytes per version, index 0 unused.
const BYTE_CAPACITY: [usize; MAX_VERSION as usize + 1] = [0, 14, 26, 42, 62, 84];

/// Largest payload any version accepts
pub const MAX_PAYLOAD_BYTES: usize = BYTE_CAPACITY[MAX_VERSION as usize];

const MIN_EC_CODEWORDS: usize = 7;
const MAX_EC_CODEWORDS: usize = 30;

/// Mode indicator for 8-bit byte mode
pub const BYTE_MODE_INDICATOR: u8 = 0b0100;

/// Filler bytes alternated after the terminator
pub const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Payload capacity in bytes; 0 for unsupported versions
pub fn byte_capacity(version: u8) -> usize {
    BYTE_CAPACITY.get(version as usize).copied().unwrap_or(0)
}

/// Parity codewords for a data capacity: a third of it, clamped to 7..=30
pub fn ec_codewords(capacity: usize) -> usize {
    (capacity / 3).clamp(MIN_EC_CODEWORDS, MAX_EC_CODEWORDS)
}
