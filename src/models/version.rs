use crate::encoder::tables;

/// Size class of an encoded matrix (1-5).
///
/// The version fixes both the side length of the grid and the number of
/// payload bytes it can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest supported version
    pub const MIN: Version = Version(1);
    /// Largest supported version
    pub const MAX: Version = Version(tables::MAX_VERSION);

    /// Create a version from its number, `None` outside 1-5
    pub fn new(number: u8) -> Option<Self> {
        if (1..=tables::MAX_VERSION).contains(&number) {
            Some(Version(number))
        } else {
            None
        }
    }

    /// Pick the smallest version able to hold `byte_len` payload bytes.
    ///
    /// Never fails: lengths past the largest capacity clamp to version 5 and
    /// are rejected later by the bit packer.
    pub fn for_payload_len(byte_len: usize) -> Self {
        (1..=tables::MAX_VERSION)
            .find(|&v| tables::byte_capacity(v) >= byte_len)
            .map(Version)
            .unwrap_or(Self::MAX)
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        17 + 4 * self.0 as usize
    }

    /// Maximum payload bytes (also the number of data codewords)
    pub fn capacity(&self) -> usize {
        tables::byte_capacity(self.0)
    }

    /// Parity codewords appended after the data codewords
    pub fn ec_codewords(&self) -> usize {
        tables::ec_codewords(self.capacity())
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
