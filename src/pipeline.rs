use crate::encoder::bitstream::{bits_to_bytes, bytes_to_bits, pack_bits};
use crate::encoder::builder::MatrixBuilder;
use crate::encoder::mask::apply_mask;
use crate::encoder::patterns::stamp_structural;
use crate::encoder::placement::place_data;
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::error::EncodeError;
use crate::models::{MaskPattern, QrMatrix, Version};

/// Data and parity codewords for one payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codewords {
    /// Version chosen for the payload
    pub version: Version,
    /// Packed data codewords: `version.capacity()` bytes, one or two more
    /// when the payload fills the version
    pub data: Vec<u8>,
    /// Parity codewords, exactly `version.ec_codewords()` bytes
    pub parity: Vec<u8>,
}

impl Codewords {
    /// Data followed by parity
    pub fn stream(&self) -> Vec<u8> {
        let mut full = Vec::with_capacity(self.data.len() + self.parity.len());
        full.extend_from_slice(&self.data);
        full.extend_from_slice(&self.parity);
        full
    }
}

/// Pack `text` and compute its parity.
///
/// The version is chosen from the UTF-8 byte length and always succeeds;
/// oversized payloads are rejected by the packer.
pub fn codewords(text: &str) -> Result<Codewords, EncodeError> {
    let version = Version::for_payload_len(text.len());
    let bits = match pack_bits(text, version) {
        Ok(bits) => bits,
        Err(err) => {
            log::warn!("rejecting payload: {}", err);
            return Err(err);
        }
    };
    let data = bits_to_bytes(&bits);

    let rs = ReedSolomonEncoder::new(version.ec_codewords());
    let parity = rs.encode(&data);
    log::debug!(
        "payload {} bytes -> version {} ({}x{}), {} data + {} parity codewords",
        text.len(),
        version,
        version.size(),
        version.size(),
        data.len(),
        parity.len()
    );

    Ok(Codewords {
        version,
        data,
        parity,
    })
}

/// Encode `text` into a fully resolved matrix.
pub fn encode_to_matrix(text: &str) -> Result<QrMatrix, EncodeError> {
    let codewords = codewords(text)?;

    let mut builder = MatrixBuilder::new(codewords.version);
    stamp_structural(&mut builder);

    let bits = bytes_to_bits(&codewords.stream());
    place_data(&mut builder, &bits);
    debug_assert!(builder.is_resolved());

    apply_mask(&mut builder, MaskPattern::Checkerboard);
    Ok(builder.finish())
}
