//! card_qr - matrix-code encoder for sharing contact cards
//!
//! A self-contained encoder for short UTF-8 payloads (up to 84 bytes): GF(256)
//! arithmetic, Reed-Solomon parity, byte-mode packing, structural patterns,
//! zigzag placement and a fixed checkerboard mask, rasterized onto any
//! [`render::Surface`].
//!
//! The scheme is a simplified relative of QR Model 2 (no format information,
//! no alignment patterns, one mask) and is not meant for generic scanners.
//!
//! ```
//! let matrix = card_qr::encode_to_matrix("HI").unwrap();
//! assert_eq!(matrix.size(), 21);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Contact cards and the share flow
pub mod card;
/// Environment-driven settings
pub mod config;
/// Encoding stages (GF(256), Reed-Solomon, packing, placement, masking)
#[allow(missing_docs)]
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (QrMatrix, Version, Cell, MaskPattern)
pub mod models;
/// End-to-end encoding
pub mod pipeline;
/// Rasterization onto pixel surfaces
#[allow(missing_docs)]
pub mod render;
/// Tooling helpers (PNG output, text rendering, batch encoding)
#[allow(missing_docs)]
pub mod tools;

pub use card::{ContactCard, PhoneNumber, share_contact, share_payload};
pub use error::{EncodeError, ShareError};
pub use models::{Cell, MaskPattern, QrMatrix, Version};
pub use pipeline::{Codewords, codewords, encode_to_matrix};
pub use render::{Surface, draw};
