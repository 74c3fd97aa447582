//! Matrix-code encoding stages
//!
//! One module per pipeline stage:
//! - GF(256) arithmetic and Reed-Solomon parity
//! - Version capacity tables and byte-mode bit packing
//! - Structural pattern stamping, zigzag data placement and masking

/// Tri-state grid under construction
pub mod builder;
/// Byte-mode bit packing
pub mod bitstream;
/// GF(256) field arithmetic
pub mod gf256;
/// Fixed data mask
pub mod mask;
/// Finder, timing and reserved modules
pub mod patterns;
/// Zigzag data placement
pub mod placement;
/// Reed-Solomon parity generation
pub mod reed_solomon;
/// Capacity and parity tables
pub mod tables;
