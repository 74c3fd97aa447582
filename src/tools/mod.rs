//! Helpers shared by `qrtool` and the benchmarks

use crate::card::{ContactCard, share_payload};
use crate::encode_to_matrix;
use crate::error::ShareError;
use crate::models::QrMatrix;
use crate::render::to_gray_image;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure of a tool-level operation
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid contacts file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Share(#[from] ShareError),
}

/// Load a JSON array of contacts.
pub fn load_contacts<P: AsRef<Path>>(path: P) -> Result<Vec<ContactCard>, ToolError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Rasterize `matrix` onto a `size` x `size` grayscale PNG.
pub fn save_png<P: AsRef<Path>>(matrix: &QrMatrix, path: P, size: u32) -> Result<(), ToolError> {
    to_gray_image(matrix, size, size).save(path)?;
    Ok(())
}

/// Render the matrix as text, two characters per module, with a light
/// border of `quiet` modules.
pub fn to_text(matrix: &QrMatrix, quiet: usize) -> String {
    let side = matrix.size() + 2 * quiet;
    let blank = "  ".repeat(side) + "\n";
    let mut out = String::with_capacity(side * (side * 2 * 3 + 1));
    for _ in 0..quiet {
        out.push_str(&blank);
    }
    for row in matrix.rows() {
        out.push_str(&"  ".repeat(quiet));
        for dark in row {
            out.push_str(if dark { "██" } else { "  " });
        }
        out.push_str(&"  ".repeat(quiet));
        out.push('\n');
    }
    for _ in 0..quiet {
        out.push_str(&blank);
    }
    out
}

/// Summary statistics for a finished matrix.
#[derive(Debug, Clone, Copy)]
pub struct MatrixStats {
    /// Count of dark modules.
    pub dark_modules: usize,
    /// Total modules in the matrix.
    pub total_modules: usize,
    /// Ratio of dark modules to total modules.
    pub dark_ratio: f64,
}

/// Compute dark module stats for a matrix.
pub fn matrix_stats(matrix: &QrMatrix) -> MatrixStats {
    let dark = matrix.dark_count();
    let total = matrix.size() * matrix.size();
    let ratio = if total == 0 {
        0.0
    } else {
        dark as f64 / total as f64
    };
    MatrixStats {
        dark_modules: dark,
        total_modules: total,
        dark_ratio: ratio,
    }
}

/// File name used for the contact at `index` of a batch.
pub fn card_file_name(index: usize, card: &ContactCard) -> String {
    let name: String = format!("{}-{}", card.first_name.trim(), card.last_name.trim())
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{:04}-{}.png", index, name.trim_matches('_'))
}

/// Encode one contact to a PNG in `out_dir`.
pub fn encode_card_png(
    index: usize,
    card: &ContactCard,
    out_dir: &Path,
    size: u32,
) -> Result<PathBuf, ToolError> {
    let payload = share_payload(card)?;
    let matrix = encode_to_matrix(&payload).map_err(ShareError::from)?;
    let path = out_dir.join(card_file_name(index, card));
    save_png(&matrix, &path, size)?;
    Ok(path)
}

/// Encode every contact in parallel. Results keep input order; one failing
/// contact does not stop the others.
pub fn encode_batch(
    cards: &[ContactCard],
    out_dir: &Path,
    size: u32,
) -> Vec<Result<PathBuf, ToolError>> {
    cards
        .par_iter()
        .enumerate()
        .map(|(index, card)| encode_card_png(index, card, out_dir, size))
        .collect()
}

/// Hex dump of a codeword slice
pub fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
