//! Zigzag data placement
use crate::models::Cell;

use super::builder::MatrixBuilder;

/// Fill every unresolved cell from `bits`, returning how many cells were
/// filled.
///
/// Walks column pairs right to left (column 6 is skipped, its neighbour pair
/// shifts one left), alternating upward and downward scans starting upward.
/// Within a row the right column of the pair comes first. Once `bits` runs
/// out the remaining cells are light.
pub fn place_data(builder: &mut MatrixBuilder, bits: &[bool]) -> usize {
    let dimension = builder.size();
    let mut bit_index = 0usize;
    let mut upward = true;
    let mut col = dimension as i32 - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
        }

        for i in 0..dimension {
            let row = if upward { dimension - 1 - i } else { i };
            for c in [col, col - 1] {
                let c = c as usize;
                if builder.get(row, c).is_resolved() {
                    continue;
                }
                let bit = bits.get(bit_index).copied().unwrap_or(false);
                builder.set(row, c, Cell::from_dark(bit));
                bit_index += 1;
            }
        }

        upward = !upward;
        col -= 2;
    }

    log::trace!(
        "placed {} of {} bits into {} modules",
        bit_index.min(bits.len()),
        bits.len(),
        bit_index
    );
    bit_index
}
