use crate::models::MaskPattern;

use super::builder::MatrixBuilder;

/// Invert every resolved cell the mask pattern selects, structural
/// modules included.
pub fn apply_mask(builder: &mut MatrixBuilder, mask_pattern: MaskPattern) {
    builder.for_each_mut(|row, col, cell| {
        if cell.is_resolved() && mask_pattern.is_masked(row, col) {
            *cell = cell.inverted();
        }
    });
}
