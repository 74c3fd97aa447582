/// Data mask applied after placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskPattern {
    /// (row + col) % 2 == 0
    #[default]
    Checkerboard,
}

impl MaskPattern {
    /// Check if module at (row, col) should be inverted
    pub fn is_masked(&self, row: usize, col: usize) -> bool {
        match self {
            MaskPattern::Checkerboard => (row + col) % 2 == 0,
        }
    }
}
