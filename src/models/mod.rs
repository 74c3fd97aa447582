pub mod cell;
pub mod mask;
pub mod matrix;
pub mod version;

pub use cell::Cell;
pub use mask::MaskPattern;
pub use matrix::QrMatrix;
pub use version::Version;
