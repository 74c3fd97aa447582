use super::{Cell, Version};

/// Finished square module grid, bit-packed row-major (true = dark)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    version: Version,
    size: usize,
    data: Vec<u8>,
}

impl QrMatrix {
    /// Pack a fully resolved cell grid. Unresolved cells read as light.
    pub(crate) fn from_cells(version: Version, cells: &[Cell]) -> Self {
        let size = version.size();
        debug_assert_eq!(cells.len(), size * size);
        let mut data = vec![0u8; (size * size).div_ceil(8)];
        for (index, cell) in cells.iter().enumerate() {
            if cell.is_dark() == Some(true) {
                data[index / 8] |= 1 << (index % 8);
            }
        }
        Self {
            version,
            size,
            data,
        }
    }

    /// Version this matrix was built for
    pub fn version(&self) -> Version {
        self.version
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module at (row, col); out of bounds reads as light
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let index = row * self.size + col;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Iterate rows top to bottom, each as a vector of modules
    pub fn rows(&self) -> impl Iterator<Item = Vec<bool>> + '_ {
        (0..self.size).map(move |row| (0..self.size).map(|col| self.get(row, col)).collect())
    }

    /// Number of dark modules
    pub fn dark_count(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Raw packed bits
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
