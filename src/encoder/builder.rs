use crate::models::{Cell, QrMatrix, Version};

/// Mutable grid of tri-state cells, owned by one encode call.
///
/// Pattern stamping, data placement and masking all write through this
/// builder; `finish` hands back the immutable [`QrMatrix`].
#[derive(Debug, Clone)]
pub struct MatrixBuilder {
    version: Version,
    size: usize,
    cells: Vec<Cell>,
}

impl MatrixBuilder {
    /// All cells unresolved
    pub fn new(version: Version) -> Self {
        let size = version.size();
        Self {
            version,
            size,
            cells: vec![Cell::Unresolved; size * size],
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col); out of bounds reads as unresolved
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= self.size || col >= self.size {
            return Cell::Unresolved;
        }
        self.cells[row * self.size + col]
    }

    /// Overwrite the cell at (row, col); out of bounds is ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row >= self.size || col >= self.size {
            return;
        }
        self.cells[row * self.size + col] = cell;
    }

    /// Write only if nothing has claimed the cell yet
    pub fn set_if_unresolved(&mut self, row: usize, col: usize, cell: Cell) {
        if !self.get(row, col).is_resolved() {
            self.set(row, col, cell);
        }
    }

    /// Rewrite every cell in place with its coordinates
    pub(crate) fn for_each_mut(&mut self, mut f: impl FnMut(usize, usize, &mut Cell)) {
        let size = self.size;
        for (index, cell) in self.cells.iter_mut().enumerate() {
            f(index / size, index % size, cell);
        }
    }

    pub fn unresolved_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_resolved()).count()
    }

    pub fn is_resolved(&self) -> bool {
        self.cells.iter().all(Cell::is_resolved)
    }

    /// Freeze into the finished matrix
    pub fn finish(self) -> QrMatrix {
        debug_assert!(self.is_resolved(), "{} cells unresolved", self.unresolved_count());
        QrMatrix::from_cells(self.version, &self.cells)
    }
}
