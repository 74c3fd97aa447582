//! Structural modules: finder motifs, timing strips and reserved zones.
//!
//! Positions depend only on the version, never on the payload.

use crate::models::{Cell, Version};

use super::builder::MatrixBuilder;

const FINDER_SIZE: isize = 7;

/// Stamp a finder motif with its top-left corner at (row, col).
///
/// Covers the 7x7 box plus a one-module light separator around it; parts
/// falling outside the grid are skipped. Overwrites whatever was there.
pub fn stamp_finder(builder: &mut MatrixBuilder, row: isize, col: isize) {
    let size = builder.size() as isize;
    for dy in -1..=FINDER_SIZE {
        for dx in -1..=FINDER_SIZE {
            let (y, x) = (row + dy, col + dx);
            if y < 0 || x < 0 || y >= size || x >= size {
                continue;
            }
            let in_box = (0..FINDER_SIZE).contains(&dy) && (0..FINDER_SIZE).contains(&dx);
            let on_ring = dy == 0 || dy == FINDER_SIZE - 1 || dx == 0 || dx == FINDER_SIZE - 1;
            let in_core = (2..=4).contains(&dy) && (2..=4).contains(&dx);
            builder.set(
                y as usize,
                x as usize,
                Cell::from_dark(in_box && (on_ring || in_core)),
            );
        }
    }
}

/// Stamp every structural module for the builder's version.
pub fn stamp_structural(builder: &mut MatrixBuilder) {
    let n = builder.size();
    let far = (n as isize) - FINDER_SIZE;

    stamp_finder(builder, 0, 0);
    stamp_finder(builder, 0, far);
    stamp_finder(builder, far, 0);

    // Timing patterns (row 6 and column 6)
    for i in 8..n - 8 {
        let cell = Cell::from_dark(i % 2 == 0);
        builder.set_if_unresolved(6, i, cell);
        builder.set_if_unresolved(i, 6, cell);
    }

    // Reserved zone around the top-left finder
    for i in 0..9 {
        if i != 6 {
            builder.set_if_unresolved(8, i, Cell::Light);
            builder.set_if_unresolved(i, 8, Cell::Light);
        }
    }
    // ... and along the bottom and right edges
    for i in 0..8 {
        builder.set_if_unresolved(n - 1 - i, 8, Cell::Light);
        builder.set_if_unresolved(8, n - 1 - i, Cell::Light);
    }
}

/// Number of modules left for data + parity bits in a version
pub fn data_module_count(version: Version) -> usize {
    let mut builder = MatrixBuilder::new(version);
    stamp_structural(&mut builder);
    builder.unresolved_count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamped(version: u8) -> MatrixBuilder {
        let mut builder = MatrixBuilder::new(Version::new(version).unwrap());
        stamp_structural(&mut builder);
        builder
    }

    #[test]
    fn test_finder_motif() {
        let builder = stamped(1);
        let expected = [
            "#######.", "#.....#.", "#.###.#.", "#.###.#.", "#.###.#.", "#.....#.",
            "#######.", "........",
        ];
        for (row, line) in expected.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                assert_eq!(
                    builder.get(row, col),
                    Cell::from_dark(ch == '#'),
                    "({}, {})",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_all_three_finders() {
        for version in 1..=5 {
            let builder = stamped(version);
            let n = builder.size();
            for (r, c) in [(0, 0), (0, n - 7), (n - 7, 0)] {
                assert_eq!(builder.get(r, c), Cell::Dark);
                assert_eq!(builder.get(r + 3, c + 3), Cell::Dark);
                assert_eq!(builder.get(r + 1, c + 1), Cell::Light);
                assert_eq!(builder.get(r + 6, c + 6), Cell::Dark);
            }
            // Separators
            assert_eq!(builder.get(7, n - 8), Cell::Light);
            assert_eq!(builder.get(n - 8, 7), Cell::Light);
            // Nothing stamped in the bottom-right corner
            assert_eq!(builder.get(n - 1, n - 1), Cell::Unresolved);
        }
    }

    #[test]
    fn test_timing_strips() {
        let builder = stamped(3);
        let n = builder.size();
        for i in 8..n - 8 {
            let expected = Cell::from_dark(i % 2 == 0);
            assert_eq!(builder.get(6, i), expected);
            assert_eq!(builder.get(i, 6), expected);
        }
    }

    #[test]
    fn test_reserved_zones() {
        let builder = stamped(2);
        let n = builder.size();
        for i in [0, 1, 2, 3, 4, 5, 7, 8] {
            assert_eq!(builder.get(8, i), Cell::Light);
            assert_eq!(builder.get(i, 8), Cell::Light);
        }
        for i in 0..8 {
            assert_eq!(builder.get(n - 1 - i, 8), Cell::Light);
            assert_eq!(builder.get(8, n - 1 - i), Cell::Light);
        }
        // Column 9 is data
        assert_eq!(builder.get(n - 1, 9), Cell::Unresolved);
    }

    #[test]
    fn test_finder_clipped_at_edges() {
        let mut builder = MatrixBuilder::new(Version::MIN);
        stamp_finder(&mut builder, -3, -3);
        assert_eq!(builder.get(0, 0), Cell::Dark); // (3, 3) of the motif
        assert_eq!(builder.get(3, 3), Cell::Dark); // bottom-right corner of the ring
        assert_eq!(builder.get(4, 4), Cell::Light); // separator
        assert_eq!(builder.get(5, 5), Cell::Unresolved);
    }

    #[test]
    fn test_data_module_count() {
        assert_eq!(data_module_count(Version::MIN), 208);
        for v in 1..=5 {
            let version = Version::new(v).unwrap();
            // A full payload packs two bytes past capacity
            let needed = (version.capacity() + 2 + version.ec_codewords()) * 8;
            assert!(data_module_count(version) >= needed, "version {}", v);
        }
    }
}
