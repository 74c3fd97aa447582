//! Rasterization of a finished matrix onto a pixel surface
//!
//! The cell pitch is derived from the surface size alone: the shorter side,
//! minus a fixed pad on both ends, divided by the matrix side (at least one
//! pixel). The grid is centered; a surface too small for it is clipped.

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::models::QrMatrix;

/// Pad in pixels kept on each side of the grid
pub const PAD: u32 = 8;

const LIGHT: u8 = 0xFF;
const DARK: u8 = 0x00;

/// Pixel target the rasterizer paints onto
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Paint the whole surface light
    fn clear(&mut self);
    /// Paint a dark rectangle; always within bounds
    fn fill_dark(&mut self, x: u32, y: u32, width: u32, height: u32);
}

impl Surface for GrayImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn clear(&mut self) {
        for p in self.pixels_mut() {
            *p = Luma([LIGHT]);
        }
    }

    fn fill_dark(&mut self, x: u32, y: u32, width: u32, height: u32) {
        for yy in y..y + height {
            for xx in x..x + width {
                self.put_pixel(xx, yy, Luma([DARK]));
            }
        }
    }
}

impl Surface for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn clear(&mut self) {
        for p in self.pixels_mut() {
            *p = Rgb([LIGHT; 3]);
        }
    }

    fn fill_dark(&mut self, x: u32, y: u32, width: u32, height: u32) {
        for yy in y..y + height {
            for xx in x..x + width {
                self.put_pixel(xx, yy, Rgb([DARK; 3]));
            }
        }
    }
}

/// Cell pitch and grid origin for a matrix side on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Pixels per module
    pub cell: u32,
    /// Left edge of the grid; negative when the grid overflows
    pub offset_x: i64,
    /// Top edge of the grid; negative when the grid overflows
    pub offset_y: i64,
}

/// Compute the layout of an `side`-module grid on a `width` x `height` surface
pub fn layout(side: usize, width: u32, height: u32) -> Layout {
    let side = side.max(1) as u32;
    let usable = width.min(height).saturating_sub(PAD * 2);
    let cell = (usable / side).max(1);
    let grid = (cell * side) as i64;
    Layout {
        cell,
        offset_x: (width as i64 - grid).div_euclid(2),
        offset_y: (height as i64 - grid).div_euclid(2),
    }
}

/// Clear `surface` and paint one square per dark module
pub fn draw<S: Surface + ?Sized>(matrix: &QrMatrix, surface: &mut S) {
    let (width, height) = (surface.width() as i64, surface.height() as i64);
    let n = matrix.size();
    let Layout {
        cell,
        offset_x,
        offset_y,
    } = layout(n, surface.width(), surface.height());

    surface.clear();
    let cell_len = cell as i64;
    for row in 0..n {
        for col in 0..n {
            if !matrix.get(row, col) {
                continue;
            }
            let x0 = (offset_x + col as i64 * cell_len).max(0);
            let y0 = (offset_y + row as i64 * cell_len).max(0);
            let x1 = (offset_x + (col as i64 + 1) * cell_len).min(width);
            let y1 = (offset_y + (row as i64 + 1) * cell_len).min(height);
            if x0 < x1 && y0 < y1 {
                surface.fill_dark(x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32);
            }
        }
    }
}

/// Render into a fresh grayscale image
pub fn to_gray_image(matrix: &QrMatrix, width: u32, height: u32) -> GrayImage {
    let mut img = GrayImage::new(width, height);
    draw(matrix, &mut img);
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_to_matrix;

    #[test]
    fn test_layout_square() {
        // (256 - 16) / 21 = 11, grid 231 px, centered
        let l = layout(21, 256, 256);
        assert_eq!(l.cell, 11);
        assert_eq!(l.offset_x, 12);
        assert_eq!(l.offset_y, 12);
    }

    #[test]
    fn test_layout_uses_shorter_side() {
        let l = layout(37, 400, 200);
        assert_eq!(l.cell, (200 - 16) / 37);
        assert_eq!(l.offset_x, (400 - 37 * l.cell as i64) / 2);
        assert_eq!(l.offset_y, (200 - 37 * l.cell as i64) / 2);
    }

    #[test]
    fn test_layout_tiny_surface() {
        let l = layout(21, 10, 10);
        assert_eq!(l.cell, 1);
        assert_eq!(l.offset_x, -6);
    }

    #[test]
    fn test_draw_modules() {
        let matrix = encode_to_matrix("HI").unwrap();
        let img = to_gray_image(&matrix, 256, 256);
        let l = layout(21, 256, 256);
        for row in 0..21 {
            for col in 0..21 {
                let x = (l.offset_x + col as i64 * l.cell as i64) as u32 + l.cell / 2;
                let y = (l.offset_y + row as i64 * l.cell as i64) as u32 + l.cell / 2;
                let expected = if matrix.get(row, col) { DARK } else { LIGHT };
                assert_eq!(img.get_pixel(x, y).0[0], expected, "({}, {})", row, col);
            }
        }
        // Pad stays light
        assert_eq!(img.get_pixel(0, 0).0[0], LIGHT);
        assert_eq!(img.get_pixel(255, 255).0[0], LIGHT);
    }

    #[test]
    fn test_draw_is_idempotent() {
        let first = encode_to_matrix("first payload").unwrap();
        let second = encode_to_matrix("HI").unwrap();
        let mut img = RgbImage::new(120, 90);
        draw(&first, &mut img);
        draw(&second, &mut img);
        let mut fresh = RgbImage::new(120, 90);
        draw(&second, &mut fresh);
        assert_eq!(img, fresh);
    }

    #[test]
    fn test_draw_clips_small_surface() {
        let matrix = encode_to_matrix("HI").unwrap();
        let img = to_gray_image(&matrix, 10, 10); // Should not panic
        assert_eq!(img.dimensions(), (10, 10));
    }

    #[test]
    fn test_dark_pixel_count() {
        let matrix = encode_to_matrix("HI").unwrap();
        let img = to_gray_image(&matrix, 256, 256);
        let cell = layout(21, 256, 256).cell as usize;
        let dark = img.pixels().filter(|p| p.0[0] == DARK).count();
        assert_eq!(dark, matrix.dark_count() * cell * cell);
    }
}
