//! The owned pixel buffer every drawing operation writes into.

use crate::color::Color;
use crate::geometry::Rect;

/// A dense RGBA pixel buffer over a fixed bounding rectangle.
///
/// Pixels start out transparent. The bounds never change after construction.
/// Coordinates outside the bounds are ignored by [`Canvas::set_pixel`] and
/// reported as `None` by [`Canvas::pixel_at`].
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    bounds: Rect,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(bounds: Rect) -> Self {
        let len = bounds.width() as usize * bounds.height() as usize;
        Self {
            bounds,
            pixels: vec![Color::TRANSPARENT; len],
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn width(&self) -> u32 {
        self.bounds.width()
    }

    pub fn height(&self) -> u32 {
        self.bounds.height()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let col = (i64::from(x) - i64::from(self.bounds.min.x)) as usize;
        let row = (i64::from(y) - i64::from(self.bounds.min.y)) as usize;
        Some(row * self.width() as usize + col)
    }

    pub fn pixel_at(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite one pixel. Out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Row-major view of every pixel, starting at `bounds().min`.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Packed RGBA bytes in row-major order, ready for an image encoder.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }

    /// Reset every pixel to `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }
}
