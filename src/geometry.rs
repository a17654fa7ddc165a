//! Plain geometry values used to describe shapes and canvas bounds.

use serde::{Deserialize, Serialize};

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Shorthand for `Point { x, y }`.
pub fn pt(x: i32, y: i32) -> Point {
    Point { x, y }
}

/// An axis-aligned rectangle; `min` is inclusive and `max` is exclusive.
///
/// Callers are expected to pass `min <= max` on both axes. The rectangle is
/// never reordered, so an inverted rectangle simply contains no pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

/// Shorthand for a rectangle spanning `(x0, y0)` to `(x1, y1)`.
pub fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
    Rect {
        min: pt(x0, y0),
        max: pt(x1, y1),
    }
}

impl Rect {
    // Spans are computed in i64: `max - min` can exceed i32::MAX.
    pub fn width(&self) -> u32 {
        (i64::from(self.max.x) - i64::from(self.min.x)).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (i64::from(self.max.y) - i64::from(self.min.y)).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min.x && x < self.max.x && y >= self.min.y && y < self.max.y
    }

    /// The overlap of two rectangles. Disjoint inputs yield an empty rectangle.
    pub fn intersect(&self, other: &Rect) -> Rect {
        rect(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
        )
    }
}

/// A circle with an integer center and a real radius.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Shorthand for a circle centered at `(x, y)` with radius `r`.
pub fn cc(x: i32, y: i32, r: f64) -> Circle {
    Circle {
        center: pt(x, y),
        radius: r,
    }
}
