//! Predicate fill: the single scanning routine behind every shape.
//!
//! A fill visits canvas coordinates column by column (x outer, y inner, both
//! ascending). Every coordinate accepted by the predicate receives the next
//! color of the sequence, so with `n` colors the i-th match in that order is
//! painted `colors[i % n]`. Rejected coordinates are left untouched.

use log::debug;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::Rect;

/// A membership test over pixel coordinates.
pub trait ShapePredicate {
    fn contains(&self, x: i32, y: i32) -> bool;

    /// A rectangle that encloses every coordinate `contains` accepts, if the
    /// shape has one. Returning `None` makes the fill scan the whole canvas.
    fn bounding_box(&self) -> Option<Rect> {
        None
    }
}

impl<F> ShapePredicate for F
where
    F: Fn(i32, i32) -> bool,
{
    fn contains(&self, x: i32, y: i32) -> bool {
        self(x, y)
    }
}

impl Canvas {
    /// Paint every pixel matched by `shape`, cycling through `colors` in scan
    /// order. Returns the number of pixels written.
    ///
    /// Fails with [`Error::EmptyColors`] before touching any pixel if `colors`
    /// is empty.
    pub fn fill_where<P>(&mut self, shape: &P, colors: &[Color]) -> Result<usize>
    where
        P: ShapePredicate + ?Sized,
    {
        if colors.is_empty() {
            return Err(Error::EmptyColors);
        }

        let bounds = self.bounds();
        let region = match shape.bounding_box() {
            Some(bb) => bounds.intersect(&bb),
            None => bounds,
        };

        let mut matched = 0usize;
        for x in region.min.x..region.max.x {
            for y in region.min.y..region.max.y {
                if shape.contains(x, y) {
                    self.set_pixel(x, y, colors[matched % colors.len()]);
                    matched += 1;
                }
            }
        }

        debug!(
            "fill_where: scanned {}x{} region, {} pixels matched, {} colors",
            region.width(),
            region.height(),
            matched,
            colors.len()
        );
        Ok(matched)
    }

    /// Paint the whole canvas, cycling through `colors`.
    pub fn fill(&mut self, colors: &[Color]) -> Result<usize> {
        self.fill_where(&|_: i32, _: i32| true, colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rect;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    #[test]
    fn single_color_is_uniform_fill() {
        let mut c = Canvas::new(rect(0, 0, 3, 3));
        let n = c.fill(&[RED]).unwrap();
        assert_eq!(n, 9);
        assert!(c.pixels().iter().all(|p| *p == RED));
    }

    #[test]
    fn colors_cycle_in_column_major_order() {
        let mut c = Canvas::new(rect(0, 0, 2, 2));
        c.fill(&[RED, GREEN, BLUE]).unwrap();
        // (0,0) (0,1) (1,0) (1,1)
        assert_eq!(c.pixel_at(0, 0), Some(RED));
        assert_eq!(c.pixel_at(0, 1), Some(GREEN));
        assert_eq!(c.pixel_at(1, 0), Some(BLUE));
        assert_eq!(c.pixel_at(1, 1), Some(RED));
    }

    #[test]
    fn unmatched_pixels_are_untouched() {
        let mut c = Canvas::new(rect(0, 0, 4, 1));
        c.fill(&[BLUE]).unwrap();
        c.fill_where(&|x: i32, _y: i32| x % 2 == 0, &[RED]).unwrap();
        assert_eq!(c.pixel_at(0, 0), Some(RED));
        assert_eq!(c.pixel_at(1, 0), Some(BLUE));
        assert_eq!(c.pixel_at(2, 0), Some(RED));
        assert_eq!(c.pixel_at(3, 0), Some(BLUE));
    }

    #[test]
    fn empty_colors_rejected_without_writes() {
        let mut c = Canvas::new(rect(0, 0, 3, 3));
        c.fill(&[GREEN]).unwrap();
        let before = c.clone();
        let err = c.fill(&[]).unwrap_err();
        assert!(matches!(err, Error::EmptyColors));
        assert_eq!(c, before);
    }

    struct Diagonal;

    impl ShapePredicate for Diagonal {
        fn contains(&self, x: i32, y: i32) -> bool {
            x == y
        }

        fn bounding_box(&self) -> Option<Rect> {
            Some(rect(1, 1, 3, 3))
        }
    }

    #[test]
    fn bounding_box_limits_the_scan() {
        let mut c = Canvas::new(rect(0, 0, 5, 5));
        let n = c.fill_where(&Diagonal, &[RED]).unwrap();
        // (0,0) and (3,3)..(4,4) fall outside the box and are skipped
        assert_eq!(n, 2);
        assert_eq!(c.pixel_at(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(c.pixel_at(2, 2), Some(RED));
    }

    #[test]
    fn bounding_box_outside_canvas_matches_nothing() {
        struct Far;
        impl ShapePredicate for Far {
            fn contains(&self, _x: i32, _y: i32) -> bool {
                true
            }
            fn bounding_box(&self) -> Option<Rect> {
                Some(rect(100, 100, 110, 110))
            }
        }
        let mut c = Canvas::new(rect(0, 0, 5, 5));
        assert_eq!(c.fill_where(&Far, &[RED]).unwrap(), 0);
    }
}
