//! Drawer
//!
//! A small raster drawing engine: an owned RGBA [`Canvas`], a predicate fill
//! that every shape is expressed through, circle and rectangle primitives,
//! and lossless PNG output.
//!
//! # Features
//!
//! - **Predicate fill**: any `Fn(i32, i32) -> bool` (or [`ShapePredicate`])
//!   can be painted, cycling through a sequence of colors in scan order
//! - **Shapes**: filled and stroked circles and rectangles
//! - **Output**: PNG files, with partially written files removed on failure
//! - **Scenes**: JSON descriptions of a canvas and its paint commands
//!
//! # Example
//!
//! ```no_run
//! use drawer::{cc, rect, Canvas, Color};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut canvas = Canvas::new(rect(0, 0, 10, 10));
//! canvas.fill(&[Color::WHITE])?;
//! canvas.draw_filled_circle(cc(5, 5, 3.0), &[Color::BLACK])?;
//! canvas.draw_circle(cc(5, 5, 4.0), 1.0, &drawer::RAINBOW)?;
//! canvas.save_png("dot.png")?;
//! # Ok(())
//! # }
//! ```

pub mod canvas;
pub mod color;
pub mod encoder;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod logo;
pub mod scene;
pub mod shapes;

pub use canvas::Canvas;
pub use color::{Color, RAINBOW};
pub use encoder::{encode_png, save, PngEncoder, RasterEncoder};
pub use error::{Error, Result};
pub use fill::ShapePredicate;
pub use geometry::{cc, pt, rect, Circle, Point, Rect};
pub use logo::LogoConfig;
pub use scene::{PaintCommand, Scene};
pub use shapes::{CircleOutline, FilledCircle, FilledRect, InnerRadius, RectEdges, RectOutline, Stroke};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logo_config() {
        let config = LogoConfig::default();
        assert_eq!(config.size, 300);
        assert_eq!(config.dots, 1000);
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn test_stroke_defaults_are_literal() {
        let stroke: Stroke = 4.0.into();
        assert_eq!(stroke.width, 4.0);
        assert_eq!(stroke.inner, InnerRadius::Squared);
        assert_eq!(stroke.edges, RectEdges::Bands);
    }
}
