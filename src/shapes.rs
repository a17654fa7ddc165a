//! Circle and rectangle membership tests, and the drawing calls built on them.
//!
//! Two stroke behaviors are kept exactly as the engine has always drawn them
//! and can be switched per call through [`Stroke`]:
//!
//! - [`InnerRadius::Squared`] squares the inner radius of a circle outline even
//!   when it is negative, which hollows out the middle of very thick strokes.
//!   [`InnerRadius::ClampToZero`] treats a negative inner radius as 0.
//! - [`RectEdges::Bands`] tests each edge on its own axis only, so a rectangle
//!   outline paints full-canvas bands through its edges.
//!   [`RectEdges::Border`] keeps the outline on the rectangle's perimeter.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::Result;
use crate::fill::ShapePredicate;
use crate::geometry::{rect, Circle, Point, Rect};

/// How a circle outline treats `radius - width / 2` when it is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InnerRadius {
    /// Square it anyway; the square becomes the lower distance bound.
    #[default]
    Squared,
    /// Use 0, so the outline degenerates into a filled disk.
    ClampToZero,
}

/// How far a rectangle outline reaches along the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RectEdges {
    /// Bands across the whole canvas at each edge coordinate.
    #[default]
    Bands,
    /// Only the perimeter, grown by the stroke width on both sides.
    Border,
}

/// Stroke width plus the edge-case behaviors for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stroke {
    pub width: f64,
    pub inner: InnerRadius,
    pub edges: RectEdges,
}

impl Stroke {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn clamp_inner(mut self) -> Self {
        self.inner = InnerRadius::ClampToZero;
        self
    }

    pub fn bounded(mut self) -> Self {
        self.edges = RectEdges::Border;
        self
    }
}

impl From<f64> for Stroke {
    fn from(width: f64) -> Self {
        Stroke::new(width)
    }
}

fn squared_distance(center: Point, x: i32, y: i32) -> f64 {
    let dx = f64::from(x) - f64::from(center.x);
    let dy = f64::from(y) - f64::from(center.y);
    dx * dx + dy * dy
}

/// Square box around `center` that holds every pixel within `reach`.
fn box_around(center: Point, reach: f64) -> Rect {
    // NaN becomes 0 and infinities saturate.
    let e = reach.abs().floor() as i32;
    rect(
        center.x.saturating_sub(e),
        center.y.saturating_sub(e),
        center.x.saturating_add(e).saturating_add(1),
        center.y.saturating_add(e).saturating_add(1),
    )
}

/// Every pixel whose squared distance to the center is at most `radius²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledCircle(pub Circle);

impl ShapePredicate for FilledCircle {
    fn contains(&self, x: i32, y: i32) -> bool {
        let r = self.0.radius;
        squared_distance(self.0.center, x, y) <= r * r
    }

    fn bounding_box(&self) -> Option<Rect> {
        Some(box_around(self.0.center, self.0.radius))
    }
}

/// The annulus between `radius - width / 2` and `radius + width / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleOutline {
    pub circle: Circle,
    pub stroke: Stroke,
}

impl CircleOutline {
    fn outer(&self) -> f64 {
        self.circle.radius + self.stroke.width / 2.0
    }

    fn inner(&self) -> f64 {
        let inner = self.circle.radius - self.stroke.width / 2.0;
        match self.stroke.inner {
            InnerRadius::ClampToZero if inner < 0.0 => 0.0,
            _ => inner,
        }
    }
}

impl ShapePredicate for CircleOutline {
    fn contains(&self, x: i32, y: i32) -> bool {
        let d2 = squared_distance(self.circle.center, x, y);
        let (outer, inner) = (self.outer(), self.inner());
        d2 <= outer * outer && d2 >= inner * inner
    }

    fn bounding_box(&self) -> Option<Rect> {
        Some(box_around(self.circle.center, self.outer()))
    }
}

/// Pixels with `min.x <= x < max.x` and `min.y <= y < max.y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilledRect(pub Rect);

impl ShapePredicate for FilledRect {
    fn contains(&self, x: i32, y: i32) -> bool {
        self.0.contains(x, y)
    }

    fn bounding_box(&self) -> Option<Rect> {
        Some(self.0)
    }
}

/// Pixels within `width` of any of the four edge coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectOutline {
    pub rect: Rect,
    pub stroke: Stroke,
}

impl RectOutline {
    fn near(v: i32, edge: i32, w: f64) -> bool {
        (f64::from(v) - f64::from(edge)).abs() <= w
    }

    fn within(v: i32, lo: i32, hi: i32, w: f64) -> bool {
        let v = f64::from(v);
        v >= f64::from(lo) - w && v <= f64::from(hi) + w
    }
}

impl ShapePredicate for RectOutline {
    fn contains(&self, x: i32, y: i32) -> bool {
        let r = &self.rect;
        let w = self.stroke.width;
        let near_x = Self::near(x, r.min.x, w) || Self::near(x, r.max.x, w);
        let near_y = Self::near(y, r.min.y, w) || Self::near(y, r.max.y, w);
        match self.stroke.edges {
            RectEdges::Bands => near_x || near_y,
            RectEdges::Border => {
                (near_x && Self::within(y, r.min.y, r.max.y, w))
                    || (near_y && Self::within(x, r.min.x, r.max.x, w))
            }
        }
    }

    fn bounding_box(&self) -> Option<Rect> {
        match self.stroke.edges {
            RectEdges::Bands => None,
            RectEdges::Border => {
                let w = self.stroke.width;
                if w.is_nan() || w < 0.0 {
                    return Some(Rect::default());
                }
                let e = w.floor() as i32;
                let r = &self.rect;
                Some(rect(
                    r.min.x.saturating_sub(e),
                    r.min.y.saturating_sub(e),
                    r.max.x.saturating_add(e).saturating_add(1),
                    r.max.y.saturating_add(e).saturating_add(1),
                ))
            }
        }
    }
}

impl Canvas {
    /// Stroke the outline of `circle`.
    pub fn draw_circle(
        &mut self,
        circle: Circle,
        stroke: impl Into<Stroke>,
        colors: &[Color],
    ) -> Result<usize> {
        let shape = CircleOutline {
            circle,
            stroke: stroke.into(),
        };
        self.fill_where(&shape, colors)
    }

    pub fn draw_filled_circle(&mut self, circle: Circle, colors: &[Color]) -> Result<usize> {
        self.fill_where(&FilledCircle(circle), colors)
    }

    /// Stroke the edges of `rect`. See [`RectEdges`] for how far edges reach.
    pub fn draw_rectangle(
        &mut self,
        rect: Rect,
        stroke: impl Into<Stroke>,
        colors: &[Color],
    ) -> Result<usize> {
        let shape = RectOutline {
            rect,
            stroke: stroke.into(),
        };
        self.fill_where(&shape, colors)
    }

    pub fn draw_filled_rectangle(&mut self, rect: Rect, colors: &[Color]) -> Result<usize> {
        self.fill_where(&FilledRect(rect), colors)
    }
}
