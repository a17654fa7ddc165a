//! JSON scene files: a canvas size plus an ordered list of paint commands.
//!
//! ```json
//! {
//!   "bounds": { "min": { "x": 0, "y": 0 }, "max": { "x": 10, "y": 10 } },
//!   "background": "#ffffff",
//!   "commands": [
//!     { "shape": "filled_circle", "center": { "x": 5, "y": 5 }, "radius": 3, "colors": ["#ff0000"] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::{Circle, Point, Rect};
use crate::shapes::Stroke;

/// One drawing call. Every variant carries the colors it cycles through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum PaintCommand {
    /// Every pixel of the canvas.
    Fill { colors: Vec<Color> },
    FilledCircle {
        center: Point,
        radius: f64,
        colors: Vec<Color>,
    },
    Circle {
        center: Point,
        radius: f64,
        width: f64,
        /// Treat a negative inner radius as 0.
        #[serde(default)]
        clamp_inner: bool,
        colors: Vec<Color>,
    },
    FilledRectangle { rect: Rect, colors: Vec<Color> },
    Rectangle {
        rect: Rect,
        width: f64,
        /// Keep the outline on the perimeter instead of full-canvas bands.
        #[serde(default)]
        bounded: bool,
        colors: Vec<Color>,
    },
}

impl PaintCommand {
    pub fn colors(&self) -> &[Color] {
        match self {
            PaintCommand::Fill { colors }
            | PaintCommand::FilledCircle { colors, .. }
            | PaintCommand::Circle { colors, .. }
            | PaintCommand::FilledRectangle { colors, .. }
            | PaintCommand::Rectangle { colors, .. } => colors,
        }
    }

    /// Apply this command to `canvas`, returning the number of pixels painted.
    pub fn paint(&self, canvas: &mut Canvas) -> Result<usize> {
        match self {
            PaintCommand::Fill { colors } => canvas.fill(colors),
            PaintCommand::FilledCircle {
                center,
                radius,
                colors,
            } => canvas.draw_filled_circle(
                Circle {
                    center: *center,
                    radius: *radius,
                },
                colors,
            ),
            PaintCommand::Circle {
                center,
                radius,
                width,
                clamp_inner,
                colors,
            } => {
                let mut stroke = Stroke::new(*width);
                if *clamp_inner {
                    stroke = stroke.clamp_inner();
                }
                canvas.draw_circle(
                    Circle {
                        center: *center,
                        radius: *radius,
                    },
                    stroke,
                    colors,
                )
            }
            PaintCommand::FilledRectangle { rect, colors } => {
                canvas.draw_filled_rectangle(*rect, colors)
            }
            PaintCommand::Rectangle {
                rect,
                width,
                bounded,
                colors,
            } => {
                let mut stroke = Stroke::new(*width);
                if *bounded {
                    stroke = stroke.bounded();
                }
                canvas.draw_rectangle(*rect, stroke, colors)
            }
        }
    }
}

/// A full drawing: canvas bounds, an optional background and the commands
/// applied on top of it in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub bounds: Rect,
    #[serde(default)]
    pub background: Option<Color>,
    #[serde(default)]
    pub commands: Vec<PaintCommand>,
}

impl Scene {
    pub fn from_json(s: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(s)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("cannot read scene {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }

    /// Reject scenes that could only fail halfway through rendering.
    pub fn validate(&self) -> Result<()> {
        if self.bounds.is_empty() {
            return Err(Error::ConfigError(format!(
                "scene bounds {:?} contain no pixels",
                self.bounds
            )));
        }
        if let Some(i) = self.commands.iter().position(|c| c.colors().is_empty()) {
            return Err(Error::ConfigError(format!("command {} has no colors", i)));
        }
        Ok(())
    }

    pub fn render(&self) -> Result<Canvas> {
        let mut canvas = Canvas::new(self.bounds);
        if let Some(bg) = self.background {
            canvas.clear(bg);
        }
        for (i, cmd) in self.commands.iter().enumerate() {
            let n = cmd.paint(&mut canvas)?;
            debug!("scene command {} painted {} pixels", i, n);
        }
        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{pt, rect};

    const SCENE: &str = r##"{
        "bounds": { "min": { "x": 0, "y": 0 }, "max": { "x": 6, "y": 6 } },
        "background": "#000000",
        "commands": [
            { "shape": "filled_rectangle",
              "rect": { "min": { "x": 1, "y": 1 }, "max": { "x": 3, "y": 3 } },
              "colors": ["#ff0000", "#00ff00"] },
            { "shape": "circle", "center": { "x": 4, "y": 4 }, "radius": 0, "width": 1,
              "clamp_inner": true, "colors": ["#0000ff"] }
        ]
    }"##;

    #[test]
    fn parses_tagged_commands() {
        let scene = Scene::from_json(SCENE).unwrap();
        assert_eq!(scene.bounds, rect(0, 0, 6, 6));
        assert_eq!(scene.background, Some(Color::BLACK));
        assert_eq!(scene.commands.len(), 2);
        match &scene.commands[1] {
            PaintCommand::Circle {
                center,
                clamp_inner,
                ..
            } => {
                assert_eq!(*center, pt(4, 4));
                assert!(*clamp_inner);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn renders_commands_in_order() {
        let canvas = Scene::from_json(SCENE).unwrap().render().unwrap();
        let red = Color::rgb(255, 0, 0);
        let green = Color::rgb(0, 255, 0);
        assert_eq!(canvas.pixel_at(1, 1), Some(red));
        assert_eq!(canvas.pixel_at(1, 2), Some(green));
        assert_eq!(canvas.pixel_at(2, 1), Some(red));
        assert_eq!(canvas.pixel_at(4, 4), Some(Color::rgb(0, 0, 255)));
        assert_eq!(canvas.pixel_at(5, 5), Some(Color::BLACK));
    }

    #[test]
    fn rejects_empty_colors_up_front() {
        let json = r#"{
            "bounds": { "min": { "x": 0, "y": 0 }, "max": { "x": 2, "y": 2 } },
            "commands": [ { "shape": "fill", "colors": [] } ]
        }"#;
        assert!(matches!(
            Scene::from_json(json),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn rejects_empty_bounds() {
        let json = r#"{ "bounds": { "min": { "x": 0, "y": 0 }, "max": { "x": 0, "y": 2 } } }"#;
        assert!(matches!(
            Scene::from_json(json),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn bad_color_is_a_json_error() {
        let json = r##"{
            "bounds": { "min": { "x": 0, "y": 0 }, "max": { "x": 2, "y": 2 } },
            "background": "#nothex"
        }"##;
        assert!(matches!(Scene::from_json(json), Err(Error::JsonError(_))));
    }
}
