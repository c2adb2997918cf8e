//! Drawing-surface type definitions.
//!
//! Points, line styles, fonts and primitive identifiers shared between the
//! edge model and whatever surface renders it.

use serde::{Deserialize, Serialize};

/// Identifier of a primitive (line or text) created on a drawing surface
pub type ItemId = u64;

/// A position on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Exact geometric center between two points
    pub fn center(a: Point, b: Point) -> Point {
        Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }
}

/// The three points of a smoothed edge line: source, control point, destination.
///
/// Surfaces draw these as a smoothed polyline, so the control point bends the
/// line away from the straight segment when an arc offset is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoints {
    pub src: Point,
    pub mid: Point,
    pub dst: Point,
}

/// Stroke style of an edge line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Fill colour in `#rrggbb` form
    pub color: String,
    /// Stroke width before application scaling
    pub width: f64,
}

impl LineStyle {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }

    /// Returns a copy with the width multiplied by the application scale
    pub fn scaled(&self, scale: f64) -> Self {
        Self {
            color: self.color.clone(),
            width: self.width * scale,
        }
    }
}

/// Font used for edge labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelFont {
    pub family: String,
    pub size: u32,
}

impl Default for LabelFont {
    fn default() -> Self {
        Self {
            family: "TkDefaultFont".to_string(),
            size: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let c = Point::center(Point::new(0.0, 0.0), Point::new(10.0, -4.0));
        assert_eq!(c, Point::new(5.0, -2.0));
    }

    #[test]
    fn test_scaled_style_keeps_color() {
        let style = LineStyle::new("#ff0000", 3.0).scaled(1.5);
        assert_eq!(style.color, "#ff0000");
        assert_eq!(style.width, 4.5);
    }
}
