//! Stroke definition: one continuous gesture and its brush style.

use super::color::Color;

/// A point in surface-local coordinates.
pub type Point = (f64, f64);

/// A freehand stroke - polyline through the points traced by one gesture.
///
/// Color and thickness are fixed when the stroke begins, so changing the
/// brush later never restyles strokes already on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Sequence of (x, y) coordinates in the order they were traced
    pub points: Vec<Point>,
    /// Stroke color
    pub color: Color,
    /// Line thickness in device pixels
    pub thickness: f64,
}

impl Stroke {
    /// Starts a stroke at `origin` with the given style.
    pub fn new(origin: Point, color: Color, thickness: f64) -> Self {
        Self {
            points: vec![origin],
            color,
            thickness,
        }
    }

    /// Returns true if the stroke has no points to draw.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points recorded so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }
}
