//! Stroke model: committed strokes, the stroke in progress, and redo history.

use super::color::{BLACK, Color};
use super::stroke::{Point, Stroke};
use crate::config::ClearPolicy;
use log::debug;

/// Thickness used until the host sets a brush size.
pub const DEFAULT_THICKNESS: f64 = 5.0;

/// Drawing state for one canvas.
///
/// Holds every committed [`Stroke`] in draw order (first = bottom, last = top),
/// the stroke currently being traced, and the strokes removed by undo. Every
/// operation is total: calls that make no sense in the current state are
/// ignored rather than reported.
#[derive(Debug, Clone)]
pub struct StrokeModel {
    committed: Vec<Stroke>,
    current: Option<Stroke>,
    /// Most recently undone stroke last
    undone: Vec<Stroke>,
    color: Color,
    thickness: f64,
    clear_policy: ClearPolicy,
}

impl Default for StrokeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeModel {
    /// Creates an empty model with a black brush and the default clear policy.
    pub fn new() -> Self {
        Self::with_clear_policy(ClearPolicy::default())
    }

    /// Creates an empty model that clears according to `clear_policy`.
    pub fn with_clear_policy(clear_policy: ClearPolicy) -> Self {
        Self {
            committed: Vec::new(),
            current: None,
            undone: Vec::new(),
            color: BLACK,
            thickness: DEFAULT_THICKNESS,
            clear_policy,
        }
    }

    /// Starts a new stroke at `point`, replacing any stroke still in progress.
    ///
    /// The style becomes the last-used style for [`StrokeModel::start`].
    ///
    /// Points with a non-finite coordinate are ignored.
    pub fn begin(&mut self, point: Point, color: Color, thickness: f64) {
        if !is_finite_point(point) {
            debug!("Ignoring stroke start at non-finite point {:?}", point);
            return;
        }
        if let Some(abandoned) = self.current.take() {
            debug!("Discarding unfinished stroke with {} points", abandoned.len());
        }
        self.color = color;
        if thickness.is_finite() && thickness > 0.0 {
            self.thickness = thickness;
        }
        self.current = Some(Stroke::new(point, self.color, self.thickness));
    }

    /// Starts a new stroke at `point` using the last-used brush style.
    pub fn start(&mut self, point: Point) {
        self.begin(point, self.color, self.thickness);
    }

    /// Appends a point to the stroke in progress.
    ///
    /// Returns `false` (and does nothing) when no stroke has been begun or a
    /// coordinate is not finite.
    pub fn extend(&mut self, point: Point) -> bool {
        if !is_finite_point(point) {
            debug!("Ignoring non-finite point {:?}", point);
            return false;
        }
        match self.current.as_mut() {
            Some(stroke) => {
                stroke.push(point);
                true
            }
            None => {
                debug!("Ignoring point {:?} with no stroke in progress", point);
                false
            }
        }
    }

    /// Moves the stroke in progress onto the committed list.
    ///
    /// Committing invalidates the redo history. Returns `false` when there is
    /// no non-empty stroke to commit.
    pub fn commit(&mut self) -> bool {
        match self.current.take() {
            Some(stroke) if !stroke.is_empty() => {
                self.committed.push(stroke);
                self.undone.clear();
                true
            }
            _ => false,
        }
    }

    /// Moves the most recent committed stroke onto the undo stack.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(stroke) => {
                self.undone.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Restores the most recently undone stroke.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(stroke) => {
                self.committed.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Removes every committed stroke and the stroke in progress.
    ///
    /// The redo history survives only under [`ClearPolicy::KeepRedo`].
    pub fn clear(&mut self) {
        self.committed.clear();
        self.current = None;
        if self.clear_policy == ClearPolicy::DiscardRedo {
            self.undone.clear();
        }
    }

    /// Sets the thickness (device pixels) for strokes begun after this call.
    ///
    /// Non-finite and non-positive sizes are ignored.
    pub fn set_brush_size(&mut self, thickness: f64) -> bool {
        if !thickness.is_finite() || thickness <= 0.0 {
            debug!("Ignoring invalid brush size {}", thickness);
            return false;
        }
        self.thickness = thickness;
        true
    }

    /// Sets the color for strokes begun after this call.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Committed strokes in draw order.
    pub fn committed(&self) -> &[Stroke] {
        &self.committed
    }

    /// Undone strokes, most recently undone last.
    pub fn undone(&self) -> &[Stroke] {
        &self.undone
    }

    /// The stroke being traced, if any.
    pub fn current(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }

    /// Color used for the next stroke.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Thickness used for the next stroke.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn clear_policy(&self) -> ClearPolicy {
        self.clear_policy
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Returns true when nothing would be drawn.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.current.is_none()
    }
}

fn is_finite_point(point: Point) -> bool {
    point.0.is_finite() && point.1.is_finite()
}
