//! Swipe classification.
//!
//! A swipe is read from the distance between where a touch started and where
//! it ended. Classification never touches the stroke model; callers decide
//! what a swipe means.

use crate::draw::Point;
use log::debug;

/// Minimum travel along an axis, in surface units, for a gesture to count as a swipe.
pub const SWIPE_MIN_DISTANCE: f64 = 150.0;

/// Direction of a recognised swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Classifies the movement from `from` to `to`.
///
/// Horizontal travel is checked first: a gesture that moves more than
/// [`SWIPE_MIN_DISTANCE`] along x is `Left`/`Right` regardless of its vertical
/// travel. Otherwise a long enough vertical travel gives `Up`/`Down` (y grows
/// downwards).
pub fn classify_swipe(from: Point, to: Point) -> Option<SwipeDirection> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;

    if dx.abs() > SWIPE_MIN_DISTANCE {
        Some(if dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        })
    } else if dy.abs() > SWIPE_MIN_DISTANCE {
        Some(if dy > 0.0 {
            SwipeDirection::Down
        } else {
            SwipeDirection::Up
        })
    } else {
        None
    }
}

/// Remembers where the active gesture started.
#[derive(Debug, Default, Clone)]
pub struct SwipeTracker {
    origin: Option<Point>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the start of a gesture, forgetting any unfinished one.
    pub fn begin(&mut self, point: Point) {
        self.origin = Some(point);
    }

    /// Ends the gesture at `point` and classifies it.
    ///
    /// Returns `None` without a matching [`SwipeTracker::begin`].
    pub fn finish(&mut self, point: Point) -> Option<SwipeDirection> {
        let origin = self.origin.take()?;
        let direction = classify_swipe(origin, point);
        if let Some(direction) = direction {
            debug!("Swipe {:?} from {:?} to {:?}", direction, origin, point);
        }
        direction
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }
}
