//! Touch event types delivered by the host.

use crate::draw::Point;

/// Phase of a single-pointer touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Finger (or primary button) went down
    Start,
    /// Pointer moved while down
    Move,
    /// Finger lifted
    End,
}

/// A touch event in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub x: f64,
    pub y: f64,
}

impl TouchEvent {
    pub fn start(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::Start,
            x,
            y,
        }
    }

    pub fn move_to(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::Move,
            x,
            y,
        }
    }

    pub fn end(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::End,
            x,
            y,
        }
    }

    pub fn point(&self) -> Point {
        (self.x, self.y)
    }
}
