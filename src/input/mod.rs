//! Input handling.
//!
//! This module translates host touch events and commands into stroke model
//! calls. It tracks whether the surface needs repainting, queues export
//! requests for the host, and classifies swipes for an optional handler.

pub mod action;
pub mod events;
pub mod gesture;
pub mod state;

pub use action::Action;
pub use events::{TouchEvent, TouchPhase};
pub use gesture::{SWIPE_MIN_DISTANCE, SwipeDirection, SwipeTracker, classify_swipe};
pub use state::{InputState, SwipeHandler};
