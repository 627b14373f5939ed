//! Stroke model and rendering primitives (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Stroke`]: One freehand gesture with its own color and thickness
//! - [`StrokeModel`]: Committed strokes, the stroke in progress, and undo/redo stacks
//! - [`RedrawSurface`]: Raster buffer repainted from the model
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod model;
pub mod render;
pub mod stroke;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError};
pub use model::StrokeModel;
pub use render::{render_model, render_stroke, render_strokes};
pub use stroke::{Point, Stroke};
pub use surface::{RasterSnapshot, RedrawSurface, SurfaceError};

pub use color::{BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, TRANSPARENT, WHITE, YELLOW};
