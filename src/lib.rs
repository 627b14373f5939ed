//! Library exports for the drawme drawing core.
//!
//! Exposes the stroke model, the redraw surface, input translation and the
//! export pipeline so hosts (the bundled headless shell, tests, or a GUI
//! front end) can drive the same canvas logic.

pub mod app;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod notification;
pub mod script;
pub mod util;

pub use config::Config;
