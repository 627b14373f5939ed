//! Image export for drawme.
//!
//! This module turns a rendered snapshot into a shared image file:
//! - PNG encoding of an owned raster snapshot
//! - File saving as `<dir>/Drawme<unix-seconds>.png`
//! - Sharing the saved image as `image/png`
//! - A background worker so the drawing loop never blocks on I/O

pub mod dependencies;
pub mod file;
pub mod share;
pub mod types;

mod manager;
mod pipeline;

pub use dependencies::{ExportDependencies, ExportEncoder, ExportFileSaver, ExportSharer};
pub use file::FileSaveConfig;
pub use manager::ExportManager;
pub use types::{ExportError, ExportOutcome, ExportResult, ExportStatus, PNG_MIME_TYPE};
