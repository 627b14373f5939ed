//! Data types for image export.

use std::path::PathBuf;
use thiserror::Error;

/// MIME type attached to shared images.
pub const PNG_MIME_TYPE: &str = "image/png";

/// Result of a completed export.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Path of the written PNG file.
    pub saved_path: PathBuf,
    /// Size of the encoded PNG in bytes.
    pub byte_len: usize,
    /// Whether the image was handed to the share target.
    pub shared: bool,
}

/// Outcome of an export request (success or failure).
#[derive(Debug, Clone)]
pub enum ExportOutcome {
    Success(ExportResult),
    Failed(String),
}

/// Errors that can occur while exporting a drawing.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Failed to save image: {0}")]
    SaveError(#[from] std::io::Error),

    #[error("Failed to share image: {0}")]
    ShareError(String),

    #[error("Export worker unavailable: {0}")]
    WorkerError(String),
}

/// Status of the export worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// No export has run yet.
    Idle,
    /// An export is being encoded, written or shared.
    InProgress,
    /// The last export completed successfully.
    Success,
    /// The last export failed.
    Failed(String),
}
