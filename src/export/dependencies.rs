use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::draw::RasterSnapshot;
use crate::export::{
    file::{self, FileSaveConfig},
    share,
    types::ExportError,
};

/// Abstraction over turning a raster snapshot into encoded image bytes.
pub trait ExportEncoder: Send + Sync {
    fn encode(&self, snapshot: &RasterSnapshot) -> Result<Vec<u8>, ExportError>;
}

/// Abstraction over file saving for exported images.
pub trait ExportFileSaver: Send + Sync {
    fn save(&self, image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError>;
}

/// Abstraction over the platform share action.
pub trait ExportSharer: Send + Sync {
    fn share(&self, path: &Path, image_data: &[u8]) -> Result<(), ExportError>;
}

/// Bundle of dependencies used by the export pipeline. Each component can be mocked in tests.
#[derive(Clone)]
pub struct ExportDependencies {
    pub encoder: Arc<dyn ExportEncoder>,
    pub saver: Arc<dyn ExportFileSaver>,
    pub sharer: Arc<dyn ExportSharer>,
}

impl Default for ExportDependencies {
    fn default() -> Self {
        Self {
            encoder: Arc::new(PngEncoder),
            saver: Arc::new(DefaultFileSaver),
            sharer: Arc::new(DefaultSharer),
        }
    }
}

struct PngEncoder;
struct DefaultFileSaver;
struct DefaultSharer;

impl ExportEncoder for PngEncoder {
    fn encode(&self, snapshot: &RasterSnapshot) -> Result<Vec<u8>, ExportError> {
        snapshot
            .encode_png()
            .map_err(|e| ExportError::EncodeError(e.to_string()))
    }
}

impl ExportFileSaver for DefaultFileSaver {
    fn save(&self, image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError> {
        file::save_image(image_data, config)
    }
}

impl ExportSharer for DefaultSharer {
    fn share(&self, path: &Path, image_data: &[u8]) -> Result<(), ExportError> {
        share::share_image(path, image_data)
    }
}
