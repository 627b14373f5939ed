use std::{fmt, path::PathBuf, sync::Arc};

use crate::draw::RasterSnapshot;
use crate::export::{
    dependencies::{ExportDependencies, ExportEncoder, ExportFileSaver, ExportSharer},
    file::FileSaveConfig,
    types::{ExportError, ExportResult},
};
use tokio::task;

#[derive(Clone)]
pub(crate) struct ExportRequest {
    pub(crate) snapshot: RasterSnapshot,
    pub(crate) save_config: FileSaveConfig,
    pub(crate) share: bool,
}

impl fmt::Debug for ExportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportRequest")
            .field(
                "snapshot",
                &format_args!("{}x{}", self.snapshot.width, self.snapshot.height),
            )
            .field("save_directory", &self.save_config.save_directory)
            .field("share", &self.share)
            .finish()
    }
}

pub(crate) async fn perform_export(
    request: ExportRequest,
    dependencies: Arc<ExportDependencies>,
) -> Result<ExportResult, ExportError> {
    log::info!("Starting export: {:?}", request);

    let ExportRequest {
        snapshot,
        save_config,
        share,
    } = request;

    let image_data = encode_image(Arc::clone(&dependencies.encoder), snapshot).await?;
    log::debug!("Encoded drawing ({} bytes)", image_data.len());

    let image_data = Arc::new(image_data);
    let saved_path = save_image(
        Arc::clone(&dependencies.saver),
        Arc::clone(&image_data),
        save_config,
    )
    .await?;

    // A failed share still leaves a usable file, so it is not an export failure
    let shared = if share {
        share_image(
            Arc::clone(&dependencies.sharer),
            saved_path.clone(),
            Arc::clone(&image_data),
        )
        .await
    } else {
        log::debug!("Sharing not requested for this export");
        false
    };

    Ok(ExportResult {
        saved_path,
        byte_len: image_data.len(),
        shared,
    })
}

async fn encode_image(
    encoder: Arc<dyn ExportEncoder>,
    snapshot: RasterSnapshot,
) -> Result<Vec<u8>, ExportError> {
    task::spawn_blocking(move || encoder.encode(&snapshot))
        .await
        .map_err(|e| ExportError::EncodeError(format!("Encode task failed: {}", e)))?
}

async fn save_image(
    saver: Arc<dyn ExportFileSaver>,
    image_data: Arc<Vec<u8>>,
    config: FileSaveConfig,
) -> Result<PathBuf, ExportError> {
    task::spawn_blocking(move || saver.save(&image_data, &config))
        .await
        .map_err(|e| ExportError::WorkerError(format!("Save task failed: {}", e)))?
}

async fn share_image(
    sharer: Arc<dyn ExportSharer>,
    path: PathBuf,
    image_data: Arc<Vec<u8>>,
) -> bool {
    match task::spawn_blocking(move || sharer.share(&path, &image_data))
        .await
        .map_err(|e| ExportError::ShareError(format!("Share task failed: {}", e)))
    {
        Ok(Ok(())) => true,
        Ok(Err(e)) | Err(e) => {
            log::error!("Failed to share image: {}", e);
            false
        }
    }
}
