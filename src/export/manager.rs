use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::time::{Duration, sleep};

use crate::draw::RasterSnapshot;
use crate::export::{
    dependencies::ExportDependencies,
    file::FileSaveConfig,
    pipeline::{ExportRequest, perform_export},
    types::{ExportError, ExportOutcome, ExportStatus},
};

const RESULT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Shared state for managing background export operations.
///
/// Bridges the single-threaded drawing loop and the async worker: the loop
/// hands over an owned [`RasterSnapshot`] and later collects the outcome.
#[derive(Clone)]
pub struct ExportManager {
    /// Channel for sending export requests.
    request_tx: mpsc::UnboundedSender<ExportRequest>,
    /// Shared status of the current export operation.
    status: Arc<Mutex<ExportStatus>>,
    /// Shared result of the last export (if any).
    last_result: Arc<Mutex<Option<ExportOutcome>>>,
}

impl ExportManager {
    /// Create a new export manager.
    ///
    /// This spawns a background task that encodes, saves and shares images.
    pub fn new(runtime_handle: &tokio::runtime::Handle) -> Self {
        Self::with_dependencies(runtime_handle, ExportDependencies::default())
    }

    /// Create an export manager with custom dependencies (useful for testing).
    pub fn with_dependencies(
        runtime_handle: &tokio::runtime::Handle,
        dependencies: ExportDependencies,
    ) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ExportRequest>();
        let status = Arc::new(Mutex::new(ExportStatus::Idle));
        let last_result = Arc::new(Mutex::new(None));
        let dependencies = Arc::new(dependencies);

        let status_clone = status.clone();
        let result_clone = last_result.clone();

        runtime_handle.spawn(async move {
            while let Some(request) = request_rx.recv().await {
                log::debug!("Processing export request: {:?}", request);

                *status_clone.lock().await = ExportStatus::InProgress;

                match perform_export(request, dependencies.clone()).await {
                    Ok(result) => {
                        log::info!("Export successful: {}", result.saved_path.display());
                        *status_clone.lock().await = ExportStatus::Success;
                        *result_clone.lock().await = Some(ExportOutcome::Success(result));
                    }
                    Err(e) => {
                        let error_message = e.to_string();
                        log::error!("Export failed: {}", error_message);
                        *status_clone.lock().await = ExportStatus::Failed(error_message.clone());
                        *result_clone.lock().await = Some(ExportOutcome::Failed(error_message));
                    }
                }
            }
        });

        Self {
            request_tx,
            status,
            last_result,
        }
    }

    /// Request an export of `snapshot`.
    ///
    /// This is non-blocking and returns immediately; the work happens on the
    /// background worker.
    pub fn request_export(
        &self,
        snapshot: RasterSnapshot,
        save_config: FileSaveConfig,
        share: bool,
    ) -> Result<(), ExportError> {
        let request = ExportRequest {
            snapshot,
            save_config,
            share,
        };

        self.request_tx
            .send(request)
            .map_err(|_| ExportError::WorkerError("Export manager not running".to_string()))?;

        Ok(())
    }

    /// Get the current export status.
    pub async fn get_status(&self) -> ExportStatus {
        self.status.lock().await.clone()
    }

    /// Get the result of the last export and clear it.
    pub async fn take_result(&self) -> Option<ExportOutcome> {
        self.last_result.lock().await.take()
    }

    /// Try to get the result without waiting (non-blocking).
    pub fn try_take_result(&self) -> Option<ExportOutcome> {
        self.last_result.try_lock().ok().and_then(|mut r| r.take())
    }

    /// Waits until the worker publishes an outcome and takes it.
    ///
    /// Only call this after a request was accepted; it has no timeout.
    pub async fn wait_for_result(&self) -> ExportOutcome {
        loop {
            if let Some(outcome) = self.take_result().await {
                return outcome;
            }
            sleep(RESULT_POLL_INTERVAL).await;
        }
    }
}

#[cfg(test)]
impl ExportManager {
    pub(crate) fn with_closed_channel_for_test() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<ExportRequest>();
        drop(rx);
        Self {
            request_tx: tx,
            status: Arc::new(Mutex::new(ExportStatus::Idle)),
            last_result: Arc::new(Mutex::new(None)),
        }
    }
}
