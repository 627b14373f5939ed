//! Sharing exported images with other applications.
//!
//! On Wayland desktops the share action offers the PNG on the clipboard under
//! the `image/png` MIME type, so it can be pasted into any application that
//! accepts images.

use super::types::{ExportError, PNG_MIME_TYPE};
use std::path::Path;
use std::process::{Command, Stdio};
use wl_clipboard_rs::copy::{MimeType, Options, Source};

/// Offer the exported image to other applications.
///
/// Prefers the `wl-copy` command and falls back to the wl-clipboard-rs library.
///
/// # Arguments
/// * `path` - Location of the saved file (for logging)
/// * `image_data` - Encoded PNG bytes
pub fn share_image(path: &Path, image_data: &[u8]) -> Result<(), ExportError> {
    log::debug!(
        "Sharing {} ({} bytes) as {}",
        path.display(),
        image_data.len(),
        PNG_MIME_TYPE
    );

    match share_via_command(image_data) {
        Ok(()) => {
            log::info!("Shared {} via wl-copy", path.display());
            Ok(())
        }
        Err(cmd_err) => {
            log::warn!(
                "wl-copy command path failed ({}). Falling back to wl-clipboard-rs",
                cmd_err
            );
            match share_via_library(image_data) {
                Ok(()) => {
                    log::info!("Shared {} via wl-clipboard-rs fallback", path.display());
                    Ok(())
                }
                Err(lib_err) => Err(ExportError::ShareError(format!(
                    "wl-copy failed: {} ; wl-clipboard-rs failed: {}",
                    cmd_err, lib_err
                ))),
            }
        }
    }
}

fn share_via_library(image_data: &[u8]) -> Result<(), ExportError> {
    use wl_clipboard_rs::copy::ServeRequests;

    let mut opts = Options::new();

    // Serve one paste then exit
    opts.serve_requests(ServeRequests::Only(1));

    opts.copy(
        Source::Bytes(image_data.into()),
        MimeType::Specific(PNG_MIME_TYPE.to_string()),
    )
    .map_err(|e| ExportError::ShareError(format!("wl-clipboard-rs error: {}", e)))?;

    Ok(())
}

fn share_via_command(image_data: &[u8]) -> Result<(), ExportError> {
    use std::io::Write;

    let mut child = Command::new("wl-copy")
        .arg("--type")
        .arg(PNG_MIME_TYPE)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            ExportError::ShareError(format!("Failed to spawn wl-copy (is it installed?): {}", e))
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(image_data).map_err(|e| {
            ExportError::ShareError(format!("Failed to write to wl-copy stdin: {}", e))
        })?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| ExportError::ShareError(format!("Failed to wait for wl-copy: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExportError::ShareError(format!("wl-copy failed: {}", stderr)));
    }

    Ok(())
}
