//! System notifications via freedesktop D-Bus.

use crate::export::ExportOutcome;
use std::collections::HashMap;
use zbus::{Connection, proxy};

const APP_NAME: &str = "Drawme";
const DEFAULT_ICON: &str = "image-x-generic";

/// Summary shown after a successful export.
pub const SAVED_SUMMARY: &str = "File saved successfully";
/// Summary shown when an export fails.
pub const FAILED_SUMMARY: &str = "Something went wrong while saving the file.";

/// D-Bus interface for freedesktop Notifications.
#[proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
trait Notifications {
    /// Send a notification.
    ///
    /// # Arguments
    /// * `app_name` - Application name
    /// * `replaces_id` - ID of notification to replace (0 for new)
    /// * `app_icon` - Icon name or path
    /// * `summary` - Notification title
    /// * `body` - Notification body text
    /// * `actions` - List of action identifiers and labels
    /// * `hints` - Additional metadata
    /// * `expire_timeout` - Timeout in milliseconds (-1 for default)
    ///
    /// # Returns
    /// Notification ID
    fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: Vec<&str>,
        hints: HashMap<&str, zbus::zvariant::Value<'_>>,
        expire_timeout: i32,
    ) -> zbus::Result<u32>;
}

/// Send a system notification.
///
/// # Arguments
/// * `summary` - Notification title
/// * `body` - Notification body text
/// * `icon` - Optional icon name (defaults to "image-x-generic")
pub async fn send_notification(
    summary: &str,
    body: &str,
    icon: Option<&str>,
) -> Result<(), String> {
    let connection = Connection::session()
        .await
        .map_err(|e| format!("Failed to connect to session bus: {}", e))?;

    let proxy = NotificationsProxy::new(&connection)
        .await
        .map_err(|e| format!("Failed to create notifications proxy: {}", e))?;

    let icon = icon.unwrap_or(DEFAULT_ICON);
    let hints = HashMap::new();

    proxy
        .notify(
            APP_NAME,
            0,
            icon,
            summary,
            body,
            vec![],
            hints,
            3000, // 3 second timeout
        )
        .await
        .map_err(|e| format!("Failed to send notification: {}", e))?;

    Ok(())
}

/// Builds the notification for a finished export.
///
/// Returns `(summary, body, icon)`.
pub fn export_notification(outcome: &ExportOutcome) -> (String, String, &'static str) {
    match outcome {
        ExportOutcome::Success(result) => (
            SAVED_SUMMARY.to_string(),
            format!("{} :{}", SAVED_SUMMARY, result.saved_path.display()),
            "document-save",
        ),
        ExportOutcome::Failed(reason) => {
            (FAILED_SUMMARY.to_string(), reason.clone(), "dialog-error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportResult;
    use std::path::PathBuf;

    #[test]
    fn success_notification_names_saved_file() {
        let outcome = ExportOutcome::Success(ExportResult {
            saved_path: PathBuf::from("/tmp/Drawme1700000000.png"),
            byte_len: 42,
            shared: true,
        });
        let (summary, body, _) = export_notification(&outcome);
        assert_eq!(summary, "File saved successfully");
        assert_eq!(body, "File saved successfully :/tmp/Drawme1700000000.png");
    }

    #[test]
    fn failure_notification_carries_reason() {
        let outcome = ExportOutcome::Failed("disk full".to_string());
        let (summary, body, icon) = export_notification(&outcome);
        assert_eq!(summary, "Something went wrong while saving the file.");
        assert_eq!(body, "disk full");
        assert_eq!(icon, "dialog-error");
    }
}
