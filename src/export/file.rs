//! File saving for exported drawings.

use super::types::ExportError;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for file saving.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save images to.
    pub save_directory: PathBuf,
    /// Prefix placed before the unix timestamp.
    pub filename_prefix: String,
    /// Image format extension.
    pub format: String,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("drawme"),
            filename_prefix: "Drawme".to_string(),
            format: "png".to_string(),
        }
    }
}

impl FileSaveConfig {
    /// Builds the save settings from the `[export]` config section.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            save_directory: config.export_directory(),
            filename_prefix: config.export.filename_prefix.clone(),
            ..Self::default()
        }
    }
}

/// Builds a file name of the form `<prefix><unix-seconds>.<format>`.
pub fn filename_for_timestamp(prefix: &str, unix_seconds: i64, format: &str) -> String {
    format!("{}{}.{}", prefix, unix_seconds, format)
}

/// Generate a filename based on the prefix and the current time.
pub fn generate_filename(prefix: &str, format: &str) -> String {
    filename_for_timestamp(prefix, Utc::now().timestamp(), format)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save encoded image data to a new file in the configured directory.
///
/// Data is written to a `.part` file first and renamed into place, so a
/// failed write never leaves a truncated image under the final name.
///
/// # Returns
/// Path to the saved file
pub fn save_image(image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.save_directory)?;

    let filename = generate_filename(&config.filename_prefix, &config.format);
    let file_path = directory.join(&filename);

    log::info!(
        "Saving drawing to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    write_then_rename(image_data, &file_path)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);
    log::info!("Drawing saved successfully: {}", file_path.display());

    Ok(file_path)
}

/// Writes `image_data` to `<target>.part` and renames it onto `target`.
///
/// On failure the partial file is removed.
fn write_then_rename(image_data: &[u8], target: &Path) -> std::io::Result<()> {
    let mut partial = target.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    let result = fs::write(&partial, image_data).and_then(|()| fs::rename(&partial, target));
    if result.is_err()
        && partial.exists()
        && let Err(cleanup) = fs::remove_file(&partial)
    {
        log::warn!(
            "Failed to remove partial file {}: {}",
            partial.display(),
            cleanup
        );
    }
    result
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn filename_uses_prefix_and_unix_seconds() {
        assert_eq!(
            filename_for_timestamp("Drawme", 1_700_000_000, "png"),
            "Drawme1700000000.png"
        );

        let generated = generate_filename("Drawme", "png");
        let digits = generated
            .strip_prefix("Drawme")
            .and_then(|rest| rest.strip_suffix(".png"))
            .unwrap();
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn save_image_creates_directory_and_file() {
        let temp = TempDir::new().unwrap();
        let config = FileSaveConfig {
            save_directory: temp.path().join("out"),
            ..FileSaveConfig::default()
        };

        let path = save_image(&[1, 2, 3], &config).unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3]);
        let leftovers: Vec<_> = fs::read_dir(temp.path().join("out"))
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".part"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn save_image_fails_when_directory_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();
        let config = FileSaveConfig {
            save_directory: blocker,
            ..FileSaveConfig::default()
        };

        let err = save_image(&[1, 2, 3], &config).unwrap_err();
        assert!(matches!(err, ExportError::SaveError(_)));
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_default_config() {
        let config = FileSaveConfig::default();
        assert_eq!(config.format, "png");
        assert_eq!(config.filename_prefix, "Drawme");
        assert!(config.save_directory.to_string_lossy().contains("drawme"));
    }

    #[test]
    fn failed_rename_leaves_no_file_behind() {
        let temp = TempDir::new().unwrap();
        // A non-empty directory cannot be replaced by a file
        let target = temp.path().join("Drawme1700000000.png");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), b"x").unwrap();

        let err = write_then_rename(&[1, 2, 3], &target).unwrap_err();
        assert_ne!(err.kind(), std::io::ErrorKind::NotFound);

        assert!(target.is_dir(), "target directory must be untouched");
        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Drawme1700000000.png".to_string()]);
    }
}
