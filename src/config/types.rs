//! Configuration type definitions.

use super::enums::{ClearPolicy, ColorSpec};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the brush the canvas starts with and the sizes offered by the
/// brush picker.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default brush color - a color name, `#RRGGBB` / `#AARRGGBB`, or an RGB
    /// array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush size in density-independent units (valid range: 1.0 - 100.0)
    #[serde(default = "default_brush_size")]
    pub default_brush_size: f64,

    /// Brush sizes offered by the picker, in density-independent units
    #[serde(default = "default_brush_presets")]
    pub brush_presets: Vec<f64>,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_brush_size: default_brush_size(),
            brush_presets: default_brush_presets(),
        }
    }
}

/// Display metrics used to convert brush sizes to pixels.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DisplayConfig {
    /// Device pixels per density-independent unit (valid range: 0.5 - 4.0)
    #[serde(default = "default_density")]
    pub density: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            density: default_density(),
        }
    }
}

/// Image export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported images are written to (`~` is expanded).
    /// Defaults to the user cache directory.
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// File name prefix; the unix timestamp and `.png` are appended
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,

    /// Color painted behind the strokes in exported images
    #[serde(default = "default_export_background")]
    pub background: ColorSpec,

    /// Offer the exported image to other applications after saving
    #[serde(default = "default_true")]
    pub share: bool,

    /// Show a desktop notification when an export finishes or fails
    #[serde(default = "default_true")]
    pub notify: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename_prefix: default_filename_prefix(),
            background: default_export_background(),
            share: default_true(),
            notify: default_true(),
        }
    }
}

/// Undo/redo history settings.
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct HistoryConfig {
    /// Whether clearing the canvas also discards the redo history
    /// (`discard-redo` or `keep-redo`)
    #[serde(default)]
    pub clear_policy: ClearPolicy,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_brush_size() -> f64 {
    5.0
}

fn default_brush_presets() -> Vec<f64> {
    vec![10.0, 15.0, 20.0, 25.0, 30.0, 35.0]
}

fn default_density() -> f64 {
    1.0
}

fn default_export_directory() -> String {
    dirs::cache_dir()
        .map(|dir| dir.join("drawme").to_string_lossy().into_owned())
        .unwrap_or_else(|| "~/.cache/drawme".to_string())
}

fn default_filename_prefix() -> String {
    "Drawme".to_string()
}

fn default_export_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_true() -> bool {
    true
}
