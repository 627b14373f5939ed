//! Configuration file support for drawme.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/drawme/config.toml`. Settings include brush defaults,
//! display density, export destination and the undo history policy.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::{ClearPolicy, ColorSpec};
pub use types::{DisplayConfig, DrawingConfig, ExportConfig, HistoryConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const BRUSH_SIZE_RANGE: (f64, f64) = (1.0, 100.0);
const DENSITY_RANGE: (f64, f64) = (0.5, 4.0);

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_brush_size = 5.0
/// brush_presets = [10.0, 15.0, 20.0, 25.0, 30.0, 35.0]
///
/// [display]
/// density = 2.0
///
/// [export]
/// directory = "~/.cache/drawme"
/// filename_prefix = "Drawme"
/// background = "white"
/// share = true
/// notify = true
///
/// [history]
/// clear_policy = "discard-redo"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Brush defaults and presets
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Display metrics
    #[serde(default)]
    pub display: DisplayConfig,

    /// Export destination and behaviour
    #[serde(default)]
    pub export: ExportConfig,

    /// Undo/redo history behaviour
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_brush_size` and each brush preset: 1.0 - 100.0
    /// - `density`: 0.5 - 4.0
    /// - `filename_prefix`: non-empty, no path separators
    fn validate_and_clamp(&mut self) {
        let (min_size, max_size) = BRUSH_SIZE_RANGE;
        if !(min_size..=max_size).contains(&self.drawing.default_brush_size) {
            log::warn!(
                "Invalid default_brush_size {:.1}, clamping to {:.1}-{:.1} range",
                self.drawing.default_brush_size,
                min_size,
                max_size
            );
            self.drawing.default_brush_size = clamp_or(
                self.drawing.default_brush_size,
                min_size,
                max_size,
                DrawingConfig::default().default_brush_size,
            );
        }

        let preset_count = self.drawing.brush_presets.len();
        self.drawing
            .brush_presets
            .retain(|size| size.is_finite() && *size > 0.0);
        if self.drawing.brush_presets.len() != preset_count {
            log::warn!(
                "Dropped {} non-positive brush preset(s)",
                preset_count - self.drawing.brush_presets.len()
            );
        }
        for size in &mut self.drawing.brush_presets {
            if !(min_size..=max_size).contains(size) {
                log::warn!("Invalid brush preset {:.1}, clamping", size);
                *size = size.clamp(min_size, max_size);
            }
        }

        let (min_density, max_density) = DENSITY_RANGE;
        if !(min_density..=max_density).contains(&self.display.density) {
            log::warn!(
                "Invalid density {:.2}, clamping to {:.1}-{:.1} range",
                self.display.density,
                min_density,
                max_density
            );
            self.display.density = clamp_or(
                self.display.density,
                min_density,
                max_density,
                DisplayConfig::default().density,
            );
        }

        let prefix = &self.export.filename_prefix;
        if prefix.is_empty() || prefix.contains(['/', '\\']) {
            log::warn!(
                "Invalid filename_prefix '{}', falling back to 'Drawme'",
                prefix
            );
            self.export.filename_prefix = ExportConfig::default().filename_prefix;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/drawme/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("drawme");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Serializes the config to TOML and writes it to `config_path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes a config file holding the default settings.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path or
    /// the file cannot be written.
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        Self::default().save_to(config_path)?;
        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the config file, for editors and tooling.
    pub fn config_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Export directory with `~` expanded.
    pub fn export_directory(&self) -> PathBuf {
        crate::export::file::expand_tilde(&self.export.directory)
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};
    use tempfile::TempDir;

    #[test]
    fn defaults_match_stock_brush() {
        let config = Config::default();
        assert_eq!(config.drawing.default_color.to_color(), BLACK);
        assert_eq!(config.drawing.default_brush_size, 5.0);
        assert_eq!(
            config.drawing.brush_presets,
            vec![10.0, 15.0, 20.0, 25.0, 30.0, 35.0]
        );
        assert_eq!(config.export.filename_prefix, "Drawme");
        assert_eq!(config.export.background.to_color(), WHITE);
        assert_eq!(config.history.clear_policy, ClearPolicy::DiscardRedo);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            [display]
            density = 2.5

            [history]
            clear_policy = "keep-redo"
            "#,
        )
        .unwrap();
        assert_eq!(config.display.density, 2.5);
        assert_eq!(config.history.clear_policy, ClearPolicy::KeepRedo);
        assert_eq!(config.drawing.default_brush_size, 5.0);
        assert!(config.export.share);
    }

    #[test]
    fn rgb_color_spec_parses() {
        let config = Config::from_toml("[drawing]\ndefault_color = [0, 0, 255]\n").unwrap();
        assert_eq!(config.drawing.default_color, ColorSpec::Rgb([0, 0, 255]));
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.drawing.default_brush_size = 500.0;
        config.drawing.brush_presets = vec![-1.0, 0.5, 20.0, 250.0];
        config.display.density = f64::NAN;
        config.export.filename_prefix = "../evil".to_string();

        config.validate_and_clamp();

        assert_eq!(config.drawing.default_brush_size, 100.0);
        assert_eq!(config.drawing.brush_presets, vec![1.0, 20.0, 100.0]);
        assert_eq!(config.display.density, 1.0);
        assert_eq!(config.export.filename_prefix, "Drawme");
    }

    #[test]
    fn load_from_missing_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config.display.density, 1.0);
    }

    #[test]
    fn load_from_rejects_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn default_file_round_trips_and_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        Config::create_default_file(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.drawing.brush_presets.len(), 6);
        assert!(Config::create_default_file(&path).is_err());
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::config_schema()).unwrap();
        assert!(schema.contains("clear_policy"));
        assert!(schema.contains("brush_presets"));
    }
}
