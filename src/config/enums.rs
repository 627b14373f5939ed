//! Configuration enum types.

use crate::draw::{BLACK, Color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What `clear` does to the redo history.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ClearPolicy {
    /// Clearing also empties the redo stack, so redo cannot bring back erased strokes
    #[default]
    DiscardRedo,
    /// Clearing leaves the redo stack alone; redo after clear restores undone strokes
    KeepRedo,
}

/// Color specification - either a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Named or hex color
/// default_color = "red"
/// default_color = "#FF8000"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Color name (red, black, teal, ...) or `#RRGGBB` / `#AARRGGBB`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unparseable strings fall back to `fallback` with a warning.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(spec) => Color::parse(spec).unwrap_or_else(|err| {
                warn!("{}, using fallback color", err);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Converts the color specification, falling back to black.
    pub fn to_color(&self) -> Color {
        self.to_color_or(BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RED, WHITE};

    #[test]
    fn color_spec_accepts_names_hex_and_rgb() {
        assert_eq!(ColorSpec::Name("red".into()).to_color(), RED);
        assert_eq!(ColorSpec::Name("#FFFFFF".into()).to_color(), WHITE);
        assert_eq!(ColorSpec::Rgb([255, 0, 0]).to_color(), RED);
    }

    #[test]
    fn unknown_color_uses_fallback() {
        assert_eq!(
            ColorSpec::Name("nope".into()).to_color_or(WHITE),
            WHITE
        );
        assert_eq!(ColorSpec::Name("nope".into()).to_color(), BLACK);
    }
}
