//! Utility functions for color names and length-unit conversion.
//!
//! This module provides:
//! - Color name lookup used by color-string parsing and the config file
//! - Human-readable names for log output
//! - Density-independent length conversion for brush sizes

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "black", "white", "red", "green", "blue", "yellow", "cyan", "magenta"
/// - "gray"/"grey", "darkgray"/"darkgrey", "lightgray"/"lightgrey"
/// - "aqua", "fuchsia", "lime", "maroon", "navy", "olive", "purple", "silver", "teal"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "green" | "lime" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "cyan" | "aqua" => Some(CYAN),
        "magenta" | "fuchsia" => Some(MAGENTA),
        "gray" | "grey" => Some(Color::from_rgb8(0x88, 0x88, 0x88)),
        "darkgray" | "darkgrey" => Some(Color::from_rgb8(0x44, 0x44, 0x44)),
        "lightgray" | "lightgrey" => Some(Color::from_rgb8(0xCC, 0xCC, 0xCC)),
        "maroon" => Some(Color::from_rgb8(0x80, 0x00, 0x00)),
        "navy" => Some(Color::from_rgb8(0x00, 0x00, 0x80)),
        "olive" => Some(Color::from_rgb8(0x80, 0x80, 0x00)),
        "purple" => Some(Color::from_rgb8(0x80, 0x00, 0x80)),
        "silver" => Some(Color::from_rgb8(0xC0, 0xC0, 0xC0)),
        "teal" => Some(Color::from_rgb8(0x00, 0x80, 0x80)),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
///
/// # Returns
/// A static string with the color name, or "Custom" if the color doesn't
/// match any primary color.
pub fn color_to_name(color: &Color) -> &'static str {
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r < 0.1 && color.g > 0.9 && color.b > 0.9 {
        "Cyan"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Magenta"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Converts a density-independent length into device pixels.
///
/// `density` is the number of device pixels per host length unit; a density
/// of 2.0 turns a 10 unit brush into a 20 pixel stroke.
pub fn dp_to_px(value: f64, density: f64) -> f64 {
    value * density
}
