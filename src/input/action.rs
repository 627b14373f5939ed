/// Commands the host can issue besides touch input.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Erase every stroke
    Clear,
    /// Remove the most recent stroke
    Undo,
    /// Restore the most recently undone stroke
    Redo,
    /// Change the brush color (color name, `#RRGGBB` or `#AARRGGBB`)
    SetColor(String),
    /// Change the brush size, in density-independent units
    SetBrushSize(f64),
    /// Pick one of the configured brush presets by index
    SelectBrushPreset(usize),
    /// Ask the host to export the drawing
    Export,
}
