//! Input state shared by touch handling and command dispatch.

use crate::config::{ClearPolicy, Config};
use crate::draw::{Color, StrokeModel};
use crate::input::gesture::{SwipeDirection, SwipeTracker};
use crate::util;
use log::{debug, warn};

/// Callback invoked with each recognised swipe.
pub type SwipeHandler = Box<dyn FnMut(SwipeDirection) + Send>;

/// Main input state: the stroke model plus everything the host needs to
/// drive it.
///
/// The host feeds touch events and [`crate::input::Action`]s in, repaints
/// when [`InputState::needs_redraw`] is set, and collects export requests via
/// [`InputState::take_pending_export`].
pub struct InputState {
    /// Strokes drawn so far plus undo/redo history
    pub model: StrokeModel,
    /// Device pixels per density-independent unit
    pub density: f64,
    /// Brush sizes (density-independent) selectable by index
    pub brush_presets: Vec<f64>,
    /// Whether the surface must be repainted from the model
    pub needs_redraw: bool,
    /// Start of the current gesture, for swipe classification
    pub(super) swipe: SwipeTracker,
    pub(super) swipe_handler: Option<SwipeHandler>,
    /// Export requested but not yet taken by the host
    pub(super) pending_export: bool,
}

impl InputState {
    /// Creates an input state with an empty model.
    ///
    /// # Arguments
    /// * `color` - Initial brush color
    /// * `brush_size` - Initial brush size in density-independent units
    /// * `density` - Device pixels per density-independent unit
    /// * `brush_presets` - Sizes offered by [`InputState::select_brush_preset`]
    /// * `clear_policy` - Whether clearing discards the redo history
    pub fn with_defaults(
        color: Color,
        brush_size: f64,
        density: f64,
        brush_presets: Vec<f64>,
        clear_policy: ClearPolicy,
    ) -> Self {
        let mut model = StrokeModel::with_clear_policy(clear_policy);
        model.set_color(color);

        let mut state = Self {
            model,
            density,
            brush_presets,
            needs_redraw: true,
            swipe: SwipeTracker::new(),
            swipe_handler: None,
            pending_export: false,
        };
        state.set_brush_size(brush_size);
        state
    }

    /// Builds the initial state from the user's configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.drawing.default_color.to_color(),
            config.drawing.default_brush_size,
            config.display.density,
            config.drawing.brush_presets.clone(),
            config.history.clear_policy,
        )
    }

    /// Installs the callback that receives swipe classifications.
    pub fn set_swipe_handler(&mut self, handler: SwipeHandler) {
        self.swipe_handler = Some(handler);
    }

    /// Sets the brush size for the next strokes.
    ///
    /// `size` is in density-independent units and is converted to device
    /// pixels with the configured density. Returns `false` when the size was
    /// rejected.
    pub fn set_brush_size(&mut self, size: f64) -> bool {
        let px = util::dp_to_px(size, self.density);
        let accepted = self.model.set_brush_size(px);
        if accepted {
            debug!("Brush size set to {} ({} px)", size, px);
        } else {
            warn!("Ignoring invalid brush size {}", size);
        }
        accepted
    }

    /// Sets the brush color for the next strokes from a color string.
    ///
    /// Unparseable strings leave the brush untouched.
    pub fn set_color(&mut self, spec: &str) -> bool {
        match Color::parse(spec) {
            Ok(color) => {
                self.model.set_color(color);
                debug!("Brush color set to {} ({})", spec, util::color_to_name(&color));
                true
            }
            Err(err) => {
                warn!("Ignoring brush color '{}': {}", spec, err);
                false
            }
        }
    }

    /// Selects a brush size from the configured presets.
    pub fn select_brush_preset(&mut self, index: usize) -> bool {
        match self.brush_presets.get(index).copied() {
            Some(size) => self.set_brush_size(size),
            None => {
                warn!(
                    "Brush preset {} out of range ({} presets configured)",
                    index,
                    self.brush_presets.len()
                );
                false
            }
        }
    }

    /// Returns whether an export was requested since the last call, and
    /// clears the request.
    pub fn take_pending_export(&mut self) -> bool {
        std::mem::take(&mut self.pending_export)
    }

    pub fn has_pending_export(&self) -> bool {
        self.pending_export
    }
}
