use crate::input::events::{TouchEvent, TouchPhase};
use log::debug;

use super::InputState;

impl InputState {
    /// Processes one touch event.
    ///
    /// Start begins a stroke with the current brush, Move extends it and End
    /// commits it. Any change to the model sets `needs_redraw`.
    pub fn on_touch(&mut self, event: TouchEvent) {
        match event.phase {
            TouchPhase::Start => self.on_touch_start(event.x, event.y),
            TouchPhase::Move => self.on_touch_move(event.x, event.y),
            TouchPhase::End => self.on_touch_end(event.x, event.y),
        }
    }

    pub fn on_touch_start(&mut self, x: f64, y: f64) {
        self.model.start((x, y));
        self.swipe.begin((x, y));
        self.needs_redraw = true;
    }

    pub fn on_touch_move(&mut self, x: f64, y: f64) {
        if self.model.extend((x, y)) {
            self.needs_redraw = true;
        }
    }

    /// Commits the stroke in progress.
    ///
    /// The end position is not added to the stroke; it only feeds swipe
    /// classification.
    pub fn on_touch_end(&mut self, x: f64, y: f64) {
        if self.model.commit() {
            debug!("Committed stroke #{}", self.model.committed().len());
            self.needs_redraw = true;
        }

        if let Some(direction) = self.swipe.finish((x, y))
            && let Some(handler) = self.swipe_handler.as_mut()
        {
            handler(direction);
        }
    }
}
