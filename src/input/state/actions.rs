use crate::input::action::Action;
use log::debug;

use super::InputState;

impl InputState {
    /// Applies a host command.
    ///
    /// Commands that change the model set `needs_redraw`. `Export` is only
    /// queued; the host picks it up with [`InputState::take_pending_export`].
    pub fn handle_action(&mut self, action: Action) {
        debug!("Handling action {:?}", action);
        match action {
            Action::Clear => {
                self.model.clear();
                self.needs_redraw = true;
            }
            Action::Undo => {
                if self.model.undo() {
                    self.needs_redraw = true;
                }
            }
            Action::Redo => {
                if self.model.redo() {
                    self.needs_redraw = true;
                }
            }
            Action::SetColor(spec) => {
                self.set_color(&spec);
            }
            Action::SetBrushSize(size) => {
                self.set_brush_size(size);
            }
            Action::SelectBrushPreset(index) => {
                self.select_brush_preset(index);
            }
            Action::Export => {
                self.pending_export = true;
            }
        }
    }
}
