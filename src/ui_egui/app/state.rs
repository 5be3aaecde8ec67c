use crate::ui_egui::dialogs::record_dialog::RecordDialogState;

#[derive(Default)]
pub struct AppState {
    /// Add / Edit / Delete dialog, when one is open
    pub record_dialog: Option<RecordDialogState>,
    pub show_about_dialog: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// While true the grid and toolbar ignore input.
    pub fn is_modal_open(&self) -> bool {
        self.record_dialog.is_some() || self.show_about_dialog
    }

    /// Dismiss whichever dialog is on top, dropping its input.
    pub fn close_top_dialog(&mut self) {
        if self.record_dialog.is_some() {
            self.record_dialog = None;
        } else {
            self.show_about_dialog = false;
        }
    }
}
