use super::BookingApp;
use crate::ui_egui::dialogs::record_dialog::RecordDialogKind;

enum ShortcutAction {
    CloseDialog,
    Open(RecordDialogKind),
    Save,
}

impl BookingApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let action = ctx.input(|i| {
            if i.key_pressed(egui::Key::Escape) {
                Some(ShortcutAction::CloseDialog)
            } else if !i.modifiers.ctrl {
                None
            } else if i.key_pressed(egui::Key::N) {
                Some(ShortcutAction::Open(RecordDialogKind::Add))
            } else if i.key_pressed(egui::Key::E) {
                Some(ShortcutAction::Open(RecordDialogKind::Edit))
            } else if i.key_pressed(egui::Key::D) {
                Some(ShortcutAction::Open(RecordDialogKind::Delete))
            } else if i.key_pressed(egui::Key::S) {
                Some(ShortcutAction::Save)
            } else {
                None
            }
        });

        match action {
            Some(ShortcutAction::CloseDialog) => self.state.close_top_dialog(),
            Some(ShortcutAction::Open(kind)) => self.open_record_dialog(kind, None),
            Some(ShortcutAction::Save) if !self.state.is_modal_open() => self.save_now(),
            Some(ShortcutAction::Save) | None => {}
        }
    }
}
