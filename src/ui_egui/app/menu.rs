use super::BookingApp;
use crate::ui_egui::dialogs::record_dialog::RecordDialogKind;
use egui::Context;

impl BookingApp {
    pub(super) fn render_menu_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.add_enabled_ui(!self.state.is_modal_open(), |ui| {
                egui::menu::bar(ui, |ui| {
                    self.render_file_menu(ui, ctx);
                    self.render_records_menu(ui);
                    self.render_help_menu(ui);
                });
            });
        });
    }

    fn render_file_menu(&mut self, ui: &mut egui::Ui, ctx: &Context) {
        ui.menu_button("File", |ui| {
            if ui.button("💾 Save    Ctrl+S").clicked() {
                self.save_now();
                ui.close_menu();
            }

            ui.separator();

            if ui.button("📤 Export to File").clicked() {
                self.export_to_default_file();
                ui.close_menu();
            }
            if ui.button("📤 Export As...").clicked() {
                self.export_as();
                ui.close_menu();
            }

            ui.separator();

            if ui.button("Exit").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });
    }

    fn render_records_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Records", |ui| {
            if ui.button("Add Record...    Ctrl+N").clicked() {
                self.open_record_dialog(RecordDialogKind::Add, None);
                ui.close_menu();
            }
            if ui.button("Edit Record...    Ctrl+E").clicked() {
                self.open_record_dialog(RecordDialogKind::Edit, None);
                ui.close_menu();
            }
            if ui.button("Delete Record...    Ctrl+D").clicked() {
                self.open_record_dialog(RecordDialogKind::Delete, None);
                ui.close_menu();
            }
        });
    }

    /// The four buttons above the grid.
    pub(super) fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Add Record").clicked() {
                self.open_record_dialog(RecordDialogKind::Add, None);
            }
            if ui.button("Edit Record").clicked() {
                self.open_record_dialog(RecordDialogKind::Edit, None);
            }
            if ui.button("Delete Record").clicked() {
                self.open_record_dialog(RecordDialogKind::Delete, None);
            }
            if ui.button("Export to File").clicked() {
                self.export_to_default_file();
            }
        });
    }
}
