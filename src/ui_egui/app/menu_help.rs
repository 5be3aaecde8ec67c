use super::BookingApp;
use egui::Context;

/// Help menu and About dialog.
impl BookingApp {
    pub(super) fn render_help_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Help", |ui| {
            if ui.button("ℹ About...").clicked() {
                self.state.show_about_dialog = true;
                ui.close_menu();
            }
        });
    }

    pub(super) fn render_about_dialog(&mut self, ctx: &Context) {
        if !self.state.show_about_dialog {
            return;
        }

        let mut dialog_open = true;
        egui::Window::new("About iPad Booking System")
            .open(&mut dialog_open)
            .collapsible(false)
            .resizable(false)
            .auto_sized()
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.vertical_centered(|ui| {
                    ui.heading("iPad Booking System");
                    ui.add_space(5.0);
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(10.0);
                    ui.separator();
                    ui.add_space(10.0);
                    ui.label(env!("CARGO_PKG_DESCRIPTION"));
                    ui.add_space(10.0);
                });

                egui::Grid::new("about_files")
                    .num_columns(2)
                    .spacing([20.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Bookings:");
                        ui.label(self.service.store().path().display().to_string());
                        ui.end_row();

                        ui.label("Report:");
                        ui.label(self.settings.export_file.display().to_string());
                        ui.end_row();
                    });
            });

        if !dialog_open {
            self.state.show_about_dialog = false;
        }
    }
}
