use super::BookingApp;
use crate::models::booking::Day;
use crate::ui_egui::views::{GridView, MonthCalendar};
use chrono::Datelike;

const CALENDAR_PANEL_WIDTH: f32 = 230.0;

impl BookingApp {
    pub(super) fn render_calendar_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("calendar_panel")
            .resizable(false)
            .exact_width(CALENDAR_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                MonthCalendar::show(ui, self.today, &self.active_theme);
            });
    }

    pub(super) fn render_main_panel(&mut self, ctx: &egui::Context) {
        let modal_open = self.state.is_modal_open();
        let today = Day::from_weekday(self.today.weekday());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                self.render_toolbar(ui);
                ui.add_space(6.0);
                ui.separator();

                let grid_response = egui::ScrollArea::both()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        GridView::show(ui, self.service.grid_mut(), &self.active_theme, today)
                    })
                    .inner;

                if grid_response.edited {
                    self.service.mark_dirty();
                }
                if grid_response.committed {
                    self.persist_if_needed();
                }
                if let Some((kind, key)) = grid_response.dialog_request {
                    self.open_record_dialog(kind, Some(key));
                }
            });
        });
    }
}
