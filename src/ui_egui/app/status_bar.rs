//! Status bar: how many slots are booked, where they are stored, and
//! whether in-grid edits are still waiting to be saved.

use super::BookingApp;
use crate::models::booking::SLOT_COUNT;
use egui::{Color32, RichText};

/// Status bar section separator
const SEPARATOR_WIDTH: f32 = 8.0;

impl BookingApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let secondary = self.active_theme.secondary_text;

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let booked = self.service.grid().booked_count();
                    ui.label(
                        RichText::new(format!("{} of {} slots booked", booked, SLOT_COUNT)).small(),
                    );

                    ui.add_space(SEPARATOR_WIDTH);
                    ui.separator();
                    ui.add_space(SEPARATOR_WIDTH);

                    ui.label(
                        RichText::new(self.service.store().path().display().to_string())
                            .small()
                            .color(secondary),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.service.is_dirty() {
                            ui.label(
                                RichText::new("● Unsaved changes")
                                    .small()
                                    .color(Color32::from_rgb(220, 150, 50)),
                            )
                            .on_hover_text("Saved when you leave the cell, press Ctrl+S, or close the window");
                        } else {
                            ui.label(RichText::new("✓ Saved").small().color(secondary));
                        }
                    });
                });
            });
    }
}
