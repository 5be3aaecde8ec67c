use chrono::{Datelike, NaiveDate};
use egui::RichText;

use crate::ui_egui::theme::BookingTheme;
use crate::utils::date::month_weeks;

const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Read-only month overview for the month containing `today`.
pub struct MonthCalendar;

impl MonthCalendar {
    pub fn show(ui: &mut egui::Ui, today: NaiveDate, theme: &BookingTheme) {
        ui.vertical_centered(|ui| {
            ui.strong(today.format("%B %Y").to_string());
        });
        ui.add_space(4.0);

        egui::Grid::new("month_calendar_grid")
            .num_columns(7)
            .spacing([6.0, 4.0])
            .min_col_width(24.0)
            .show(ui, |ui| {
                for name in WEEKDAY_HEADERS {
                    ui.label(RichText::new(name).small().strong());
                }
                ui.end_row();

                for week in month_weeks(today.year(), today.month()) {
                    for day in week {
                        match day {
                            Some(day) if day == today.day() => {
                                ui.label(
                                    RichText::new(day.to_string())
                                        .strong()
                                        .color(theme.today_text),
                                );
                            }
                            Some(day) => {
                                ui.label(day.to_string());
                            }
                            None => {
                                ui.label("");
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }
}
