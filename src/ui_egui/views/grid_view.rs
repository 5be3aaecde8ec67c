use egui::{Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::models::booking::{BookingGrid, BookingKey, Day, Period, DAY_COUNT};
use crate::ui_egui::dialogs::record_dialog::RecordDialogKind;
use crate::ui_egui::theme::BookingTheme;

pub const PERIOD_COLUMN_WIDTH: f32 = 110.0;
pub const MIN_DAY_COLUMN_WIDTH: f32 = 120.0;
const HEADER_HEIGHT: f32 = 28.0;
const ROW_HEIGHT: f32 = 30.0;

/// What happened in the grid during one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GridViewResponse {
    /// A cell's text changed this frame
    pub edited: bool,
    /// A cell lost keyboard focus, so pending edits should be saved
    pub committed: bool,
    /// Context-menu request to open a dialog for one cell
    pub dialog_request: Option<(RecordDialogKind, BookingKey)>,
}

/// The weekly table: period names down the side, day names across the top,
/// and one text editor per slot bound straight to the grid.
pub struct GridView;

impl GridView {
    pub fn show(
        ui: &mut egui::Ui,
        grid: &mut BookingGrid,
        theme: &BookingTheme,
        today: Option<Day>,
    ) -> GridViewResponse {
        let mut result = GridViewResponse::default();

        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(PERIOD_COLUMN_WIDTH))
            .columns(
                Column::remainder().at_least(MIN_DAY_COLUMN_WIDTH),
                DAY_COUNT,
            )
            .header(HEADER_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("Time");
                });
                for day in Day::ALL {
                    header.col(|ui| {
                        let mut text = RichText::new(day.label()).strong();
                        if Some(day) == today {
                            text = text.color(theme.today_text);
                        }
                        ui.label(text);
                    });
                }
            })
            .body(|mut body| {
                for period in Period::ALL {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(period.label());
                        });
                        for day in Day::ALL {
                            row.col(|ui| {
                                let key = BookingKey::new(day, period);
                                Self::show_cell(ui, grid, key, theme, Some(day) == today, &mut result);
                            });
                        }
                    });
                }
            });

        result
    }

    fn show_cell(
        ui: &mut egui::Ui,
        grid: &mut BookingGrid,
        key: BookingKey,
        theme: &BookingTheme,
        is_today: bool,
        result: &mut GridViewResponse,
    ) {
        let fill = if grid.is_booked(key) {
            theme.booked_cell
        } else if is_today {
            theme.today_column
        } else {
            Color32::TRANSPARENT
        };

        let response = egui::Frame::none()
            .fill(fill)
            .rounding(4.0)
            .inner_margin(2.0)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(grid.get_mut(key))
                        .id(egui::Id::new(("booking_cell", key.day, key.period)))
                        .desired_width(f32::INFINITY),
                )
            })
            .inner
            .on_hover_text(key.to_string());

        if response.changed() {
            result.edited = true;
        }
        if response.lost_focus() {
            result.committed = true;
        }

        response.context_menu(|ui| {
            if ui.button("Edit booking...").clicked() {
                result.dialog_request = Some((RecordDialogKind::Edit, key));
                ui.close_menu();
            }
            if ui
                .add_enabled(grid.is_booked(key), egui::Button::new("Clear slot..."))
                .clicked()
            {
                result.dialog_request = Some((RecordDialogKind::Delete, key));
                ui.close_menu();
            }
        });
    }
}
