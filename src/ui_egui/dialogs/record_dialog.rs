//! Add / Edit / Delete record dialogs.
//!
//! All three pick a slot from the fixed day and period lists. Add and Edit
//! also take the booking text; Edit starts from the slot's current text.
//! Delete clears the chosen slot.

use egui::{Context, RichText};

use crate::models::booking::{BookingGrid, BookingKey, Day, Period};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordDialogKind {
    Add,
    Edit,
    Delete,
}

impl RecordDialogKind {
    pub fn title(&self) -> &'static str {
        match self {
            RecordDialogKind::Add => "Add Record",
            RecordDialogKind::Edit => "Edit Record",
            RecordDialogKind::Delete => "Delete Record",
        }
    }

    pub fn confirm_text(&self) -> &'static str {
        match self {
            RecordDialogKind::Add | RecordDialogKind::Edit => "Save",
            RecordDialogKind::Delete => "Delete",
        }
    }

    fn takes_text(&self) -> bool {
        !matches!(self, RecordDialogKind::Delete)
    }
}

/// Why a dialog cannot be confirmed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Choose a day and a period")]
    MissingDayAndPeriod,
    #[error("Choose a day")]
    MissingDay,
    #[error("Choose a period")]
    MissingPeriod,
}

/// Result from the record dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDialogResult {
    /// User hasn't made a choice yet
    None,
    /// User closed the dialog; pending input is dropped
    Cancelled,
    Save { key: BookingKey, text: String },
    Clear { key: BookingKey },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDialogState {
    pub kind: RecordDialogKind,
    pub day: Option<Day>,
    pub period: Option<Period>,
    pub text: String,
    /// Slot whose text was last copied into `text`, and that text (Edit only)
    prefilled: Option<(BookingKey, String)>,
}

impl RecordDialogState {
    pub fn new(kind: RecordDialogKind) -> Self {
        Self {
            kind,
            day: None,
            period: None,
            text: String::new(),
            prefilled: None,
        }
    }

    /// Open with a slot already chosen, e.g. from a cell's context menu.
    pub fn for_slot(kind: RecordDialogKind, key: BookingKey) -> Self {
        Self {
            day: Some(key.day),
            period: Some(key.period),
            ..Self::new(kind)
        }
    }

    pub fn selected_key(&self) -> Option<BookingKey> {
        Some(BookingKey::new(self.day?, self.period?))
    }

    pub fn validate(&self) -> Result<BookingKey, DraftError> {
        match (self.day, self.period) {
            (Some(day), Some(period)) => Ok(BookingKey::new(day, period)),
            (None, None) => Err(DraftError::MissingDayAndPeriod),
            (None, Some(_)) => Err(DraftError::MissingDay),
            (Some(_), None) => Err(DraftError::MissingPeriod),
        }
    }

    /// For Edit, load the selected slot's current text whenever the
    /// selection moves to a different slot. Only an empty field or one still
    /// holding the previous pre-fill is replaced; typed text is kept.
    pub fn sync_prefill(&mut self, grid: &BookingGrid) {
        if self.kind != RecordDialogKind::Edit {
            return;
        }
        let Some(key) = self.selected_key() else {
            return;
        };
        if matches!(&self.prefilled, Some((prefilled_key, _)) if *prefilled_key == key) {
            return;
        }

        let untouched = self.text.is_empty()
            || matches!(&self.prefilled, Some((_, prefill)) if *prefill == self.text);
        let current = grid.get(key).to_string();
        if untouched {
            self.text = current.clone();
        }
        self.prefilled = Some((key, current));
    }

    pub fn confirm(&self) -> Result<RecordDialogResult, DraftError> {
        let key = self.validate()?;
        Ok(match self.kind {
            RecordDialogKind::Add | RecordDialogKind::Edit => RecordDialogResult::Save {
                key,
                text: self.text.clone(),
            },
            RecordDialogKind::Delete => RecordDialogResult::Clear { key },
        })
    }
}

/// Renders the record dialog and reports what the user chose this frame.
pub fn render_record_dialog(
    ctx: &Context,
    state: &mut RecordDialogState,
    grid: &BookingGrid,
) -> RecordDialogResult {
    state.sync_prefill(grid);

    let mut result = RecordDialogResult::None;
    let mut open = true;

    egui::Window::new(state.kind.title())
        .id(egui::Id::new("record_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(320.0);
            ui.add_space(5.0);

            egui::Grid::new("record_dialog_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Day:");
                    egui::ComboBox::from_id_source("record_dialog_day")
                        .width(180.0)
                        .selected_text(state.day.map_or("Select...", Day::label))
                        .show_ui(ui, |ui| {
                            for day in Day::ALL {
                                ui.selectable_value(&mut state.day, Some(day), day.label());
                            }
                        });
                    ui.end_row();

                    ui.label("Period:");
                    egui::ComboBox::from_id_source("record_dialog_period")
                        .width(180.0)
                        .selected_text(state.period.map_or("Select...", Period::label))
                        .show_ui(ui, |ui| {
                            for period in Period::ALL {
                                ui.selectable_value(
                                    &mut state.period,
                                    Some(period),
                                    period.label(),
                                );
                            }
                        });
                    ui.end_row();

                    if state.kind.takes_text() {
                        ui.label("Booking:");
                        ui.add(
                            egui::TextEdit::singleline(&mut state.text)
                                .hint_text("Class, teacher or note")
                                .desired_width(180.0),
                        );
                        ui.end_row();
                    } else {
                        ui.label("Current:");
                        match state.selected_key().map(|key| grid.get(key)) {
                            Some(text) if !text.is_empty() => {
                                ui.label(RichText::new(text).strong());
                            }
                            Some(_) => {
                                ui.label(RichText::new("(free)").weak());
                            }
                            None => {
                                ui.label("");
                            }
                        }
                        ui.end_row();
                    }
                });

            let validation = state.validate();
            if let Err(error) = &validation {
                ui.add_space(5.0);
                ui.colored_label(ui.visuals().warn_fg_color, error.to_string());
            }

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.add_enabled_ui(validation.is_ok(), |ui| {
                    if ui.button(state.kind.confirm_text()).clicked() {
                        if let Ok(confirmed) = state.confirm() {
                            result = confirmed;
                        }
                    }
                });

                ui.add_space(5.0);

                if ui.button("Cancel").clicked() {
                    result = RecordDialogResult::Cancelled;
                }
            });
        });

    if !open {
        result = RecordDialogResult::Cancelled;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_selection_cannot_be_confirmed() {
        let mut state = RecordDialogState::new(RecordDialogKind::Add);
        state.text = "Alice".to_string();
        assert_eq!(state.confirm(), Err(DraftError::MissingDayAndPeriod));

        state.period = Some(Period::Lesson2);
        assert_eq!(state.confirm(), Err(DraftError::MissingDay));

        state.period = None;
        state.day = Some(Day::Monday);
        assert_eq!(state.confirm(), Err(DraftError::MissingPeriod));
    }

    #[test]
    fn add_confirms_with_text() {
        let key = BookingKey::new(Day::Monday, Period::Lesson1);
        let mut state = RecordDialogState::for_slot(RecordDialogKind::Add, key);
        state.text = "Alice".to_string();

        assert_eq!(
            state.confirm(),
            Ok(RecordDialogResult::Save {
                key,
                text: "Alice".to_string()
            })
        );
    }

    #[test]
    fn add_does_not_prefill() {
        let key = BookingKey::new(Day::Monday, Period::Lesson1);
        let mut grid = BookingGrid::new();
        grid.set(key, "Existing");

        let mut state = RecordDialogState::for_slot(RecordDialogKind::Add, key);
        state.sync_prefill(&grid);
        assert_eq!(state.text, "");
    }

    #[test]
    fn edit_prefills_and_follows_selection() {
        let first = BookingKey::new(Day::Tuesday, Period::Rest);
        let second = BookingKey::new(Day::Tuesday, Period::Eca);
        let mut grid = BookingGrid::new();
        grid.set(first, "Library");
        grid.set(second, "Drama");

        let mut state = RecordDialogState::new(RecordDialogKind::Edit);
        state.sync_prefill(&grid);
        assert_eq!(state.text, "");

        state.day = Some(Day::Tuesday);
        state.period = Some(Period::Rest);
        state.sync_prefill(&grid);
        assert_eq!(state.text, "Library");

        state.period = Some(Period::Eca);
        state.sync_prefill(&grid);
        assert_eq!(state.text, "Drama");

        state.text.push_str(" (2 iPads)");
        state.sync_prefill(&grid);
        assert_eq!(state.text, "Drama (2 iPads)");

        state.period = Some(Period::Rest);
        state.sync_prefill(&grid);
        assert_eq!(state.text, "Drama (2 iPads)");
    }

    #[test]
    fn edit_keeps_text_typed_before_slot_is_chosen() {
        let key = BookingKey::new(Day::Thursday, Period::Lesson5);
        let mut grid = BookingGrid::new();
        grid.set(key, "Year 4");

        let mut state = RecordDialogState::new(RecordDialogKind::Edit);
        state.text = "Year 4 and 5".to_string();
        state.day = Some(Day::Thursday);
        state.sync_prefill(&grid);
        state.period = Some(Period::Lesson5);
        state.sync_prefill(&grid);

        assert_eq!(state.text, "Year 4 and 5");
        assert_eq!(
            state.confirm(),
            Ok(RecordDialogResult::Save {
                key,
                text: "Year 4 and 5".to_string()
            })
        );
    }

    #[test]
    fn delete_confirms_as_clear() {
        let key = BookingKey::new(Day::Friday, Period::LunchTime);
        let state = RecordDialogState::for_slot(RecordDialogKind::Delete, key);
        assert_eq!(state.confirm(), Ok(RecordDialogResult::Clear { key }));
        assert_eq!(RecordDialogKind::Delete.confirm_text(), "Delete");
    }
}
