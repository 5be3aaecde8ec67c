mod lifecycle;
mod menu;
mod menu_export;
mod menu_help;
mod shortcuts;
mod state;
mod status_bar;
mod toast;
mod views;

use self::state::AppState;
use self::toast::ToastManager;
use crate::models::booking::BookingKey;
use crate::models::settings::Settings;
use crate::services::booking::{BookingService, JsonBookingStore};
use crate::ui_egui::dialogs::record_dialog::{
    render_record_dialog, RecordDialogKind, RecordDialogResult, RecordDialogState,
};
use crate::ui_egui::theme::BookingTheme;
use chrono::NaiveDate;

pub struct BookingApp {
    /// Owns the booking grid and writes it through to disk
    service: BookingService<JsonBookingStore>,
    settings: Settings,
    /// Date shown by the calendar panel, captured at startup
    today: NaiveDate,
    /// Currently applied theme colors
    active_theme: BookingTheme,
    /// Dialog state
    state: AppState,
    toast_manager: ToastManager,
}

impl eframe::App for BookingApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}

impl BookingApp {
    fn open_record_dialog(&mut self, kind: RecordDialogKind, key: Option<BookingKey>) {
        if self.state.is_modal_open() {
            return;
        }
        // Pending in-grid edits go to disk before a dialog takes over
        self.persist_if_needed();
        self.state.record_dialog = Some(match key {
            Some(key) => RecordDialogState::for_slot(kind, key),
            None => RecordDialogState::new(kind),
        });
    }

    fn handle_record_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.state.record_dialog.as_mut() else {
            return;
        };

        match render_record_dialog(ctx, dialog, self.service.grid()) {
            RecordDialogResult::None => {}
            RecordDialogResult::Cancelled => {
                self.state.record_dialog = None;
            }
            RecordDialogResult::Save { key, text } => {
                self.state.record_dialog = None;
                match self.service.book(key, text) {
                    Ok(()) => self.toast_manager.success(format!("Saved booking for {}", key)),
                    Err(e) => {
                        log::error!("Failed to save booking for {}: {}", key, e);
                        self.toast_manager.error(format!("Booking not saved: {}", e));
                    }
                }
            }
            RecordDialogResult::Clear { key } => {
                self.state.record_dialog = None;
                match self.service.clear(key) {
                    Ok(()) => self.toast_manager.success(format!("Cleared {}", key)),
                    Err(e) => {
                        log::error!("Failed to save after clearing {}: {}", key, e);
                        self.toast_manager.error(format!("Change not saved: {}", e));
                    }
                }
            }
        }
    }

    fn save_now(&mut self) {
        match self.service.save() {
            Ok(()) => self.toast_manager.success("Bookings saved"),
            Err(e) => {
                log::error!("Failed to save bookings: {}", e);
                self.toast_manager.error(format!("Save failed: {}", e));
            }
        }
    }

    /// Save in-grid edits, if there are any.
    fn persist_if_needed(&mut self) {
        if let Err(e) = self.service.persist_if_dirty() {
            log::error!("Failed to persist bookings: {}", e);
            self.toast_manager.error(format!("Save failed: {}", e));
        }
    }
}
