use super::state::AppState;
use super::toast::ToastManager;
use super::BookingApp;
use crate::models::settings::Settings;
use crate::services::booking::{BookingService, JsonBookingStore, LoadReport};
use crate::services::settings::{default_base_dir, resolve_config_path, SettingsService};
use crate::ui_egui::theme::BookingTheme;
use chrono::Local;

impl BookingApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::new(resolve_config_path());
        let settings = load_settings_or_default(&settings_service).rooted_at(&default_base_dir());
        log::info!(
            "Using bookings file {} and report file {}",
            settings.data_file.display(),
            settings.export_file.display()
        );

        let store = JsonBookingStore::new(&settings.data_file);
        let (service, report) = BookingService::open(store);

        let mut toast_manager = ToastManager::new();
        announce_load_report(&report, &mut toast_manager);

        let active_theme = BookingTheme::for_preference(settings.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        Self {
            service,
            settings,
            today: Local::now().date_naive(),
            active_theme,
            state: AppState::new(),
            toast_manager,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        self.render_menu_bar(ctx);

        // Render status bar (before side and central panels so it takes bottom space)
        self.render_status_bar(ctx);
        self.render_calendar_panel(ctx);
        self.render_main_panel(ctx);

        self.handle_record_dialog(ctx);
        self.render_about_dialog(ctx);

        // Render toast notifications (last, so they appear on top)
        let is_dark = self.active_theme.is_dark;
        self.toast_manager.render(ctx, is_dark);
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.service.persist_if_dirty() {
            log::error!("Failed to save bookings on exit: {}", e);
        }
    }
}

fn load_settings_or_default(settings_service: &SettingsService) -> Settings {
    match settings_service.get() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!(
                "Failed to load settings from {}: {:#}, using defaults",
                settings_service.path().display(),
                e
            );
            Settings::default()
        }
    }
}

fn announce_load_report(report: &LoadReport, toasts: &mut ToastManager) {
    if let Some(error) = &report.load_error {
        match &report.quarantined {
            Some(moved) => toasts.warning(format!(
                "Bookings file was unreadable and has been moved to {}. Starting with an empty week.",
                moved.display()
            )),
            None => toasts.error(format!(
                "Could not load bookings: {}. The file will be set aside before anything is saved.",
                error
            )),
        }
    }

    if !report.skipped.is_empty() {
        toasts.warning(format!(
            "Ignored {} unrecognised booking entr{}",
            report.skipped.len(),
            if report.skipped.len() == 1 { "y" } else { "ies" }
        ));
    }

    if report.legacy_format {
        log::info!("Bookings file uses the old key format; it will be rewritten on the next save");
        toasts.info("Bookings file will be upgraded to the new format on the next save");
    }
}
