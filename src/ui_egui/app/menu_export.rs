use super::BookingApp;
use std::path::Path;

/// Report export actions.
impl BookingApp {
    pub(super) fn export_to_default_file(&mut self) {
        let path = self.settings.export_file.clone();
        self.export_report_to(&path);
    }

    pub(super) fn export_as(&mut self) {
        let file_name = self
            .settings
            .export_file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ipad_bookings.txt".to_string());

        if let Some(path) = rfd::FileDialog::new()
            .set_title("Export Bookings")
            .set_file_name(file_name)
            .add_filter("Text files", &["txt"])
            .save_file()
        {
            self.export_report_to(&path);
        }
    }

    fn export_report_to(&mut self, path: &Path) {
        match self.service.export_to(path) {
            Ok(()) => {
                self.toast_manager
                    .success(format!("Exported schedule to {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to export bookings: {:#}", e);
                self.toast_manager.error(format!("Export failed: {:#}", e));
            }
        }
    }
}
