// Settings module
// Values read from booking.toml at startup

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "bookings.json";
pub const DEFAULT_EXPORT_FILE: &str = "ipad_bookings.txt";

/// Which egui visuals to start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    /// Follow the operating system preference
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where bookings are persisted
    pub data_file: PathBuf,
    /// Target of "Export to File"
    pub export_file: PathBuf,
    pub theme: ThemePreference,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
            theme: ThemePreference::default(),
        }
    }
}

impl Settings {
    /// Resolve relative paths against `base`. Absolute paths are kept.
    pub fn rooted_at(mut self, base: &std::path::Path) -> Self {
        if self.data_file.is_relative() {
            self.data_file = base.join(&self.data_file);
        }
        if self.export_file.is_relative() {
            self.export_file = base.join(&self.export_file);
        }
        self
    }
}
