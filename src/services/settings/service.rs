use crate::models::settings::Settings;
use anyhow::{Context, Result};
#[cfg(not(debug_assertions))]
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "booking.toml";

/// Reads the TOML settings file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        Ok(settings)
    }
}

pub fn resolve_config_path() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    #[cfg(not(debug_assertions))]
    {
        if let Some(proj_dirs) = ProjectDirs::from("com", "SchoolTools", "IpadBooking") {
            proj_dirs.config_dir().join(CONFIG_FILE_NAME)
        } else {
            PathBuf::from(CONFIG_FILE_NAME)
        }
    }
}

/// Directory that relative data and export paths are resolved against.
pub fn default_base_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(".")
    }

    #[cfg(not(debug_assertions))]
    {
        if let Some(proj_dirs) = ProjectDirs::from("com", "SchoolTools", "IpadBooking") {
            let data_dir = proj_dirs.data_dir();
            if let Err(e) = fs::create_dir_all(data_dir) {
                log::warn!("Failed to create data directory {}: {}", data_dir.display(), e);
            }
            data_dir.to_path_buf()
        } else {
            log::warn!("Unable to resolve project directory; using current dir for bookings");
            PathBuf::from(".")
        }
    }
}
