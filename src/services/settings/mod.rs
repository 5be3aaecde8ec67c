mod service;

pub use service::{default_base_dir, resolve_config_path, SettingsService, CONFIG_FILE_NAME};
