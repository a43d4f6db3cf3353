// Settings service module
// Loads calendar options from a TOML config file

mod service;

pub use service::{load_or_default, SettingsService, CONFIG_FILE_NAME};
