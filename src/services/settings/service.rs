use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CalendarError;
use crate::models::settings::CalendarOptions;

pub const CONFIG_FILE_NAME: &str = "calendar.toml";

/// Reads and writes [`CalendarOptions`] as TOML.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the per-user config file, if a home directory is known.
    pub fn with_default_path() -> Option<Self> {
        Self::default_path().map(Self::new)
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "KenBoyle", "TeamCalendar")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load options. A missing file yields the defaults.
    pub fn load(&self) -> Result<CalendarOptions> {
        if !self.path.exists() {
            log::info!(
                "No config at {}, using default options",
                self.path.display()
            );
            return Ok(CalendarOptions::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let options: CalendarOptions = toml::from_str(&raw)
            .map_err(|e| CalendarError::Config(e.to_string()))
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        options
            .validate()
            .map_err(|e| anyhow!("Invalid options in {}: {}", self.path.display(), e))?;

        log::debug!(
            "Loaded {} people and {} events from {}",
            options.people.len(),
            options.events.len(),
            self.path.display()
        );
        Ok(options)
    }

    /// Validate and write options, creating the parent directory if needed.
    pub fn save(&self, options: &CalendarOptions) -> Result<()> {
        options
            .validate()
            .map_err(|e| anyhow!("Invalid options: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let raw = toml::to_string_pretty(options).context("Failed to serialize options")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// Load options, falling back to defaults on any error.
pub fn load_or_default(service: &SettingsService) -> CalendarOptions {
    match service.load() {
        Ok(options) => options,
        Err(e) => {
            log::warn!("Failed to load options: {:#}, using defaults", e);
            CalendarOptions::default()
        }
    }
}
