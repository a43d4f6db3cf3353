// Settings module
// Options recognised when constructing a calendar instance

use chrono::{Locale, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{CalendarError, Result};
use crate::models::event::CalendarEvent;
use crate::models::person::Person;
use crate::models::view::ViewMode;

/// Default height of one hour row in the day and week time grids.
pub const DEFAULT_HOUR_HEIGHT: f32 = 80.0;

/// How the minute of a dragged event is treated when it lands on an hour cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinutePolicy {
    /// Keep the original minute; only the hour (and day) change.
    #[default]
    Preserve,
    /// Land exactly on the hour.
    SnapToHour,
}

/// How far collisions are resolved after a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CascadeMode {
    /// Push events hit by the dropped event once. Pushed events are not
    /// re-checked, so they may end up overlapping a third event.
    #[default]
    SinglePass,
    /// Keep pushing until no event on the day overlaps a moved event.
    Settle,
}

/// Configuration surface of a calendar instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    /// Initial anchor date; `None` means "now" at construction.
    pub default_date: Option<NaiveDateTime>,
    pub default_view: ViewMode,
    pub events: Vec<CalendarEvent>,
    pub people: Vec<Person>,
    pub default_selected_person_ids: Vec<String>,
    pub enable_hotkeys: bool,
    /// POSIX-style locale name such as `en_US` or `de_DE`.
    pub locale: String,
    pub hour_height: f32,
    pub minute_policy: MinutePolicy,
    pub cascade_mode: CascadeMode,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            default_date: None,
            default_view: ViewMode::Month,
            events: Vec::new(),
            people: Vec::new(),
            default_selected_person_ids: Vec::new(),
            enable_hotkeys: true,
            locale: "en_US".to_string(),
            hour_height: DEFAULT_HOUR_HEIGHT,
            minute_policy: MinutePolicy::Preserve,
            cascade_mode: CascadeMode::SinglePass,
        }
    }
}

impl CalendarOptions {
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            people,
            ..Self::default()
        }
    }

    /// Resolve the configured locale name.
    pub fn chrono_locale(&self) -> Result<Locale> {
        parse_locale(&self.locale)
    }

    /// Check options that would otherwise be silently tolerated.
    ///
    /// Calendar construction never fails; this is for config loaders that want
    /// to report problems up front.
    pub fn validate(&self) -> Result<()> {
        self.chrono_locale()?;

        if !(self.hour_height.is_finite() && self.hour_height > 0.0) {
            return Err(CalendarError::InvalidOptions(format!(
                "hour_height must be positive, got {}",
                self.hour_height
            )));
        }

        let mut seen = HashSet::new();
        for person in &self.people {
            if !seen.insert(person.id.as_str()) {
                return Err(CalendarError::InvalidOptions(format!(
                    "duplicate person id {}",
                    person.id
                )));
            }
        }

        let mut seen = HashSet::new();
        for event in &self.events {
            event.validate()?;
            if !seen.insert(event.id.as_str()) {
                return Err(CalendarError::InvalidOptions(format!(
                    "duplicate event id {}",
                    event.id
                )));
            }
        }

        Ok(())
    }
}

/// Parse a locale name, accepting `en-US` as well as `en_US`.
pub fn parse_locale(name: &str) -> Result<Locale> {
    let normalized = name.trim().replace('-', "_");
    Locale::try_from(normalized.as_str()).map_err(|_| CalendarError::UnknownLocale(name.to_string()))
}
