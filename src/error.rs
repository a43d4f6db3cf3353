//! Error types for calendar construction and configuration.
//!
//! Gesture handling never produces these: malformed drags and clicks degrade
//! to silent no-ops. Only building events and loading options can fail.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CalendarError {
    #[error("Event id cannot be empty")]
    EmptyEventId,

    #[error("Event {id} must end after it starts")]
    InvalidInterval { id: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Malformed config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
