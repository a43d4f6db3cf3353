//! Navigation triggers and keyboard shortcuts.
//!
//! Triggers are stateless: they take the current mode and anchor and return
//! the new anchor. The calendar instance applies the result.

use chrono::{Duration, NaiveDateTime};

use crate::models::view::{Direction, ViewMode};
use crate::utils::date::{shift_months, shift_years};

/// Move the anchor one unit of the mode's granularity.
///
/// Month and year steps keep the day of month where the target month has it
/// and clamp to the month's last day otherwise. Time of day is untouched.
/// A step past the representable date range leaves the anchor where it is.
pub fn navigate(mode: ViewMode, anchor: NaiveDateTime, direction: Direction) -> NaiveDateTime {
    let sign = match direction {
        Direction::Next => 1,
        Direction::Prev => -1,
    };

    match mode {
        ViewMode::Day => anchor
            .checked_add_signed(Duration::days(sign as i64))
            .unwrap_or(anchor),
        ViewMode::Week => anchor
            .checked_add_signed(Duration::weeks(sign as i64))
            .unwrap_or(anchor),
        ViewMode::Month => shift_months(anchor.date(), sign).and_time(anchor.time()),
        ViewMode::Year => shift_years(anchor.date(), sign).and_time(anchor.time()),
    }
}

/// The today trigger ignores the current mode.
pub fn today(_mode: ViewMode, today: NaiveDateTime) -> NaiveDateTime {
    today
}

/// Keyboard shortcuts understood by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hotkey {
    ArrowLeft,
    ArrowRight,
    Char(char),
}

/// What a hotkey asks the calendar to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    Navigate(Direction),
    Today,
    SetMode(ViewMode),
}

impl Hotkey {
    /// Map a key to its action; unbound keys map to `None`.
    pub fn action(self) -> Option<HotkeyAction> {
        match self {
            Hotkey::ArrowLeft => Some(HotkeyAction::Navigate(Direction::Prev)),
            Hotkey::ArrowRight => Some(HotkeyAction::Navigate(Direction::Next)),
            Hotkey::Char(c) => match c.to_ascii_lowercase() {
                't' => Some(HotkeyAction::Today),
                'd' => Some(HotkeyAction::SetMode(ViewMode::Day)),
                'w' => Some(HotkeyAction::SetMode(ViewMode::Week)),
                'm' => Some(HotkeyAction::SetMode(ViewMode::Month)),
                'y' => Some(HotkeyAction::SetMode(ViewMode::Year)),
                _ => None,
            },
        }
    }
}
