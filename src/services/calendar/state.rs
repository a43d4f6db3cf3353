//! View state machine: mode, anchor date and owner filter.

use chrono::NaiveDateTime;

use crate::models::view::{Direction, ViewMode};
use crate::services::filter::PersonFilter;
use crate::services::navigation;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub anchor: NaiveDateTime,
    pub filter: PersonFilter,
}

impl ViewState {
    pub fn new(mode: ViewMode, anchor: NaiveDateTime, filter: PersonFilter) -> Self {
        Self {
            mode,
            anchor,
            filter,
        }
    }

    /// Unconditional mode switch. Returns the previous mode.
    pub fn set_mode(&mut self, mode: ViewMode) -> ViewMode {
        std::mem::replace(&mut self.mode, mode)
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.anchor = navigation::navigate(self.mode, self.anchor, direction);
    }

    pub fn jump_to(&mut self, anchor: NaiveDateTime) {
        self.anchor = anchor;
    }
}
