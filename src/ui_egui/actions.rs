//! Intents collected while a frame is drawn and applied once it is done.
//!
//! Views only read the calendar; anything that changes it is pushed as a
//! [`CalendarAction`] and applied in order by [`apply_actions`].

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::view::{Direction, ViewMode};
use crate::services::calendar::Calendar;
use crate::services::drag::{DropOutcome, DropTarget};
use crate::services::navigation::Hotkey;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalendarAction {
    Navigate(Direction),
    Today,
    SetMode(ViewMode),
    SetAnchor(NaiveDateTime),
    ToggleOwner(String),
    Hotkey(Hotkey),
    ClickEvent(String),
    ActivateSlot { date: NaiveDate, hour: Option<u32> },
    BeginDrag(String),
    Drop(Option<DropTarget>),
    CancelDrag,
}

pub fn apply_actions(calendar: &mut Calendar, actions: Vec<CalendarAction>) {
    for action in actions {
        apply_action(calendar, action);
    }
}

pub fn apply_action(calendar: &mut Calendar, action: CalendarAction) {
    match action {
        CalendarAction::Navigate(direction) => calendar.navigate(direction),
        CalendarAction::Today => calendar.jump_to_today(),
        CalendarAction::SetMode(mode) => calendar.set_mode(mode),
        CalendarAction::SetAnchor(anchor) => calendar.set_anchor(anchor),
        CalendarAction::ToggleOwner(id) => calendar.toggle_owner(&id),
        CalendarAction::Hotkey(key) => {
            calendar.handle_hotkey(key);
        }
        CalendarAction::ClickEvent(id) => calendar.click_event(&id),
        CalendarAction::ActivateSlot { date, hour } => calendar.activate_slot(date, hour),
        CalendarAction::BeginDrag(id) => {
            calendar.begin_drag(&id);
        }
        CalendarAction::Drop(target) => {
            if let DropOutcome::Moved(changed) = calendar.drop(target) {
                log::debug!("Drop changed {} event(s)", changed.len());
            }
        }
        CalendarAction::CancelDrag => calendar.cancel_drag(),
    }
}
