//! Notifications emitted to the embedding application.

use chrono::NaiveDateTime;

use crate::models::event::CalendarEvent;
use crate::models::view::ViewMode;

/// Callbacks fired by a calendar instance. Every method defaults to doing
/// nothing, so embedders implement only what they need.
pub trait CalendarObserver {
    /// An event block or marker was activated.
    fn on_event_click(&mut self, _event: &CalendarEvent) {}

    /// An empty slot or date cell was activated.
    fn on_add_appointment(&mut self, _at: NaiveDateTime) {}

    /// Fired once per event changed by a drag.
    fn on_update_event(&mut self, _event: &CalendarEvent) {}

    fn on_change_view(&mut self, _mode: ViewMode) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CalendarObserver for NoopObserver {}

/// Observer that logs each notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl CalendarObserver for LoggingObserver {
    fn on_event_click(&mut self, event: &CalendarEvent) {
        log::info!("Event clicked: {} ({})", event.title, event.id);
    }

    fn on_add_appointment(&mut self, at: NaiveDateTime) {
        log::info!("Add appointment requested at {}", at);
    }

    fn on_update_event(&mut self, event: &CalendarEvent) {
        log::info!("Event {} now {} - {}", event.id, event.start, event.end);
    }

    fn on_change_view(&mut self, mode: ViewMode) {
        log::info!("View changed to {}", mode);
    }
}
