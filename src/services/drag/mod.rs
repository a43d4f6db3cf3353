//! Drag-to-reschedule engine.
//!
//! A drag starts on an event, ends on a drop target (an hour cell in the day
//! view, a day/hour cell in the week view, a date cell in the month view) and
//! commits at most one store update. Anything malformed about the gesture
//! cancels it without touching the store.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::models::event::CalendarEvent;
use crate::models::settings::{CascadeMode, MinutePolicy};
use crate::services::event::EventStore;
use crate::utils::date::{at_hour, is_same_day, is_same_hour, start_of_day};

mod cascade;

pub use cascade::resolve_collisions;

/// Cell under the pointer when a drag ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Day view hour cell; the event stays on its own day.
    Hour { hour: u32 },
    /// Week view cell.
    DayHour { date: NaiveDate, hour: u32 },
    /// Month view date cell; time of day is kept.
    Date { date: NaiveDate },
}

impl DropTarget {
    fn hour(&self) -> Option<u32> {
        match self {
            DropTarget::Hour { hour } | DropTarget::DayHour { hour, .. } => Some(*hour),
            DropTarget::Date { .. } => None,
        }
    }
}

/// Identity and original interval of the event being dragged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragContext {
    pub event_id: String,
    pub original_start: NaiveDateTime,
    pub original_end: NaiveDateTime,
}

impl DragContext {
    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            event_id: event.id.clone(),
            original_start: event.start,
            original_end: event.end,
        }
    }

    pub fn duration(&self) -> Duration {
        self.original_end - self.original_start
    }

    /// Whether dropping on `target` would leave the event where it is.
    pub fn is_same_slot(&self, target: DropTarget) -> bool {
        let start = self.original_start;
        match target {
            DropTarget::Hour { hour } => {
                hour < 24 && is_same_hour(start, at_hour(start.date(), hour))
            }
            DropTarget::DayHour { date, hour } => {
                hour < 24 && is_same_hour(start, at_hour(date, hour))
            }
            DropTarget::Date { date } => is_same_day(start, start_of_day(date)),
        }
    }

    /// Candidate start for a drop, or `None` for an out-of-range hour.
    pub fn target_start(&self, target: DropTarget, policy: MinutePolicy) -> Option<NaiveDateTime> {
        let original = self.original_start;
        let date = match target {
            DropTarget::Hour { .. } => original.date(),
            DropTarget::DayHour { date, .. } | DropTarget::Date { date } => date,
        };

        let time = match target.hour() {
            None => original.time(),
            Some(hour) => match policy {
                MinutePolicy::Preserve => original.time().with_hour(hour)?,
                MinutePolicy::SnapToHour => NaiveTime::from_hms_opt(hour, 0, 0)?,
            },
        };

        Some(date.and_time(time))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragContext),
}

/// Result of ending a drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing was dragged, the target was missing or invalid, or the event
    /// no longer exists.
    Cancelled,
    /// Dropped back onto its own slot.
    Unchanged,
    /// The store was updated; the dragged event comes first, then every
    /// pushed event in store order.
    Moved(Vec<CalendarEvent>),
}

#[derive(Debug, Default)]
pub struct DragEngine {
    state: DragState,
    minute_policy: MinutePolicy,
    cascade_mode: CascadeMode,
}

impl DragEngine {
    pub fn new(minute_policy: MinutePolicy, cascade_mode: CascadeMode) -> Self {
        Self {
            state: DragState::Idle,
            minute_policy,
            cascade_mode,
        }
    }

    /// Start dragging `event`. A drag already in progress is abandoned.
    pub fn begin(&mut self, event: &CalendarEvent) {
        if let DragState::Dragging(previous) = &self.state {
            log::debug!("Abandoning drag of {} for {}", previous.event_id, event.id);
        }
        self.state = DragState::Dragging(DragContext::from_event(event));
    }

    pub fn active(&self) -> Option<&DragContext> {
        match &self.state {
            DragState::Dragging(context) => Some(context),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active().is_some()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// End the drag on `target` and commit the move to `store`.
    ///
    /// The engine is back to idle whatever the outcome.
    pub fn drop(&mut self, target: Option<DropTarget>, store: &mut EventStore) -> DropOutcome {
        let context = match std::mem::take(&mut self.state) {
            DragState::Dragging(context) => context,
            DragState::Idle => {
                log::debug!("Drop without an active drag ignored");
                return DropOutcome::Cancelled;
            }
        };

        let Some(target) = target else {
            log::debug!("Drag of {} cancelled: no drop target", context.event_id);
            return DropOutcome::Cancelled;
        };

        if store.get(&context.event_id).is_none() {
            log::debug!("Drag of {} cancelled: event no longer exists", context.event_id);
            return DropOutcome::Cancelled;
        }

        if target.hour().is_some_and(|hour| hour > 23) {
            log::debug!("Drag of {} cancelled: invalid target {:?}", context.event_id, target);
            return DropOutcome::Cancelled;
        }

        if context.is_same_slot(target) {
            return DropOutcome::Unchanged;
        }

        let Some(new_start) = context.target_start(target, self.minute_policy) else {
            return DropOutcome::Cancelled;
        };
        let Some(new_end) = new_start.checked_add_signed(context.duration()) else {
            log::debug!(
                "Drag of {} cancelled: {} leaves the calendar range",
                context.event_id,
                new_start
            );
            return DropOutcome::Cancelled;
        };

        let (events, changed) = resolve_collisions(
            store.events(),
            &context.event_id,
            new_start,
            new_end,
            self.cascade_mode,
        );

        log::info!(
            "Moved event {} to {} ({} pushed)",
            context.event_id,
            new_start,
            changed.len().saturating_sub(1)
        );
        store.replace_all(events);
        DropOutcome::Moved(changed)
    }
}
