//! In-memory event store.
//!
//! The store holds the events of one calendar instance in embedder order. It
//! is only ever mutated by whole-list replacement so a drag commit, however
//! many events it touches, is a single update. Filtered reads live in
//! [`queries`].

use std::collections::HashSet;

use crate::models::event::CalendarEvent;
use crate::models::person::Person;

pub mod queries;

pub use queries::TimeRange;

/// Ordered collection of calendar events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
}

impl EventStore {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }

    /// Swap the whole event list. There are no merge semantics: callers hand
    /// over the full desired list.
    pub fn replace_all(&mut self, events: Vec<CalendarEvent>) {
        log::debug!("Replacing event store contents ({} events)", events.len());
        self.events = events;
    }

    /// Log invariant violations without rejecting anything.
    ///
    /// Events ending at or before their start and events owned by people
    /// missing from the roster are tolerated, as embedders may hand over
    /// partial data.
    pub fn audit(&self, people: &[Person]) {
        let known: HashSet<&str> = people.iter().map(|p| p.id.as_str()).collect();
        for event in &self.events {
            if event.end <= event.start {
                log::warn!("Event {} ends at or before its start", event.id);
            }
            if !known.is_empty() && !known.contains(event.owner_id.as_str()) {
                log::warn!(
                    "Event {} references unknown owner {}",
                    event.id,
                    event.owner_id
                );
            }
        }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
