//! Filtered, lazy reads over the event store.
//!
//! An event belongs to a day, hour or range by its start time only, matching
//! how the views bucket events into cells.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;

use super::EventStore;
use crate::models::event::CalendarEvent;
use crate::utils::date::{at_hour, start_of_day};

/// Half-open `[from, to)` window on the wall-clock timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl TimeRange {
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self { from, to }
    }

    pub fn day(date: NaiveDate) -> Self {
        let from = start_of_day(date);
        Self::new(from, from + Duration::days(1))
    }

    pub fn hour(date: NaiveDate, hour: u32) -> Self {
        let from = at_hour(date, hour);
        Self::new(from, from + Duration::hours(1))
    }

    /// `days` whole days starting at `first`.
    pub fn days(first: NaiveDate, days: i64) -> Self {
        let from = start_of_day(first);
        Self::new(from, from + Duration::days(days))
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.from <= instant && instant < self.to
    }
}

impl EventStore {
    /// Events owned by one of `owner_ids` whose start falls in `range`.
    ///
    /// The iterator borrows the store; nothing is copied until the caller
    /// collects.
    pub fn filter_by_owners_and_range<'a>(
        &'a self,
        owner_ids: &'a BTreeSet<String>,
        range: TimeRange,
    ) -> impl Iterator<Item = &'a CalendarEvent> + 'a {
        self.events()
            .iter()
            .filter(move |event| owner_ids.contains(&event.owner_id) && range.contains(event.start))
    }

    pub fn for_hour<'a>(
        &'a self,
        owner_ids: &'a BTreeSet<String>,
        date: NaiveDate,
        hour: u32,
    ) -> impl Iterator<Item = &'a CalendarEvent> + 'a {
        self.filter_by_owners_and_range(owner_ids, TimeRange::hour(date, hour))
    }

    pub fn for_day<'a>(
        &'a self,
        owner_ids: &'a BTreeSet<String>,
        date: NaiveDate,
    ) -> impl Iterator<Item = &'a CalendarEvent> + 'a {
        self.filter_by_owners_and_range(owner_ids, TimeRange::day(date))
    }
}
