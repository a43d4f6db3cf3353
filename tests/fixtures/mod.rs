// Test fixtures - reusable test data
// Provides a consistent roster, dates and events across integration tests

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use team_calendar::models::color::ColorTag;
use team_calendar::models::event::CalendarEvent;
use team_calendar::models::person::Person;
use team_calendar::models::settings::CalendarOptions;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday Jan 8, 2025
    pub fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 8).unwrap()
    }

    pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
        wednesday().and_hms_opt(hour, minute, 0).unwrap()
    }

    /// Construction time used as "now" by fixture calendars
    pub fn now() -> NaiveDateTime {
        at(8, 0)
    }
}

/// Sample people
pub mod people {
    use super::*;

    pub fn roster() -> Vec<Person> {
        vec![
            Person::new("d1", "Dr. Adams").with_color(ColorTag::Blue),
            Person::new("d2", "Dr. Baker"),
        ]
    }
}

/// Sample events
pub mod events {
    use super::*;

    pub fn event(id: &str, owner: &str, start: NaiveDateTime, minutes: i64) -> CalendarEvent {
        CalendarEvent::new(id, format!("Event {}", id), owner, start, start + Duration::minutes(minutes))
            .unwrap()
    }

    /// Event "1" for d1 from 10:00 to 11:00
    pub fn check_up() -> CalendarEvent {
        event("1", "d1", dates::at(10, 0), 60)
    }
}

/// Options with the sample roster, everyone selected, anchored on Wednesday
pub fn options(events: Vec<CalendarEvent>) -> CalendarOptions {
    CalendarOptions {
        default_date: Some(dates::now()),
        people: people::roster(),
        default_selected_person_ids: vec!["d1".to_string(), "d2".to_string()],
        events,
        ..CalendarOptions::default()
    }
}
