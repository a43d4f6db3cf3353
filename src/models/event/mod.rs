// Event module
// Scheduling event owned by a person, placed on the wall-clock timeline

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};
use crate::models::color::ColorTag;

/// A scheduled event belonging to one owner.
///
/// Times are naive wall-clock values; the widget does no timezone handling of
/// its own. Constructing the struct directly skips validation, mirroring how
/// embedders hand over event lists wholesale. Use [`CalendarEvent::new`] or the
/// builder for checked construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub title: String,
    #[serde(alias = "person_id")]
    pub owner_id: String,
    #[serde(default)]
    pub color: Option<ColorTag>,
}

impl CalendarEvent {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use team_calendar::models::event::CalendarEvent;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap().and_hms_opt(10, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = CalendarEvent::new("1", "Check-up", "d1", start, end).unwrap();
    /// assert_eq!(event.duration(), chrono::Duration::hours(1));
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        owner_id: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self> {
        let event = Self {
            id: id.into(),
            start,
            end,
            title: title.into(),
            owner_id: owner_id.into(),
            color: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CalendarError::EmptyEventId);
        }

        if self.end <= self.start {
            return Err(CalendarError::InvalidInterval {
                id: self.id.clone(),
            });
        }

        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Calendar date the event starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Half-open interval overlap test. Adjacent events do not overlap.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start < end && start < self.end
    }

    /// Same event moved so it starts at `start`, keeping its duration.
    /// `None` when the new end falls outside the representable range.
    pub fn moved_to(&self, start: NaiveDateTime) -> Option<Self> {
        let end = start.checked_add_signed(self.duration())?;
        Some(Self {
            start,
            end,
            ..self.clone()
        })
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    owner_id: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    color: Option<ColorTag>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the end relative to the start. Has no effect until a start is set.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.end = self.start.map(|start| start + duration);
        self
    }

    pub fn color(mut self, color: ColorTag) -> Self {
        self.color = Some(color);
        self
    }

    /// Build the event
    pub fn build(self) -> Result<CalendarEvent> {
        let id = self.id.ok_or(CalendarError::MissingField("id"))?;
        let owner_id = self.owner_id.ok_or(CalendarError::MissingField("owner_id"))?;
        let start = self.start.ok_or(CalendarError::MissingField("start"))?;
        let end = self.end.ok_or(CalendarError::MissingField("end"))?;

        let event = CalendarEvent {
            id,
            start,
            end,
            title: self.title.unwrap_or_default(),
            owner_id,
            color: self.color,
        };

        event.validate()?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_new_event_success() {
        let event = CalendarEvent::new("1", "Meeting", "d1", at(10, 0), at(11, 0)).unwrap();

        assert_eq!(event.title, "Meeting");
        assert_eq!(event.owner_id, "d1");
        assert!(event.color.is_none());
        assert_eq!(event.duration(), Duration::hours(1));
    }

    #[test]
    fn test_new_event_invalid_times() {
        let result = CalendarEvent::new("1", "Meeting", "d1", at(11, 0), at(10, 0));
        assert_eq!(
            result.unwrap_err(),
            CalendarError::InvalidInterval { id: "1".to_string() }
        );
    }

    #[test]
    fn test_new_event_equal_times() {
        assert!(CalendarEvent::new("1", "Meeting", "d1", at(10, 0), at(10, 0)).is_err());
    }

    #[test]
    fn test_new_event_blank_id() {
        let result = CalendarEvent::new("  ", "Meeting", "d1", at(10, 0), at(11, 0));
        assert_eq!(result.unwrap_err(), CalendarError::EmptyEventId);
    }

    #[test]
    fn test_builder_with_duration() {
        let event = CalendarEvent::builder()
            .id("7")
            .title("Consult")
            .owner("d2")
            .start(at(9, 30))
            .duration(Duration::minutes(45))
            .color(ColorTag::Blue)
            .build()
            .unwrap();

        assert_eq!(event.end, at(10, 15));
        assert_eq!(event.color, Some(ColorTag::Blue));
    }

    #[test]
    fn test_builder_missing_owner() {
        let result = CalendarEvent::builder()
            .id("7")
            .start(at(9, 0))
            .end(at(10, 0))
            .build();
        assert_eq!(result.unwrap_err(), CalendarError::MissingField("owner_id"));
    }

    #[test]
    fn test_overlaps_excludes_adjacent() {
        let event = CalendarEvent::new("1", "A", "d1", at(10, 0), at(11, 0)).unwrap();

        assert!(event.overlaps(at(10, 30), at(11, 30)));
        assert!(event.overlaps(at(9, 0), at(12, 0)));
        assert!(!event.overlaps(at(11, 0), at(12, 0)));
        assert!(!event.overlaps(at(9, 0), at(10, 0)));
    }

    #[test]
    fn test_moved_to_keeps_duration() {
        let event = CalendarEvent::new("1", "A", "d1", at(10, 15), at(11, 40)).unwrap();
        let moved = event.moved_to(at(14, 0)).unwrap();

        assert_eq!(moved.start, at(14, 0));
        assert_eq!(moved.end, at(15, 25));
        assert_eq!(moved.id, event.id);
    }

    #[test]
    fn test_moved_to_past_last_date_is_none() {
        let event = CalendarEvent::new("1", "A", "d1", at(10, 0), at(12, 0)).unwrap();
        let last = NaiveDate::MAX.and_hms_opt(23, 0, 0).unwrap();

        assert!(event.moved_to(last).is_none());
    }

    #[test]
    fn test_deserialize_person_id_alias() {
        let json = r#"{
            "id": "1",
            "start": "2025-01-15T10:00:00",
            "end": "2025-01-15T11:00:00",
            "title": "Check-up",
            "person_id": "d1",
            "color": "pink"
        }"#;
        let event: CalendarEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.owner_id, "d1");
        assert_eq!(event.color, Some(ColorTag::Pink));
        assert_eq!(event.start, at(10, 0));
    }
}
