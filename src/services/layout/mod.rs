//! Time-slot layout for the day and week grids.
//!
//! Offsets are in layout units relative to the top of a 24-hour column whose
//! rows are `hour_height` tall. Month and year cells get no vertical layout;
//! their events are listed as fixed-height row markers in start order.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::models::event::CalendarEvent;
use crate::services::drag::DropTarget;

pub const HOURS_PER_DAY: u32 = 24;

/// Vertical placement of an event block within a day column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    pub top: f32,
    pub height: f32,
}

impl SlotLayout {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Offset of a wall-clock time within its day column.
pub fn time_offset(instant: NaiveDateTime, hour_height: f32) -> f32 {
    let hour = instant.hour() as f32;
    let minute = instant.minute() as f32;
    hour * hour_height + (minute / 60.0) * hour_height
}

/// Place an event: top from its start hour and minute, height from its
/// duration in minutes.
pub fn event_slot(event: &CalendarEvent, hour_height: f32) -> SlotLayout {
    let duration_minutes = event.duration().num_minutes() as f32;
    SlotLayout {
        top: time_offset(event.start, hour_height),
        height: (duration_minutes / 60.0) * hour_height,
    }
}

/// Height of a full 24-hour column.
pub fn column_height(hour_height: f32) -> f32 {
    HOURS_PER_DAY as f32 * hour_height
}

/// Hour row under a vertical offset, or `None` outside the column.
pub fn hour_at_offset(y: f32, hour_height: f32) -> Option<u32> {
    if !is_positive(hour_height) || !is_non_negative(y) {
        return None;
    }
    let hour = (y / hour_height).floor() as u32;
    (hour < HOURS_PER_DAY).then_some(hour)
}

/// Position of the current-time line, only on the column showing today.
pub fn now_indicator_offset(now: NaiveDateTime, column_date: NaiveDate, hour_height: f32) -> Option<f32> {
    (now.date() == column_date).then(|| time_offset(now, hour_height))
}

/// Events starting on `date`, as row markers in start order.
///
/// Events sharing a start keep their incoming order.
pub fn day_markers<'a, I>(events: I, date: NaiveDate) -> Vec<&'a CalendarEvent>
where
    I: IntoIterator<Item = &'a CalendarEvent>,
{
    let mut markers: Vec<&CalendarEvent> = events
        .into_iter()
        .filter(|event| event.start.date() == date)
        .collect();
    markers.sort_by_key(|event| event.start);
    markers
}

/// Whether a Sunday-first grid cell index falls on a weekend column.
pub fn cell_is_weekend(index: usize) -> bool {
    matches!(index % 7, 0 | 6)
}

/// Map a pointer over the day grid to a drop target.
///
/// `y` is relative to the top of the hour column.
pub fn day_drop_target(y: f32, hour_height: f32) -> Option<DropTarget> {
    hour_at_offset(y, hour_height).map(|hour| DropTarget::Hour { hour })
}

/// Map a pointer over the week grid to a drop target.
///
/// `x` and `y` are relative to the top-left of the first day column; `days`
/// are the column dates in display order.
pub fn week_drop_target(
    days: &[NaiveDate],
    x: f32,
    y: f32,
    column_width: f32,
    hour_height: f32,
) -> Option<DropTarget> {
    let column = column_at(x, column_width, days.len())?;
    let hour = hour_at_offset(y, hour_height)?;
    Some(DropTarget::DayHour {
        date: days[column],
        hour,
    })
}

/// Map a pointer over the month grid to a drop target.
pub fn month_drop_target(
    cells: &[NaiveDate],
    x: f32,
    y: f32,
    cell_width: f32,
    cell_height: f32,
) -> Option<DropTarget> {
    let column = column_at(x, cell_width, 7)?;
    if !is_positive(cell_height) || !is_non_negative(y) {
        return None;
    }
    let row = (y / cell_height).floor() as usize;
    cells
        .get(row * 7 + column)
        .map(|date| DropTarget::Date { date: *date })
}

fn column_at(x: f32, column_width: f32, columns: usize) -> Option<usize> {
    if !is_positive(column_width) || !is_non_negative(x) {
        return None;
    }
    let column = (x / column_width).floor() as usize;
    (column < columns).then_some(column)
}

// NaN fails both checks
fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
