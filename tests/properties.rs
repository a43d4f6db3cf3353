// Property-based tests for grids, navigation, drag and filtering

mod fixtures;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;

use team_calendar::models::event::CalendarEvent;
use team_calendar::models::settings::{CalendarOptions, MinutePolicy};
use team_calendar::models::view::{Direction, ViewMode};
use team_calendar::services::calendar::{Calendar, NoopObserver};
use team_calendar::services::drag::{DropOutcome, DropTarget};
use team_calendar::services::navigation::navigate;
use team_calendar::utils::date::{month_grid, MONTH_GRID_CELLS};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1990..2100i32, 1..=12u32, 1..=31u32)
        .prop_filter_map("valid date", |(year, month, day)| NaiveDate::from_ymd_opt(year, month, day))
}

fn any_mode() -> impl Strategy<Value = ViewMode> {
    prop::sample::select(ViewMode::ALL.to_vec())
}

fn any_target() -> impl Strategy<Value = DropTarget> {
    prop_oneof![
        (0..24u32).prop_map(|hour| DropTarget::Hour { hour }),
        (1..=28u32, 0..24u32).prop_map(|(day, hour)| DropTarget::DayHour {
            date: NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
            hour,
        }),
        (1..=28u32).prop_map(|day| DropTarget::Date {
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
        }),
    ]
}

proptest! {
    /// The month grid is 42 consecutive days from a Sunday, covering the month
    #[test]
    fn prop_month_grid_complete(date in any_date()) {
        let grid = month_grid(date);

        prop_assert_eq!(grid.len(), MONTH_GRID_CELLS);
        prop_assert_eq!(grid[0].weekday(), Weekday::Sun);
        for pair in grid.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        let mut day = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap();
        while day.month() == date.month() {
            prop_assert!(grid.contains(&day));
            day = day.succ_opt().unwrap();
        }
    }

    /// Day and week navigation always round-trips
    #[test]
    fn prop_day_week_navigation_round_trip(date in any_date(), hour in 0..24u32, week in any::<bool>()) {
        let mode = if week { ViewMode::Week } else { ViewMode::Day };
        let anchor = date.and_hms_opt(hour, 0, 0).unwrap();
        let there = navigate(mode, anchor, Direction::Next);
        prop_assert_eq!(navigate(mode, there, Direction::Prev).date(), date);
    }

    /// Month and year navigation round-trips for days every month has.
    /// Later days clamp to a shorter month and cannot come back.
    #[test]
    fn prop_month_year_navigation_round_trip(
        year in 1990..2100i32,
        month in 1..=12u32,
        day in 1..=28u32,
        yearly in any::<bool>(),
    ) {
        let mode = if yearly { ViewMode::Year } else { ViewMode::Month };
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let anchor = date.and_hms_opt(9, 0, 0).unwrap();
        let there = navigate(mode, anchor, Direction::Next);
        prop_assert_eq!(navigate(mode, there, Direction::Prev).date(), date);
    }

    /// Every drop keeps the dragged event's duration exactly
    #[test]
    fn prop_drop_preserves_duration(
        hour in 0..24u32,
        minute in 0..60u32,
        minutes in 1..600i64,
        target in any_target(),
        snap in any::<bool>(),
    ) {
        let start = fixtures::dates::wednesday().and_hms_opt(hour, minute, 0).unwrap();
        let event = CalendarEvent::new("1", "Drag me", "d1", start, start + Duration::minutes(minutes)).unwrap();
        let options = CalendarOptions {
            minute_policy: if snap { MinutePolicy::SnapToHour } else { MinutePolicy::Preserve },
            ..fixtures::options(vec![event])
        };
        let mut calendar = Calendar::with_now(options, Box::new(NoopObserver), fixtures::dates::now());

        calendar.begin_drag("1");
        let outcome = calendar.drop(Some(target));

        let moved = &calendar.events()[0];
        prop_assert_eq!(moved.duration(), Duration::minutes(minutes));
        if let DropOutcome::Moved(changed) = outcome {
            prop_assert_eq!(changed[0].duration(), Duration::minutes(minutes));
        }
    }

    /// Toggling an owner off hides exactly that owner's events
    #[test]
    fn prop_filter_isolation(owners in prop::collection::vec(prop::bool::ANY, 1..12), mode in any_mode()) {
        let events: Vec<CalendarEvent> = owners
            .iter()
            .enumerate()
            .map(|(i, first)| {
                let owner = if *first { "d1" } else { "d2" };
                fixtures::events::event(&i.to_string(), owner, fixtures::dates::at(10, 0), 30)
            })
            .collect();
        let options = CalendarOptions {
            default_view: mode,
            ..fixtures::options(events.clone())
        };
        let mut calendar = Calendar::with_now(options, Box::new(NoopObserver), fixtures::dates::now());
        let date = fixtures::dates::wednesday();

        calendar.toggle_owner("d2");

        let visible: Vec<String> = calendar
            .visible_events_for_hour(date, 10)
            .into_iter()
            .map(|e| e.id.clone())
            .collect();
        let expected: Vec<String> = events
            .iter()
            .filter(|e| e.owner_id == "d1")
            .map(|e| e.id.clone())
            .collect();
        prop_assert_eq!(&visible, &expected);

        let markers: Vec<String> = calendar
            .visible_events_for_day(date)
            .into_iter()
            .map(|e| e.id.clone())
            .collect();
        prop_assert_eq!(&markers, &expected);
        prop_assert_eq!(calendar.events(), events.as_slice());
    }
}
