// Date utility functions
// Month grids, weekday labels and calendar-aware shifting

use chrono::{
    Datelike, Duration, Locale, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike,
    Utc, Weekday,
};

/// Number of cells in a month grid (six weeks of seven days).
pub const MONTH_GRID_CELLS: usize = 42;

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// The seven Sunday-first dates of the week containing `date`.
pub fn week_days(date: NaiveDate) -> Vec<NaiveDate> {
    week_start(date, 0).iter_days().take(7).collect()
}

/// The 42 consecutive days shown by a month view.
///
/// The first cell is the Sunday on or before the first of `date`'s month, so
/// every day of the month is always covered.
pub fn month_grid(date: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(date);
    week_start(first, 0)
        .iter_days()
        .take(MONTH_GRID_CELLS)
        .collect()
}

/// Short, Sunday-first weekday names for the given locale ("Su", "Mo", ...).
pub fn weekday_labels(locale: Locale) -> Vec<String> {
    // 2023-01-01 fell on a Sunday
    let sunday = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();
    debug_assert_eq!(sunday.weekday(), Weekday::Sun);

    sunday
        .iter_days()
        .take(7)
        .map(|day| {
            format_localized(start_of_day(day), "%a", locale)
                .chars()
                .take(2)
                .collect()
        })
        .collect()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Shift by whole months, keeping the day of month where it exists and
/// clamping to the last day of the target month otherwise.
pub fn shift_months(date: NaiveDate, delta_months: i32) -> NaiveDate {
    let months = Months::new(delta_months.unsigned_abs());
    let shifted = if delta_months >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(date)
}

/// Shift by whole years; Feb 29 lands on Feb 28 in non-leap years.
pub fn shift_years(date: NaiveDate, delta_years: i32) -> NaiveDate {
    shift_months(date, delta_years.saturating_mul(12))
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

/// `date` at `hour`:00. Hours past 23 are clamped to 23.
pub fn at_hour(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_hms_opt(hour.min(23), 0, 0)
        .unwrap_or_else(|| start_of_day(date))
}

pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Same calendar date and same hour of day.
pub fn is_same_hour(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date() && a.hour() == b.hour()
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Format a wall-clock value with a strftime pattern in the given locale.
pub fn format_localized(value: NaiveDateTime, pattern: &str, locale: Locale) -> String {
    Utc.from_utc_datetime(&value)
        .format_localized(pattern, locale)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_sunday() {
        // Wednesday, Dec 4, 2024
        assert_eq!(week_start(date(2024, 12, 4), 0), date(2024, 12, 1));
    }

    #[test]
    fn test_week_start_monday() {
        assert_eq!(week_start(date(2024, 12, 4), 1), date(2024, 12, 2));
    }

    #[test]
    fn test_week_days_span_sunday_to_saturday() {
        let days = week_days(date(2025, 1, 8));
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2025, 1, 5));
        assert_eq!(days[6], date(2025, 1, 11));
    }

    #[test]
    fn test_month_grid_starts_on_sunday_before_first() {
        // Feb 1, 2025 is a Saturday
        let grid = month_grid(date(2025, 2, 14));
        assert_eq!(grid.len(), MONTH_GRID_CELLS);
        assert_eq!(grid[0], date(2025, 1, 26));
        assert_eq!(grid[41], date(2025, 3, 8));
    }

    #[test]
    fn test_month_grid_when_first_is_sunday() {
        // June 1, 2025 is a Sunday
        let grid = month_grid(date(2025, 6, 30));
        assert_eq!(grid[0], date(2025, 6, 1));
    }

    #[test]
    fn test_weekday_labels_en() {
        let labels = weekday_labels(Locale::en_US);
        assert_eq!(labels, vec!["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]);
    }

    #[test]
    fn test_weekday_labels_de() {
        let labels = weekday_labels(Locale::de_DE);
        assert_eq!(labels[0], "So");
        assert_eq!(labels[1], "Mo");
    }

    #[test_case(date(2025, 1, 31), 1, date(2025, 2, 28) ; "clamps to end of february")]
    #[test_case(date(2024, 1, 31), 1, date(2024, 2, 29) ; "clamps to leap day")]
    #[test_case(date(2025, 3, 15), -1, date(2025, 2, 15) ; "backwards keeps day")]
    #[test_case(date(2025, 12, 10), 1, date(2026, 1, 10) ; "crosses year end")]
    #[test_case(date(2025, 1, 10), -1, date(2024, 12, 10) ; "crosses year start")]
    fn test_shift_months(start: NaiveDate, delta: i32, expected: NaiveDate) {
        assert_eq!(shift_months(start, delta), expected);
    }

    #[test]
    fn test_shift_years_leap_day() {
        assert_eq!(shift_years(date(2024, 2, 29), 1), date(2025, 2, 28));
        assert_eq!(shift_years(date(2024, 2, 29), 4), date(2028, 2, 29));
    }

    #[test]
    fn test_is_same_hour_requires_same_date() {
        let a = date(2025, 1, 6).and_hms_opt(10, 5, 0).unwrap();
        let b = date(2025, 1, 6).and_hms_opt(10, 55, 0).unwrap();
        let c = date(2025, 1, 7).and_hms_opt(10, 5, 0).unwrap();
        assert!(is_same_hour(a, b));
        assert!(!is_same_hour(a, c));
    }

    #[test]
    fn test_at_hour_clamps() {
        assert_eq!(at_hour(date(2025, 1, 6), 30).hour(), 23);
        assert_eq!(at_hour(date(2025, 1, 6), 9).hour(), 9);
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(date(2025, 1, 4)));
        assert!(is_weekend(date(2025, 1, 5)));
        assert!(!is_weekend(date(2025, 1, 6)));
    }
}
