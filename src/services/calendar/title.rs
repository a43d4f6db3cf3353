//! Heading text for the current anchor date.

use chrono::{Datelike, Locale, NaiveDate};

use crate::models::view::ViewMode;
use crate::utils::date::{format_localized, start_of_day, week_days};

/// Heading for `date` in `mode`.
///
/// Week headings collapse the shared month and year:
/// "January 5 - 11, 2025", "January 26 - February 1, 2025",
/// "December 29, 2024 - January 4, 2025".
pub fn format_title(mode: ViewMode, date: NaiveDate, locale: Locale) -> String {
    let fmt = |day: NaiveDate, pattern: &str| format_localized(start_of_day(day), pattern, locale);

    match mode {
        ViewMode::Day => fmt(date, "%A, %B %-d, %Y"),
        ViewMode::Week => {
            let days = week_days(date);
            let (start, end) = (days[0], days[6]);
            if start.year() != end.year() {
                format!("{} - {}", fmt(start, "%B %-d, %Y"), fmt(end, "%B %-d, %Y"))
            } else if start.month() != end.month() {
                format!("{} - {}", fmt(start, "%B %-d"), fmt(end, "%B %-d, %Y"))
            } else {
                format!("{} - {}", fmt(start, "%B %-d"), fmt(end, "%-d, %Y"))
            }
        }
        ViewMode::Month => fmt(date, "%B %Y"),
        ViewMode::Year => fmt(date, "%Y"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(ViewMode::Day, date(2025, 1, 6), "Monday, January 6, 2025" ; "day")]
    #[test_case(ViewMode::Week, date(2025, 1, 8), "January 5 - 11, 2025" ; "week same month")]
    #[test_case(ViewMode::Week, date(2025, 1, 29), "January 26 - February 1, 2025" ; "week across months")]
    #[test_case(ViewMode::Week, date(2025, 1, 1), "December 29, 2024 - January 4, 2025" ; "week across years")]
    #[test_case(ViewMode::Month, date(2025, 3, 9), "March 2025" ; "month")]
    #[test_case(ViewMode::Year, date(2025, 3, 9), "2025" ; "year")]
    fn test_format_title(mode: ViewMode, anchor: NaiveDate, expected: &str) {
        assert_eq!(format_title(mode, anchor, Locale::en_US), expected);
    }

    #[test]
    fn test_localized_month_name() {
        assert_eq!(format_title(ViewMode::Month, date(2025, 3, 9), Locale::de_DE), "März 2025");
    }
}
