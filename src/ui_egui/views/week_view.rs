use chrono::{Datelike, Locale, NaiveDate};
use egui::{pos2, Rect, Sense, Vec2};

use super::palette::CalendarCellPalette;
use super::time_grid::{column_rects, render_time_grid, GridKind};
use crate::services::calendar::Calendar;
use crate::ui_egui::actions::CalendarAction;
use crate::utils::date::{format_localized, start_of_day};

const HEADER_HEIGHT: f32 = 36.0;

pub struct WeekView;

/// Column heading such as "Wed 8".
pub fn day_header_label(date: NaiveDate, locale: Locale) -> String {
    format!("{} {}", format_localized(start_of_day(date), "%a", locale), date.day())
}

impl WeekView {
    pub fn show(ui: &mut egui::Ui, calendar: &Calendar, actions: &mut Vec<CalendarAction>) {
        let days = calendar.week_days();
        let palette = CalendarCellPalette::from_visuals(ui.visuals());

        // Header columns line up with the grid below
        let (area, _) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), HEADER_HEIGHT),
            Sense::hover(),
        );
        for (date, column) in days.iter().zip(column_rects(area, days.len())) {
            let is_today = calendar.is_today(*date);
            let cell = Rect::from_min_max(column.min, pos2(column.right(), column.bottom() - 2.0));
            if is_today {
                ui.painter()
                    .rect_filled(cell, egui::Rounding::same(4.0), palette.today_bg);
            }
            ui.painter().text(
                cell.center(),
                egui::Align2::CENTER_CENTER,
                day_header_label(*date, calendar.locale()),
                egui::FontId::proportional(13.0),
                if is_today { palette.today_border } else { palette.text },
            );
        }

        render_time_grid(ui, calendar, &days, GridKind::Week, actions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_header_uses_abbreviated_weekday() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
        assert_eq!(day_header_label(date, Locale::en_US), "Wed 8");
        assert_eq!(day_header_label(date, Locale::de_DE), "Mi 8");
    }
}
