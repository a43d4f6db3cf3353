use chrono::{Local, NaiveDateTime, Timelike};

use super::views::CalendarWidget;
use crate::services::calendar::Calendar;

/// Standalone window hosting one calendar instance.
pub struct CalendarApp {
    calendar: Calendar,
}

impl CalendarApp {
    pub fn new(calendar: Calendar) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Re-capture "today" once the minute rolls over so the current-time
    /// line and today highlight keep up with a long-running window.
    fn refresh_clock(&mut self, now: NaiveDateTime) {
        let today = self.calendar.today();
        if now.date() != today.date() || now.hour() != today.hour() || now.minute() != today.minute() {
            self.calendar.refresh_today(now);
        }
    }
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh_clock(Local::now().naive_local());

        egui::CentralPanel::default().show(ctx, |ui| {
            CalendarWidget::show(ui, &mut self.calendar);
        });

        ctx.request_repaint_after(std::time::Duration::from_secs(30));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::CalendarOptions;
    use crate::services::calendar::NoopObserver;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 8)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_refresh_clock_tracks_minutes() {
        let calendar = Calendar::with_now(CalendarOptions::default(), Box::new(NoopObserver), at(9, 0));
        let mut app = CalendarApp::new(calendar);

        app.refresh_clock(at(9, 0));
        assert_eq!(app.calendar().today(), at(9, 0));

        app.refresh_clock(at(9, 1));
        assert_eq!(app.calendar().today(), at(9, 1));
    }
}
