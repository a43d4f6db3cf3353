//! Calendar widget and its views.

pub mod day_view;
pub mod event_rendering;
pub mod month_view;
pub mod palette;
pub mod time_grid;
pub mod toolbar;
pub mod week_view;
pub mod year_view;

use crate::models::view::ViewMode;
use crate::services::calendar::Calendar;

use self::day_view::DayView;
use self::month_view::MonthView;
use self::week_view::WeekView;
use self::year_view::YearView;
use super::actions::{apply_actions, CalendarAction};
use super::shortcuts::collect_keyboard_shortcuts;

/// Embeddable calendar: toolbar plus the view for the current mode.
pub struct CalendarWidget;

impl CalendarWidget {
    /// Draw one frame and apply whatever the user did during it.
    pub fn show(ui: &mut egui::Ui, calendar: &mut Calendar) {
        let actions = Self::collect(ui, calendar);
        apply_actions(calendar, actions);
    }

    /// Draw one frame and return the collected actions without applying them.
    pub fn collect(ui: &mut egui::Ui, calendar: &Calendar) -> Vec<CalendarAction> {
        let mut actions = Vec::new();

        collect_keyboard_shortcuts(
            ui.ctx(),
            calendar.hotkeys_enabled(),
            calendar.active_drag().is_some(),
            &mut actions,
        );

        toolbar::render_toolbar(ui, calendar, &mut actions);
        ui.separator();

        match calendar.mode() {
            ViewMode::Day => DayView::show(ui, calendar, &mut actions),
            ViewMode::Week => WeekView::show(ui, calendar, &mut actions),
            ViewMode::Month => MonthView::show(ui, calendar, &mut actions),
            ViewMode::Year => YearView::show(ui, calendar, &mut actions),
        }

        actions
    }
}
