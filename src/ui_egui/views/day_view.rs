use super::time_grid::{render_time_grid, GridKind};
use crate::services::calendar::Calendar;
use crate::ui_egui::actions::CalendarAction;

pub struct DayView;

impl DayView {
    pub fn show(ui: &mut egui::Ui, calendar: &Calendar, actions: &mut Vec<CalendarAction>) {
        let date = calendar.anchor_date();
        render_time_grid(ui, calendar, &[date], GridKind::Day, actions);
    }
}
