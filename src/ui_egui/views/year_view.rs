use chrono::{Datelike, NaiveDate};
use egui::{pos2, Rect, Sense, Vec2};

use super::palette::CalendarCellPalette;
use crate::services::calendar::Calendar;
use crate::ui_egui::actions::CalendarAction;
use crate::utils::date::{format_localized, is_same_month, start_of_day};

const MONTH_COLUMNS: usize = 4;
const MONTH_TITLE_HEIGHT: f32 = 22.0;
const LABEL_ROW_HEIGHT: f32 = 16.0;
const MONTH_SPACING: f32 = 12.0;

pub struct YearView;

/// Today is circled only in its own month, not in neighbouring months'
/// leading or trailing cells.
fn marks_today(date: NaiveDate, month_first: NaiveDate, today: NaiveDate) -> bool {
    date == today && is_same_month(date, month_first)
}

impl YearView {
    pub fn show(ui: &mut egui::Ui, calendar: &Calendar, actions: &mut Vec<CalendarAction>) {
        let palette = CalendarCellPalette::from_visuals(ui.visuals());
        let labels = calendar.weekday_labels();
        let grids = calendar.year_grids();
        let year = calendar.anchor_date().year();

        egui::ScrollArea::vertical()
            .id_source("calendar_year_view")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let width = ui.available_width();
                let month_width = (width - MONTH_SPACING * (MONTH_COLUMNS - 1) as f32) / MONTH_COLUMNS as f32;
                let cell = month_width / 7.0;
                let month_height = MONTH_TITLE_HEIGHT + LABEL_ROW_HEIGHT + cell * 6.0;
                let rows = grids.len().div_ceil(MONTH_COLUMNS);
                let total = Vec2::new(width, rows as f32 * (month_height + MONTH_SPACING));
                let (area, _) = ui.allocate_exact_size(total, Sense::hover());

                for (idx, dates) in grids.iter().enumerate() {
                    let Some(first) = NaiveDate::from_ymd_opt(year, idx as u32 + 1, 1) else {
                        continue;
                    };
                    let origin = area.min
                        + Vec2::new(
                            (idx % MONTH_COLUMNS) as f32 * (month_width + MONTH_SPACING),
                            (idx / MONTH_COLUMNS) as f32 * (month_height + MONTH_SPACING),
                        );
                    Self::render_month(ui, calendar, first, dates, &labels, origin, cell, &palette, actions);
                }
            });
    }

    #[allow(clippy::too_many_arguments)]
    fn render_month(
        ui: &egui::Ui,
        calendar: &Calendar,
        first: NaiveDate,
        dates: &[NaiveDate],
        labels: &[String],
        origin: egui::Pos2,
        cell: f32,
        palette: &CalendarCellPalette,
        actions: &mut Vec<CalendarAction>,
    ) {
        let painter = ui.painter();
        painter.text(
            origin,
            egui::Align2::LEFT_TOP,
            format_localized(start_of_day(first), "%B", calendar.locale()),
            egui::FontId::proportional(15.0),
            palette.text,
        );

        let labels_top = origin.y + MONTH_TITLE_HEIGHT;
        for (col, label) in labels.iter().enumerate() {
            painter.text(
                pos2(origin.x + (col as f32 + 0.5) * cell, labels_top),
                egui::Align2::CENTER_TOP,
                label,
                egui::FontId::proportional(10.0),
                palette.muted_text,
            );
        }

        let cells_top = labels_top + LABEL_ROW_HEIGHT;
        for (idx, date) in dates.iter().enumerate() {
            let rect = Rect::from_min_size(
                pos2(origin.x + (idx % 7) as f32 * cell, cells_top + (idx / 7) as f32 * cell),
                Vec2::splat(cell),
            );
            let in_month = is_same_month(*date, first);
            let response = ui.interact(rect, ui.id().with(("year_cell", *date)), Sense::click());

            if marks_today(*date, first, calendar.today().date()) {
                ui.painter().circle_filled(rect.center(), cell * 0.42, palette.today_bg);
            } else if response.hovered() && in_month {
                ui.painter().rect_filled(rect.shrink(1.0), egui::Rounding::same(3.0), palette.hover_border);
            }

            let has_events = in_month && !calendar.visible_events_for_day(*date).is_empty();
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                date.day().to_string(),
                egui::FontId::proportional(11.0),
                if in_month { palette.text } else { palette.muted_text },
            );
            if has_events {
                ui.painter().circle_filled(
                    pos2(rect.center().x, rect.bottom() - 3.0),
                    1.5,
                    palette.today_border,
                );
            }

            if response.clicked() {
                actions.push(CalendarAction::ActivateSlot {
                    date: *date,
                    hour: None,
                });
            }
        }
    }
}
