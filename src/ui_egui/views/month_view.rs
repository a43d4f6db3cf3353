use chrono::{Datelike, NaiveDate};
use egui::{pos2, Rect, Sense, Stroke, Vec2};

use super::event_rendering::event_marker;
use super::palette::{CalendarCellPalette, EventColors};
use crate::services::calendar::Calendar;
use crate::ui_egui::actions::CalendarAction;
use crate::ui_egui::drag::{handle_event_response, DropGrid};
use crate::services::layout::cell_is_weekend;
use crate::utils::date::is_same_month;

const HEADER_HEIGHT: f32 = 28.0;
const DAY_NUMBER_HEIGHT: f32 = 18.0;
const MARKER_HEIGHT: f32 = 16.0;
const MARKER_SPACING: f32 = 2.0;
const MIN_CELL_HEIGHT: f32 = 60.0;

pub struct MonthView;

impl MonthView {
    pub fn show(ui: &mut egui::Ui, calendar: &Calendar, actions: &mut Vec<CalendarAction>) {
        let palette = CalendarCellPalette::from_visuals(ui.visuals());
        let dates = calendar.month_grid();
        let anchor = calendar.anchor_date();

        let (header, _) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), HEADER_HEIGHT),
            Sense::hover(),
        );
        let col_width = header.width() / 7.0;
        for (idx, label) in calendar.weekday_labels().iter().enumerate() {
            let center = pos2(header.left() + (idx as f32 + 0.5) * col_width, header.center().y);
            ui.painter().text(
                center,
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::proportional(13.0),
                palette.text,
            );
        }

        let rows = (dates.len() / 7).max(1);
        let height = ui.available_height().max(MIN_CELL_HEIGHT * rows as f32);
        let (cells, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
        let cell_size = Vec2::new(cells.width() / 7.0, cells.height() / rows as f32);
        let grid = DropGrid::Month {
            cells,
            dates: dates.clone(),
        };

        for (idx, date) in dates.iter().enumerate() {
            let min = cells.min + Vec2::new((idx % 7) as f32 * cell_size.x, (idx / 7) as f32 * cell_size.y);
            let rect = Rect::from_min_size(min, cell_size);
            let weekend = cell_is_weekend(idx);
            Self::render_day_cell(ui, calendar, *date, anchor, weekend, rect, &palette, &grid, actions);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_day_cell(
        ui: &egui::Ui,
        calendar: &Calendar,
        date: NaiveDate,
        anchor: NaiveDate,
        weekend: bool,
        rect: Rect,
        palette: &CalendarCellPalette,
        grid: &DropGrid,
        actions: &mut Vec<CalendarAction>,
    ) {
        let in_month = is_same_month(date, anchor);
        let is_today = calendar.is_today(date);

        let response = ui.interact(rect, ui.id().with(("month_cell", date)), Sense::click());
        let background = if is_today {
            palette.today_bg
        } else if !in_month {
            palette.outside_bg
        } else if weekend {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        let border = if is_today {
            Stroke::new(2.0, palette.today_border)
        } else if response.hovered() {
            Stroke::new(1.5, palette.hover_border)
        } else {
            Stroke::new(1.0, palette.border)
        };
        let inner = rect.shrink(1.0);
        ui.painter().rect_filled(inner, egui::Rounding::same(4.0), background);
        ui.painter().rect_stroke(inner, egui::Rounding::same(4.0), border);

        ui.painter().text(
            inner.left_top() + Vec2::new(4.0, 2.0),
            egui::Align2::LEFT_TOP,
            date.day().to_string(),
            egui::FontId::proportional(13.0),
            if in_month { palette.text } else { palette.muted_text },
        );

        if response.clicked() {
            actions.push(CalendarAction::ActivateSlot { date, hour: None });
        }

        let markers = calendar.visible_events_for_day(date);
        let room = ((inner.height() - DAY_NUMBER_HEIGHT) / (MARKER_HEIGHT + MARKER_SPACING)).floor();
        let capacity = if room > 0.0 { room as usize } else { 0 };
        let overflow = markers.len().saturating_sub(capacity);
        let shown = if overflow > 0 { capacity.saturating_sub(1) } else { markers.len() };

        let dragged_id = calendar.active_drag().map(|drag| drag.event_id.as_str());
        for (row, event) in markers.iter().take(shown).enumerate() {
            let top = inner.top() + DAY_NUMBER_HEIGHT + row as f32 * (MARKER_HEIGHT + MARKER_SPACING);
            let marker_rect = Rect::from_min_size(
                pos2(inner.left() + 2.0, top),
                Vec2::new(inner.width() - 4.0, MARKER_HEIGHT),
            );
            let colors = EventColors::for_tag(calendar.color_for(event));
            let drawn = if dragged_id == Some(event.id.as_str()) {
                colors.ghost()
            } else {
                colors
            };
            let marker = event_marker(ui, marker_rect, event, drawn);
            handle_event_response(ui, &marker, event, colors, grid, actions);
        }

        if overflow > 0 {
            let hidden = markers.len() - shown;
            let top = inner.top() + DAY_NUMBER_HEIGHT + shown as f32 * (MARKER_HEIGHT + MARKER_SPACING);
            ui.painter().text(
                pos2(inner.left() + 4.0, top),
                egui::Align2::LEFT_TOP,
                format!("+{} more", hidden),
                egui::FontId::proportional(11.0),
                palette.muted_text,
            );
        }
    }
}
