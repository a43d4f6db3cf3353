//! 24-hour time grid shared by the day and week views.
//!
//! One column per date. Hour cells are clickable (add appointment) and act as
//! drop targets; event blocks are laid out from their start and duration.

use chrono::NaiveDate;
use egui::{pos2, Color32, Rect, Sense, Stroke, Vec2};

use super::event_rendering::event_block;
use super::palette::{EventColors, TimeGridPalette};
use crate::services::calendar::Calendar;
use crate::services::layout::{column_height, event_slot, now_indicator_offset, HOURS_PER_DAY};
use crate::ui_egui::actions::CalendarAction;
use crate::ui_egui::drag::{handle_event_response, DropGrid};
use crate::utils::date::is_weekend;

pub const TIME_LABEL_WIDTH: f32 = 56.0;
const MIN_BLOCK_HEIGHT: f32 = 14.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridKind {
    Day,
    Week,
}

/// Column rectangles for `count` dates laid out after the time labels.
pub fn column_rects(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let left = area.left() + TIME_LABEL_WIDTH;
    let width = (area.right() - left).max(0.0) / count as f32;
    (0..count)
        .map(|i| {
            let x = left + i as f32 * width;
            Rect::from_min_max(pos2(x, area.top()), pos2(x + width, area.bottom()))
        })
        .collect()
}

pub fn render_time_grid(
    ui: &mut egui::Ui,
    calendar: &Calendar,
    dates: &[NaiveDate],
    kind: GridKind,
    actions: &mut Vec<CalendarAction>,
) {
    let hour_height = calendar.hour_height();
    let palette = TimeGridPalette::from_visuals(ui.visuals());

    egui::ScrollArea::vertical()
        .id_source("calendar_time_grid")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let size = Vec2::new(ui.available_width(), column_height(hour_height));
            let (area, _) = ui.allocate_exact_size(size, Sense::hover());
            let columns = column_rects(area, dates.len());
            let (Some(first), Some(last)) = (columns.first(), columns.last()) else {
                return;
            };
            let all_columns = Rect::from_min_max(first.min, last.max);

            let grid = match kind {
                GridKind::Day => DropGrid::Day {
                    column: all_columns,
                    hour_height,
                },
                GridKind::Week => DropGrid::Week {
                    columns: all_columns,
                    days: dates.to_vec(),
                    hour_height,
                },
            };

            draw_hour_labels(ui, area, hour_height, &palette);

            for (date, column) in dates.iter().zip(&columns) {
                draw_column(ui, calendar, *date, *column, hour_height, &palette, actions);
            }

            let now = calendar.today();
            for (date, column) in dates.iter().zip(&columns) {
                if let Some(offset) = now_indicator_offset(now, *date, hour_height) {
                    draw_now_line(ui, *column, column.top() + offset, palette.now_line);
                }
            }

            for (date, column) in dates.iter().zip(&columns) {
                draw_events(ui, calendar, *date, *column, hour_height, &grid, actions);
            }
        });
}

fn draw_hour_labels(ui: &egui::Ui, area: Rect, hour_height: f32, palette: &TimeGridPalette) {
    let painter = ui.painter();
    let label_rect = Rect::from_min_size(area.min, Vec2::new(TIME_LABEL_WIDTH, area.height()));
    painter.rect_filled(label_rect, 0.0, palette.hour_bg);

    for hour in 0..HOURS_PER_DAY {
        let y = area.top() + hour as f32 * hour_height;
        painter.text(
            pos2(area.left() + TIME_LABEL_WIDTH - 6.0, y + 2.0),
            egui::Align2::RIGHT_TOP,
            format!("{:02}:00", hour),
            egui::FontId::proportional(12.0),
            Color32::GRAY,
        );
        painter.line_segment(
            [pos2(area.left() + TIME_LABEL_WIDTH, y), pos2(area.right(), y)],
            Stroke::new(1.0, palette.hour_line),
        );
    }
}

fn draw_column(
    ui: &egui::Ui,
    calendar: &Calendar,
    date: NaiveDate,
    column: Rect,
    hour_height: f32,
    palette: &TimeGridPalette,
    actions: &mut Vec<CalendarAction>,
) {
    let background = if calendar.is_today(date) {
        palette.today_bg
    } else if is_weekend(date) {
        palette.weekend_bg
    } else {
        palette.regular_bg
    };
    ui.painter().rect_filled(column.shrink2(Vec2::new(0.5, 0.0)), 0.0, background);
    ui.painter().line_segment(
        [column.left_top(), column.left_bottom()],
        Stroke::new(1.0, palette.divider),
    );

    for hour in 0..HOURS_PER_DAY {
        let top = column.top() + hour as f32 * hour_height;
        let cell = Rect::from_min_size(pos2(column.left(), top), Vec2::new(column.width(), hour_height));
        let response = ui.interact(cell, ui.id().with(("slot", date, hour)), Sense::click());

        if response.hovered() {
            ui.painter().rect_filled(cell, 0.0, palette.hover_overlay);
        }
        if response.clicked() {
            actions.push(CalendarAction::ActivateSlot {
                date,
                hour: Some(hour),
            });
        }
        ui.painter().line_segment(
            [cell.left_top(), cell.right_top()],
            Stroke::new(1.0, palette.hour_line),
        );
    }
}

fn draw_now_line(ui: &egui::Ui, column: Rect, y: f32, color: Color32) {
    let painter = ui.painter();
    painter.circle_filled(pos2(column.left() + 3.0, y), 3.0, color);
    painter.line_segment(
        [pos2(column.left(), y), pos2(column.right(), y)],
        Stroke::new(2.0, color),
    );
}

/// Events starting in the same hour share the column width side by side.
fn draw_events(
    ui: &egui::Ui,
    calendar: &Calendar,
    date: NaiveDate,
    column: Rect,
    hour_height: f32,
    grid: &DropGrid,
    actions: &mut Vec<CalendarAction>,
) {
    let dragged_id = calendar.active_drag().map(|drag| drag.event_id.as_str());

    for hour in 0..HOURS_PER_DAY {
        let events = calendar.visible_events_for_hour(date, hour);
        if events.is_empty() {
            continue;
        }
        let lane_width = column.width() / events.len() as f32;

        for (lane, event) in events.into_iter().enumerate() {
            let slot = event_slot(event, hour_height);
            let rect = Rect::from_min_size(
                pos2(column.left() + lane as f32 * lane_width, column.top() + slot.top),
                Vec2::new(lane_width, slot.height.max(MIN_BLOCK_HEIGHT)),
            );

            let colors = EventColors::for_tag(calendar.color_for(event));
            let shown = if dragged_id == Some(event.id.as_str()) {
                colors.ghost()
            } else {
                colors
            };
            let owner = calendar.person_for(event).map(|p| p.name.as_str());
            let response = event_block(ui, rect, event, owner, shown);
            handle_event_response(ui, &response, event, colors, grid, actions);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_rects_split_evenly() {
        let area = Rect::from_min_size(pos2(0.0, 0.0), Vec2::new(TIME_LABEL_WIDTH + 700.0, 100.0));
        let columns = column_rects(area, 7);

        assert_eq!(columns.len(), 7);
        assert_eq!(columns[0].left(), TIME_LABEL_WIDTH);
        assert!((columns[6].right() - area.right()).abs() < 0.01);
        assert!((columns[3].width() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_column_rects_empty() {
        let area = Rect::from_min_size(pos2(0.0, 0.0), Vec2::new(300.0, 100.0));
        assert!(column_rects(area, 0).is_empty());
    }
}
