//! Pointer side of drag-to-reschedule.
//!
//! The calendar owns the drag state; this module turns egui responses into
//! begin/drop actions and maps the release point to a [`DropTarget`] for the
//! view the drag ends in.

use chrono::NaiveDate;
use egui::{Pos2, Rect, Vec2};

use crate::models::event::CalendarEvent;
use crate::services::drag::DropTarget;
use crate::services::layout::{day_drop_target, month_drop_target, week_drop_target};

use super::actions::CalendarAction;
use super::views::event_rendering::paint_drag_ghost;
use super::views::palette::EventColors;

/// Geometry needed to resolve a release point into a drop target.
#[derive(Clone, Debug)]
pub enum DropGrid {
    /// Day view hour column.
    Day { column: Rect, hour_height: f32 },
    /// Week view day columns, in display order.
    Week {
        columns: Rect,
        days: Vec<NaiveDate>,
        hour_height: f32,
    },
    /// Month view 6x7 date cells.
    Month { cells: Rect, dates: Vec<NaiveDate> },
}

impl DropGrid {
    /// Target under `pointer`, or `None` outside every cell.
    pub fn drop_target_at(&self, pointer: Pos2) -> Option<DropTarget> {
        match self {
            DropGrid::Day {
                column,
                hour_height,
            } => {
                if !column.x_range().contains(pointer.x) {
                    return None;
                }
                day_drop_target(pointer.y - column.top(), *hour_height)
            }
            DropGrid::Week {
                columns,
                days,
                hour_height,
            } => {
                if days.is_empty() {
                    return None;
                }
                let column_width = columns.width() / days.len() as f32;
                week_drop_target(
                    days,
                    pointer.x - columns.left(),
                    pointer.y - columns.top(),
                    column_width,
                    *hour_height,
                )
            }
            DropGrid::Month { cells, dates } => {
                let rows = (dates.len() / 7).max(1) as f32;
                month_drop_target(
                    dates,
                    pointer.x - cells.left(),
                    pointer.y - cells.top(),
                    cells.width() / 7.0,
                    cells.height() / rows,
                )
            }
        }
    }
}

/// Turn one event's response into click and drag actions.
pub fn handle_event_response(
    ui: &egui::Ui,
    response: &egui::Response,
    event: &CalendarEvent,
    colors: EventColors,
    grid: &DropGrid,
    actions: &mut Vec<CalendarAction>,
) {
    if response.clicked() {
        actions.push(CalendarAction::ClickEvent(event.id.clone()));
    }

    if response.drag_started() {
        actions.push(CalendarAction::BeginDrag(event.id.clone()));
    }

    if response.dragged() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        if let Some(pointer) = ui.ctx().pointer_latest_pos() {
            let size = Vec2::new(response.rect.width().clamp(60.0, 180.0), 22.0);
            paint_drag_ghost(ui.ctx(), pointer, size, &event.title, colors);
            if let Some(target) = grid.drop_target_at(pointer) {
                log::trace!("Drag of {} over {:?}", event.id, target);
            }
        }
    }

    if response.drag_stopped() {
        let target = ui
            .ctx()
            .pointer_latest_pos()
            .and_then(|pointer| grid.drop_target_at(pointer));
        actions.push(CalendarAction::Drop(target));
    }
}
