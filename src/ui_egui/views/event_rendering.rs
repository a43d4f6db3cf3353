//! Painting helpers for event blocks and month markers.

use egui::{Pos2, Rect, Sense, Vec2};

use super::palette::EventColors;
use crate::models::event::CalendarEvent;

const BLOCK_ROUNDING: f32 = 3.0;
const MIN_LABEL_HEIGHT: f32 = 12.0;

/// Time range label, e.g. `10:00 - 11:30`.
pub fn time_range_label(event: &CalendarEvent) -> String {
    format!("{} - {}", event.start.format("%H:%M"), event.end.format("%H:%M"))
}

/// Draw an event block in the time grid and make it clickable and draggable.
pub fn event_block(
    ui: &egui::Ui,
    rect: Rect,
    event: &CalendarEvent,
    owner_name: Option<&str>,
    colors: EventColors,
) -> egui::Response {
    let response = ui.interact(rect, ui.id().with(("event", &event.id)), Sense::click_and_drag());

    let bar_rect = rect.shrink2(Vec2::new(1.0, 1.0));
    ui.painter()
        .rect_filled(bar_rect, egui::Rounding::same(BLOCK_ROUNDING), colors.fill);

    if bar_rect.height() >= MIN_LABEL_HEIGHT {
        let text = format!("{}\n{}", event.title, time_range_label(event));
        paint_clipped_text(ui, bar_rect, text, 11.0, colors);
    }

    let hover = match owner_name {
        Some(name) => format!("{}\n{}\n{}", event.title, name, time_range_label(event)),
        None => format!("{}\n{}", event.title, time_range_label(event)),
    };
    response.on_hover_text(hover)
}

/// Draw a one-line month cell marker.
pub fn event_marker(
    ui: &egui::Ui,
    rect: Rect,
    event: &CalendarEvent,
    colors: EventColors,
) -> egui::Response {
    let response = ui.interact(rect, ui.id().with(("marker", &event.id)), Sense::click_and_drag());
    ui.painter()
        .rect_filled(rect, egui::Rounding::same(2.0), colors.fill);
    let text = format!("{} {}", event.start.format("%H:%M"), event.title);
    paint_clipped_text(ui, rect, text, 10.0, colors);
    response.on_hover_text(format!("{}\n{}", event.title, time_range_label(event)))
}

/// Translucent copy of the dragged event following the pointer.
pub fn paint_drag_ghost(ctx: &egui::Context, pointer: Pos2, size: Vec2, title: &str, colors: EventColors) {
    let ghost = colors.ghost();
    let rect = Rect::from_min_size(pointer - Vec2::new(size.x / 2.0, 6.0), size);
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("calendar_drag_ghost"),
    ));
    painter.rect_filled(rect, egui::Rounding::same(BLOCK_ROUNDING), ghost.fill);
    painter.text(
        rect.left_top() + Vec2::new(4.0, 2.0),
        egui::Align2::LEFT_TOP,
        title,
        egui::FontId::proportional(11.0),
        ghost.text,
    );
}

fn paint_clipped_text(ui: &egui::Ui, rect: Rect, text: String, size: f32, colors: EventColors) {
    let job = egui::text::LayoutJob::simple(
        text,
        egui::FontId::proportional(size),
        colors.text,
        (rect.width() - 6.0).max(1.0),
    );
    let galley = ui.fonts(|f| f.layout_job(job));
    ui.painter()
        .with_clip_rect(rect)
        .galley(rect.left_top() + Vec2::new(3.0, 1.0), galley, colors.text);
}
