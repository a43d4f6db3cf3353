use egui::{Color32, Visuals};

use crate::models::color::ColorTag;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

/// Fill and text colour for an event block or marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventColors {
    pub fill: Color32,
    pub text: Color32,
}

impl EventColors {
    pub fn for_tag(tag: ColorTag) -> Self {
        let fill = match tag {
            ColorTag::Default => Color32::from_rgb(100, 150, 200),
            ColorTag::Blue => Color32::from_rgb(59, 130, 246),
            ColorTag::Green => Color32::from_rgb(34, 160, 94),
            ColorTag::Pink => Color32::from_rgb(219, 84, 151),
            ColorTag::Purple => Color32::from_rgb(139, 92, 246),
        };
        Self {
            fill,
            text: Color32::WHITE,
        }
    }

    /// Translucent version drawn under the pointer while dragging.
    pub fn ghost(self) -> Self {
        Self {
            fill: with_alpha(self.fill, 140),
            text: with_alpha(self.text, 200),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub outside_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub text: Color32,
    pub muted_text: Color32,
    pub hover_border: Color32,
}

impl CalendarCellPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let base = visuals.extreme_bg_color;
        let accent = visuals.selection.bg_fill;
        Self {
            regular_bg: base,
            weekend_bg: blend(base, visuals.faint_bg_color, 0.6),
            today_bg: blend(base, accent, 0.2),
            outside_bg: visuals.panel_fill,
            border: visuals.widgets.noninteractive.bg_stroke.color,
            today_border: accent,
            text: visuals.text_color(),
            muted_text: visuals.weak_text_color(),
            hover_border: with_alpha(accent, if visuals.dark_mode { 160 } else { 120 }),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct TimeGridPalette {
    pub hour_bg: Color32,
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub hour_line: Color32,
    pub divider: Color32,
    pub hover_overlay: Color32,
    pub now_line: Color32,
}

impl TimeGridPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let cells = CalendarCellPalette::from_visuals(visuals);
        Self {
            hour_bg: blend(visuals.panel_fill, cells.regular_bg, 0.4),
            regular_bg: cells.regular_bg,
            weekend_bg: cells.weekend_bg,
            today_bg: cells.today_bg,
            hour_line: cells.border,
            divider: with_alpha(cells.border, 220),
            hover_overlay: with_alpha(cells.today_border, if visuals.dark_mode { 80 } else { 50 }),
            now_line: Color32::from_rgb(255, 100, 100),
        }
    }
}
