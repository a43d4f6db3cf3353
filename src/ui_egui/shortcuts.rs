use crate::services::navigation::Hotkey;

use super::actions::CalendarAction;

const BOUND_KEYS: [egui::Key; 7] = [
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
    egui::Key::T,
    egui::Key::D,
    egui::Key::W,
    egui::Key::M,
    egui::Key::Y,
];

/// Map an egui key to a calendar hotkey.
pub fn hotkey_for(key: egui::Key) -> Option<Hotkey> {
    match key {
        egui::Key::ArrowLeft => Some(Hotkey::ArrowLeft),
        egui::Key::ArrowRight => Some(Hotkey::ArrowRight),
        egui::Key::T => Some(Hotkey::Char('t')),
        egui::Key::D => Some(Hotkey::Char('d')),
        egui::Key::W => Some(Hotkey::Char('w')),
        egui::Key::M => Some(Hotkey::Char('m')),
        egui::Key::Y => Some(Hotkey::Char('y')),
        _ => None,
    }
}

/// Collect hotkeys pressed this frame.
///
/// Keys are ignored while a text field has focus or a command modifier is
/// held. Escape cancels an active drag regardless of the hotkey setting.
pub fn collect_keyboard_shortcuts(
    ctx: &egui::Context,
    hotkeys_enabled: bool,
    dragging: bool,
    actions: &mut Vec<CalendarAction>,
) {
    if ctx.wants_keyboard_input() {
        return;
    }

    ctx.input(|i| {
        if dragging && i.key_pressed(egui::Key::Escape) {
            actions.push(CalendarAction::CancelDrag);
        }

        if !hotkeys_enabled || i.modifiers.ctrl || i.modifiers.command || i.modifiers.alt {
            return;
        }

        for key in BOUND_KEYS {
            if i.key_pressed(key) {
                if let Some(hotkey) = hotkey_for(key) {
                    actions.push(CalendarAction::Hotkey(hotkey));
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::view::{Direction, ViewMode};
    use crate::services::navigation::HotkeyAction;

    #[test]
    fn test_every_bound_key_maps() {
        for key in BOUND_KEYS {
            assert!(hotkey_for(key).and_then(Hotkey::action).is_some(), "{:?}", key);
        }
        assert_eq!(hotkey_for(egui::Key::Q), None);
    }

    #[test]
    fn test_key_actions() {
        assert_eq!(
            hotkey_for(egui::Key::ArrowLeft).and_then(Hotkey::action),
            Some(HotkeyAction::Navigate(Direction::Prev))
        );
        assert_eq!(
            hotkey_for(egui::Key::Y).and_then(Hotkey::action),
            Some(HotkeyAction::SetMode(ViewMode::Year))
        );
    }
}
