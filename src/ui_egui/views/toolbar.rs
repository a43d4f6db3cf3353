use crate::models::view::{Direction, ViewMode};
use crate::services::calendar::Calendar;
use crate::ui_egui::actions::CalendarAction;

/// Navigation buttons, title, mode switcher and person selector.
pub fn render_toolbar(ui: &mut egui::Ui, calendar: &Calendar, actions: &mut Vec<CalendarAction>) {
    ui.horizontal(|ui| {
        if ui.button("◀").on_hover_text("Previous").clicked() {
            actions.push(CalendarAction::Navigate(Direction::Prev));
        }
        if ui.button("Today").clicked() {
            actions.push(CalendarAction::Today);
        }
        if ui.button("▶").on_hover_text("Next").clicked() {
            actions.push(CalendarAction::Navigate(Direction::Next));
        }

        ui.add_space(12.0);
        ui.heading(calendar.title());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            render_person_selector(ui, calendar, actions);
            ui.separator();
            for mode in ViewMode::ALL.iter().rev() {
                let selected = calendar.mode() == *mode;
                if ui.selectable_label(selected, mode.label()).clicked() {
                    actions.push(CalendarAction::SetMode(*mode));
                }
            }
        });
    });
}

fn render_person_selector(ui: &mut egui::Ui, calendar: &Calendar, actions: &mut Vec<CalendarAction>) {
    let selected = calendar
        .people()
        .iter()
        .filter(|person| calendar.is_owner_selected(&person.id))
        .count();
    let label = format!("People ({}/{})", selected, calendar.people().len());

    ui.menu_button(label, |ui| {
        if calendar.people().is_empty() {
            ui.label("No people");
            return;
        }
        for person in calendar.people() {
            let mut checked = calendar.is_owner_selected(&person.id);
            if ui.checkbox(&mut checked, &person.name).changed() {
                actions.push(CalendarAction::ToggleOwner(person.id.clone()));
            }
        }
    });
}
