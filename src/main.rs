// Team Calendar
// Demo window hosting one calendar instance

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDateTime};
use std::path::{Path, PathBuf};

use team_calendar::models::color::ColorTag;
use team_calendar::models::event::CalendarEvent;
use team_calendar::models::person::Person;
use team_calendar::models::settings::CalendarOptions;
use team_calendar::services::calendar::{Calendar, LoggingObserver};
use team_calendar::services::settings::{load_or_default, SettingsService};
use team_calendar::ui_egui::CalendarApp;
use team_calendar::utils::date::at_hour;

fn main() -> eframe::Result<()> {
    env_logger::init();

    log::info!("Starting Team Calendar");

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let events_path = args.next().map(PathBuf::from);

    let mut options = load_options(config_path);
    if let Some(path) = events_path {
        match load_events_json(&path) {
            Ok(events) => options.events = events,
            Err(e) => log::warn!("{:#}", e),
        }
    }

    let now = Local::now().naive_local();
    if options.people.is_empty() {
        log::info!("No people configured, using demo roster");
        seed_demo(&mut options, now);
    }

    let calendar = Calendar::with_now(options, Box::new(LoggingObserver), now);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Team Calendar")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Team Calendar",
        native_options,
        Box::new(|_cc| Ok(Box::new(CalendarApp::new(calendar)))),
    )
}

fn load_options(path: Option<PathBuf>) -> CalendarOptions {
    let service = match path.map(SettingsService::new).or_else(SettingsService::with_default_path) {
        Some(service) => service,
        None => {
            log::warn!("No config directory available, using default options");
            return CalendarOptions::default();
        }
    };
    log::info!("Loading options from {}", service.path().display());
    load_or_default(&service)
}

/// Read an event list exported as JSON.
fn load_events_json(path: &Path) -> Result<Vec<CalendarEvent>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let events: Vec<CalendarEvent> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse events in {}", path.display()))?;
    log::info!("Imported {} events from {}", events.len(), path.display());
    Ok(events)
}

fn seed_demo(options: &mut CalendarOptions, now: NaiveDateTime) {
    options.people = vec![
        Person::new("d1", "Dr. Adams").with_color(ColorTag::Blue),
        Person::new("d2", "Dr. Baker").with_color(ColorTag::Green),
        Person::new("d3", "Dr. Chen").with_color(ColorTag::Pink),
    ];
    options.default_selected_person_ids = options.people.iter().map(|p| p.id.clone()).collect();

    if !options.events.is_empty() {
        return;
    }

    let today = now.date();
    let slots = [
        ("Check-up", "d1", 0, 9, 60),
        ("Cleaning", "d2", 0, 10, 45),
        ("Root canal", "d3", 0, 13, 120),
        ("Consult", "d1", 1, 11, 30),
        ("Whitening", "d2", 2, 15, 90),
        ("Follow-up", "d3", -1, 16, 30),
    ];
    options.events = slots
        .iter()
        .enumerate()
        .filter_map(|(i, (title, owner, day, hour, minutes))| {
            let start = at_hour(today + Duration::days(*day), *hour);
            CalendarEvent::new(
                (i + 1).to_string(),
                *title,
                *owner,
                start,
                start + Duration::minutes(*minutes),
            )
            .ok()
        })
        .collect();
}
