//! Calendar instance: the state one embedded calendar owns.
//!
//! Views never share ambient state; each receives `&Calendar` to read from
//! or `&mut Calendar` to act on. Every committed transition goes through a
//! method here, which is also where observer notifications are fired.

use chrono::{Datelike, Local, Locale, NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;

use crate::models::color::ColorTag;
use crate::models::event::CalendarEvent;
use crate::models::person::{find_person, Person};
use crate::models::settings::{parse_locale, CalendarOptions};
use crate::models::view::{Direction, ViewMode};
use crate::services::drag::{DragContext, DragEngine, DropOutcome, DropTarget};
use crate::services::event::EventStore;
use crate::services::filter::PersonFilter;
use crate::services::layout::day_markers;
use crate::services::navigation::{self, Hotkey, HotkeyAction};
use crate::utils::date::{at_hour, month_grid, week_days, weekday_labels};

mod observer;
mod state;
mod title;

pub use observer::{CalendarObserver, LoggingObserver, NoopObserver};
pub use state::ViewState;
pub use title::format_title;

/// Hour used when a month or year date cell is activated.
pub const DATE_CELL_APPOINTMENT_HOUR: u32 = 12;

pub struct Calendar {
    people: Vec<Person>,
    locale: Locale,
    enable_hotkeys: bool,
    hour_height: f32,
    store: EventStore,
    view: ViewState,
    drag: DragEngine,
    /// Captured once at construction; see [`Calendar::refresh_today`].
    today: NaiveDateTime,
    observer: Box<dyn CalendarObserver>,
}

impl Calendar {
    pub fn new(options: CalendarOptions, observer: Box<dyn CalendarObserver>) -> Self {
        Self::with_now(options, observer, Local::now().naive_local())
    }

    /// Build a calendar with an explicit "now", for deterministic embedding.
    pub fn with_now(
        options: CalendarOptions,
        observer: Box<dyn CalendarObserver>,
        now: NaiveDateTime,
    ) -> Self {
        let locale = parse_locale(&options.locale).unwrap_or_else(|err| {
            log::warn!("{}; falling back to en_US", err);
            Locale::en_US
        });

        let store = EventStore::new(options.events);
        store.audit(&options.people);

        let filter = PersonFilter::new(options.default_selected_person_ids);
        let anchor = options.default_date.unwrap_or(now);

        log::debug!(
            "Calendar created: view={}, anchor={}, {} people, {} events",
            options.default_view,
            anchor,
            options.people.len(),
            store.len()
        );

        Self {
            people: options.people,
            locale,
            enable_hotkeys: options.enable_hotkeys,
            hour_height: options.hour_height,
            store,
            view: ViewState::new(options.default_view, anchor, filter),
            drag: DragEngine::new(options.minute_policy, options.cascade_mode),
            today: now,
            observer,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.view.mode
    }

    pub fn anchor(&self) -> NaiveDateTime {
        self.view.anchor
    }

    pub fn anchor_date(&self) -> NaiveDate {
        self.view.anchor.date()
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn today(&self) -> NaiveDateTime {
        self.today
    }

    pub fn is_today(&self, date: NaiveDate) -> bool {
        self.today.date() == date
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn hour_height(&self) -> f32 {
        self.hour_height
    }

    pub fn hotkeys_enabled(&self) -> bool {
        self.enable_hotkeys
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn events(&self) -> &[CalendarEvent] {
        self.store.events()
    }

    pub fn selected_owner_ids(&self) -> &BTreeSet<String> {
        self.view.filter.selected()
    }

    pub fn is_owner_selected(&self, owner_id: &str) -> bool {
        self.view.filter.is_selected(owner_id)
    }

    /// Switch view. Fires `on_change_view` even when the mode is unchanged.
    /// An active drag is cancelled.
    pub fn set_mode(&mut self, mode: ViewMode) {
        if let Some(context) = self.drag.active() {
            log::debug!("Drag of {} cancelled by view change", context.event_id);
            self.drag.cancel();
        }
        let previous = self.view.set_mode(mode);
        log::debug!("View {} -> {}", previous, mode);
        self.observer.on_change_view(mode);
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.view.navigate(direction);
    }

    pub fn next(&mut self) {
        self.navigate(Direction::Next);
    }

    pub fn prev(&mut self) {
        self.navigate(Direction::Prev);
    }

    /// Jump to the "today" captured at construction or at the last refresh.
    pub fn jump_to_today(&mut self) {
        self.view.jump_to(navigation::today(self.view.mode, self.today));
    }

    /// Re-capture "today", e.g. after a long-lived session crosses midnight.
    pub fn refresh_today(&mut self, now: NaiveDateTime) {
        self.today = now;
    }

    /// Set the anchor directly (a date picker, a click on a year cell).
    pub fn set_anchor(&mut self, anchor: NaiveDateTime) {
        self.view.jump_to(anchor);
    }

    pub fn toggle_owner(&mut self, owner_id: &str) {
        self.view.filter.toggle_owner(owner_id);
    }

    pub fn set_selected_owners<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.view.filter.set_selected(ids);
    }

    /// Replace the event list, for embedders controlling events themselves.
    ///
    /// An in-flight drag survives; if its event is gone the drop cancels.
    pub fn replace_events(&mut self, events: Vec<CalendarEvent>) {
        self.store.replace_all(events);
        self.store.audit(&self.people);
    }

    /// Apply a keyboard shortcut. Returns whether it did anything.
    pub fn handle_hotkey(&mut self, key: Hotkey) -> bool {
        if !self.enable_hotkeys {
            return false;
        }

        match key.action() {
            Some(HotkeyAction::Navigate(direction)) => self.navigate(direction),
            Some(HotkeyAction::Today) => self.jump_to_today(),
            Some(HotkeyAction::SetMode(mode)) => self.set_mode(mode),
            None => return false,
        }
        true
    }

    /// Start dragging an event by id. Unknown ids are ignored.
    pub fn begin_drag(&mut self, event_id: &str) -> bool {
        match self.store.get(event_id) {
            Some(event) => {
                self.drag.begin(event);
                true
            }
            None => {
                log::debug!("Drag start ignored: unknown event {}", event_id);
                false
            }
        }
    }

    pub fn active_drag(&self) -> Option<&DragContext> {
        self.drag.active()
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// End the active drag on `target`.
    ///
    /// A move commits one store update and then fires `on_update_event` once
    /// per changed event.
    pub fn drop(&mut self, target: Option<DropTarget>) -> DropOutcome {
        let outcome = self.drag.drop(target, &mut self.store);
        if let DropOutcome::Moved(changed) = &outcome {
            for event in changed {
                self.observer.on_update_event(event);
            }
        }
        outcome
    }

    /// Activate an event. Unknown ids are ignored.
    pub fn click_event(&mut self, event_id: &str) {
        match self.store.get(event_id) {
            Some(event) => self.observer.on_event_click(event),
            None => log::debug!("Click ignored: unknown event {}", event_id),
        }
    }

    /// Activate an empty slot: an hour cell (`Some(hour)`) or a date cell,
    /// which requests an appointment at noon.
    pub fn activate_slot(&mut self, date: NaiveDate, hour: Option<u32>) {
        let at = at_hour(date, hour.unwrap_or(DATE_CELL_APPOINTMENT_HOUR));
        self.observer.on_add_appointment(at);
    }

    /// Visible events starting in one hour cell.
    pub fn visible_events_for_hour(&self, date: NaiveDate, hour: u32) -> Vec<&CalendarEvent> {
        self.store
            .for_hour(self.view.filter.selected(), date, hour)
            .collect()
    }

    /// Visible events starting on `date`, as month-cell markers.
    pub fn visible_events_for_day(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        day_markers(self.store.for_day(self.view.filter.selected(), date), date)
    }

    pub fn person_for(&self, event: &CalendarEvent) -> Option<&Person> {
        find_person(&self.people, &event.owner_id)
    }

    pub fn color_for(&self, event: &CalendarEvent) -> ColorTag {
        ColorTag::resolve(self.person_for(event).and_then(|p| p.color), event.color)
    }

    /// Heading for the current mode and anchor.
    pub fn title(&self) -> String {
        format_title(self.view.mode, self.anchor_date(), self.locale)
    }

    pub fn weekday_labels(&self) -> Vec<String> {
        weekday_labels(self.locale)
    }

    pub fn month_grid(&self) -> Vec<NaiveDate> {
        month_grid(self.anchor_date())
    }

    pub fn week_days(&self) -> Vec<NaiveDate> {
        week_days(self.anchor_date())
    }

    /// Month grids for January to December of the anchor's year.
    pub fn year_grids(&self) -> Vec<Vec<NaiveDate>> {
        let year = self.anchor_date().year();
        (1..=12)
            .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
            .map(month_grid)
            .collect()
    }
}

impl std::fmt::Debug for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calendar")
            .field("view", &self.view)
            .field("today", &self.today)
            .field("events", &self.store.len())
            .field("drag", self.drag.state())
            .finish_non_exhaustive()
    }
}
