//! Collision resolution after a drop.
//!
//! Events on the dropped event's day that overlap its new interval are pushed
//! later so each starts exactly when the dropped event ends. Owners are
//! ignored: every event of the calendar can collide.

use chrono::NaiveDateTime;

use crate::models::event::CalendarEvent;
use crate::models::settings::CascadeMode;

/// An interval other events must not overlap.
struct Blocker {
    index: usize,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// Move the event `moved_id` to `[new_start, new_end)` and push colliding
/// events forward.
///
/// Returns the full updated event list (store order kept) and the changed
/// events: the moved event first, then pushed events in store order.
///
/// With [`CascadeMode::SinglePass`] only the moved event pushes others, so a
/// pushed event may land on top of a third event. [`CascadeMode::Settle`]
/// keeps going until no pushed event overlaps another on its day.
pub fn resolve_collisions(
    events: &[CalendarEvent],
    moved_id: &str,
    new_start: NaiveDateTime,
    new_end: NaiveDateTime,
    mode: CascadeMode,
) -> (Vec<CalendarEvent>, Vec<CalendarEvent>) {
    let mut working = events.to_vec();
    let Some(moved_index) = working.iter().position(|event| event.id == moved_id) else {
        return (working, Vec::new());
    };

    working[moved_index].start = new_start;
    working[moved_index].end = new_end;

    let mut pushed = vec![false; working.len()];
    let mut blockers = vec![Blocker {
        index: moved_index,
        start: new_start,
        end: new_end,
    }];

    match mode {
        CascadeMode::SinglePass => {
            for index in 0..working.len() {
                if index == moved_index {
                    continue;
                }
                if let Some(end) = blocking_end(&working[index], &blockers[..1], index) {
                    pushed[index] |= push_to(&mut working[index], end);
                }
            }
        }
        CascadeMode::Settle => {
            // Every push moves an event strictly later; the cap only guards
            // against pathological input such as zero-length events.
            let max_pushes = working.len().saturating_mul(working.len()).max(1);
            let mut pushes = 0;
            loop {
                let hit = (0..working.len())
                    .filter(|&index| index != moved_index)
                    .find_map(|index| {
                        blocking_end(&working[index], &blockers, index).map(|end| (index, end))
                    });

                let Some((index, end)) = hit else { break };

                if !push_to(&mut working[index], end) {
                    break;
                }
                pushed[index] = true;
                match blockers.iter_mut().find(|blocker| blocker.index == index) {
                    Some(blocker) => {
                        blocker.start = working[index].start;
                        blocker.end = working[index].end;
                    }
                    None => blockers.push(Blocker {
                        index,
                        start: working[index].start,
                        end: working[index].end,
                    }),
                }

                pushes += 1;
                if pushes >= max_pushes {
                    log::warn!("Collision cascade stopped after {} pushes", pushes);
                    break;
                }
            }
        }
    }

    let mut changed = vec![working[moved_index].clone()];
    changed.extend(
        working
            .iter()
            .enumerate()
            .filter(|(index, _)| pushed[*index])
            .map(|(_, event)| event.clone()),
    );

    (working, changed)
}

/// End of the first blocker that `event` collides with, if any.
fn blocking_end(event: &CalendarEvent, blockers: &[Blocker], index: usize) -> Option<NaiveDateTime> {
    blockers
        .iter()
        .filter(|blocker| blocker.index != index)
        .find(|blocker| {
            event.start_date() == blocker.start.date() && event.overlaps(blocker.start, blocker.end)
        })
        .map(|blocker| blocker.end)
}

/// Shift `event` forward so it starts at `start`, keeping its duration.
/// Leaves it in place and returns `false` if its end would overflow.
fn push_to(event: &mut CalendarEvent, start: NaiveDateTime) -> bool {
    match event.moved_to(start) {
        Some(moved) => {
            *event = moved;
            true
        }
        None => {
            log::warn!("Event '{}' cannot be pushed past {}", event.id, start);
            false
        }
    }
}
