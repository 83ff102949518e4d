//! Time utilities: slot index <-> wall clock, hour formatting.

use crate::models::slot_sequence::{MINUTES_PER_SLOT, SLOT_COUNT};
use chrono::{NaiveTime, Timelike};

/// Wall-clock start of a slot (`None` past the last slot)
pub fn slot_time(slot: usize) -> Option<NaiveTime> {
    if slot >= SLOT_COUNT {
        return None;
    }
    let minutes = slot as u32 * MINUTES_PER_SLOT;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// "HH:MM" label of a slot boundary; the end of the day is "24:00".
pub fn slot_label(slot: usize) -> String {
    match slot_time(slot) {
        Some(t) => t.format("%H:%M").to_string(),
        None => "24:00".to_string(),
    }
}

/// Slot containing a wall-clock time
pub fn slot_of(time: NaiveTime) -> usize {
    let minutes = time.hour() * 60 + time.minute();
    (minutes / MINUTES_PER_SLOT) as usize
}

/// Parse "HH:MM" (or "24:00") into a slot boundary index
pub fn parse_slot_boundary(s: &str) -> Option<usize> {
    if s.trim() == "24:00" {
        return Some(SLOT_COUNT);
    }
    let t = NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()?;
    if t.minute() % MINUTES_PER_SLOT != 0 {
        return None;
    }
    Some(slot_of(t))
}
