use chrono::{NaiveTime, Timelike};

use crate::models::forecast::ForecastRecord;

use super::grouping::DayGroup;

/// Start hours of the six canonical 3-hour display slots (06-09 through 21-24)
pub const SLOT_STARTS: [u32; 6] = [6, 9, 12, 15, 18, 21];

/// Display labels, one per canonical slot
pub const SLOT_LABELS: [&str; 6] = [
    "6:00 am - 9:00 am",
    "9:00 am - 12:00 pm",
    "12:00 pm - 3:00 pm",
    "3:00 pm - 6:00 pm",
    "6:00 pm - 9:00 pm",
    "9:00 pm - 12:00 am",
];

/// Index of the slot whose window the given start time falls in.
/// None for times before the first slot; the daytime filter upstream keeps
/// such records out of day groups.
pub fn slot_index(time: NaiveTime) -> Option<usize> {
    let hour = time.hour();
    if hour < SLOT_STARTS[0] {
        return None;
    }
    Some((((hour - SLOT_STARTS[0]) / 3) as usize).min(SLOT_LABELS.len() - 1))
}

/// Map a day's records onto the six canonical slots. Slots with no record
/// (the forecast horizon starting or ending mid-day) stay None, so every
/// day renders a fixed-height column.
pub fn align_to_slots(day: &DayGroup) -> [Option<&ForecastRecord>; 6] {
    let mut cells: [Option<&ForecastRecord>; 6] = [None; 6];
    for record in day.records() {
        if let Some(idx) = slot_index(record.time) {
            cells[idx] = Some(record);
        }
    }
    cells
}
