//! Turns slot totals into display cells: weekday names, slot labels, axis
//! orders and the grid's pixel size.

use std::collections::BTreeMap;

use chrono::{NaiveTime, Timelike};

use crate::error::DashboardError;
use crate::pipeline::types::{Heatmap, HeatmapCell, SlotTotal};

/// Edge length of one heatmap square, in pixels.
pub const SQUARE_SIZE: u32 = 40;

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Maps a day code (Sunday = 1 ... Saturday = 7) to its name.
pub fn weekday_name(day_of_week: u8) -> Option<&'static str> {
    match day_of_week {
        1..=7 => Some(WEEKDAYS[usize::from(day_of_week) - 1]),
        _ => None,
    }
}

/// Parses a 24-hour `HH:MM` slot.
pub fn parse_slot(slot: &str) -> Result<NaiveTime, DashboardError> {
    NaiveTime::parse_from_str(slot, "%H:%M").map_err(|source| DashboardError::InvalidSlot {
        slot: slot.to_string(),
        source,
    })
}

/// Formats a slot as `"{hour}:{minute:02} AM|PM"`.
///
/// The hour is printed as-is, so 13:00 reads "13:00 PM"; only the suffix
/// follows the noon boundary.
pub fn slot_label(slot: NaiveTime) -> String {
    let suffix = if slot.hour() < 12 { "AM" } else { "PM" };
    format!("{}:{:02} {}", slot.hour(), slot.minute(), suffix)
}

/// Builds display cells, axis orders and grid dimensions from slot totals.
///
/// # Errors
///
/// [`DashboardError::InvalidDay`] for day codes outside 1..=7 and
/// [`DashboardError::InvalidSlot`] for slots that are not `HH:MM`.
pub fn shape(totals: Vec<SlotTotal>) -> Result<Heatmap, DashboardError> {
    let mut cells = Vec::with_capacity(totals.len());
    let mut days: BTreeMap<u8, &'static str> = BTreeMap::new();
    let mut slots: BTreeMap<NaiveTime, String> = BTreeMap::new();

    for total in totals {
        let day_str =
            weekday_name(total.day_of_week).ok_or(DashboardError::InvalidDay(total.day_of_week))?;
        let table_slot = parse_slot(&total.table_slot)?;
        let table_slot_str = slot_label(table_slot);

        days.insert(total.day_of_week, day_str);
        slots.insert(table_slot, table_slot_str.clone());

        cells.push(HeatmapCell {
            day_of_week: total.day_of_week,
            day_str,
            table_slot,
            table_slot_str,
            value: total.value,
        });
    }

    let day_order: Vec<&'static str> = days.into_values().collect();
    let slot_order: Vec<String> = slots.into_values().collect();

    let num_days = day_order.len();
    let num_time_slots = slot_order.len();

    Ok(Heatmap {
        cells,
        day_order,
        slot_order,
        num_days,
        num_time_slots,
        width: SQUARE_SIZE * num_time_slots as u32,
        height: SQUARE_SIZE * num_days as u32,
    })
}
