//! Data types flowing through the heatmap pipeline.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One row of the reservation statistics CSV.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SlotRecord {
    pub day_of_week: u8,
    pub table_slot: String,
    pub slope: f64,
    pub intercept: f64,
    pub observation_count: f64,
    pub table_size: u32,
}

/// A record together with its derived odds value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuedRecord {
    pub record: SlotRecord,
    pub value: f64,
}

/// Which table sizes to keep. Both are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FilterConfig {
    #[serde(rename = "size2", default = "enabled")]
    pub include_size_2: bool,
    #[serde(rename = "size4", default = "enabled")]
    pub include_size_4: bool,
}

fn enabled() -> bool {
    true
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            include_size_2: true,
            include_size_4: true,
        }
    }
}

impl FilterConfig {
    pub fn new(include_size_2: bool, include_size_4: bool) -> Self {
        Self {
            include_size_2,
            include_size_4,
        }
    }

    pub fn selected_sizes(&self) -> Vec<u32> {
        let mut sizes = Vec::with_capacity(2);
        if self.include_size_2 {
            sizes.push(2);
        }
        if self.include_size_4 {
            sizes.push(4);
        }
        sizes
    }
}

/// Summed value of one `(day_of_week, table_slot)` group.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotTotal {
    pub day_of_week: u8,
    pub table_slot: String,
    pub value: f64,
}

/// A heatmap cell ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub day_of_week: u8,
    pub day_str: &'static str,
    #[serde(serialize_with = "serialize_slot")]
    pub table_slot: NaiveTime,
    pub table_slot_str: String,
    #[serde(rename = "Value")]
    pub value: f64,
}

fn serialize_slot<S: serde::Serializer>(slot: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&slot.format("%H:%M:%S"))
}

/// Shaped heatmap: cells plus axis orders and pixel dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub cells: Vec<HeatmapCell>,
    /// Weekday labels ordered by day code.
    pub day_order: Vec<&'static str>,
    /// Slot labels ordered by time of day.
    pub slot_order: Vec<String>,
    pub num_days: usize,
    pub num_time_slots: usize,
    pub width: u32,
    pub height: u32,
}

impl Heatmap {
    pub fn values(&self) -> Vec<f64> {
        self.cells.iter().map(|c| c.value).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
