use std::collections::BTreeSet;

use serde::Serialize;

use crate::pipeline::transform::odds;
use crate::pipeline::types::SlotRecord;

/// Overview of a loaded reservation table, logged by `inspect`.
#[derive(Debug, Default, Serialize)]
pub struct TableSummary {
    pub source: Option<String>,
    pub rows: usize,
    pub days: Vec<u8>,
    pub slots: Vec<String>,
    pub table_sizes: Vec<u32>,

    // odds across all rows, before any filtering
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

impl TableSummary {
    pub fn from_records(records: &[SlotRecord]) -> Self {
        let mut days = BTreeSet::new();
        let mut slots = BTreeSet::new();
        let mut sizes = BTreeSet::new();
        let mut min_value: Option<f64> = None;
        let mut max_value: Option<f64> = None;

        for r in records {
            days.insert(r.day_of_week);
            slots.insert(r.table_slot.clone());
            sizes.insert(r.table_size);

            let v = odds(r);
            min_value = Some(min_value.map_or(v, |m| m.min(v)));
            max_value = Some(max_value.map_or(v, |m| m.max(v)));
        }

        TableSummary {
            source: None,
            rows: records.len(),
            days: days.into_iter().collect(),
            slots: slots.into_iter().collect(),
            table_sizes: sizes.into_iter().collect(),
            min_value,
            max_value,
        }
    }

    /// Set where the table was loaded from
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}
