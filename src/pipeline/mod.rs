//! Reservation odds pipeline.
//!
//! Derives a per-row odds value from the linear model columns, filters by
//! table size, sums per `(day_of_week, table_slot)` and shapes the result
//! into a heatmap. Every call starts from the raw records; nothing is cached.

pub mod aggregate;
pub mod shape;
pub mod transform;
pub mod types;
pub mod utility;

use tracing::debug;

use crate::error::DashboardError;
use crate::pipeline::types::{FilterConfig, Heatmap, SlotRecord};

/// Runs derive -> filter -> aggregate -> shape over `records`.
pub fn run(records: Vec<SlotRecord>, filter: &FilterConfig) -> Result<Heatmap, DashboardError> {
    let valued = transform::derive_values(records);
    let filtered = transform::filter_by_size(valued, filter)?;
    let totals = aggregate::aggregate(&filtered);
    let heatmap = shape::shape(totals)?;

    debug!(
        cells = heatmap.cells.len(),
        num_days = heatmap.num_days,
        num_time_slots = heatmap.num_time_slots,
        "Heatmap shaped"
    );
    Ok(heatmap)
}
