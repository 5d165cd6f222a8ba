use tracing::debug;

use crate::error::DashboardError;
use crate::pipeline::types::{FilterConfig, SlotRecord, ValuedRecord};

/// `slope * observation_count + intercept`, without fused multiply-add.
pub fn odds(record: &SlotRecord) -> f64 {
    (record.slope * record.observation_count) + record.intercept
}

/// Attaches the odds value to every record, keeping row order.
pub fn derive_values(records: Vec<SlotRecord>) -> Vec<ValuedRecord> {
    records
        .into_iter()
        .map(|record| {
            let value = odds(&record);
            ValuedRecord { record, value }
        })
        .collect()
}

/// Keeps rows whose table size is selected.
///
/// # Errors
///
/// Returns [`DashboardError::NoSelection`] when both sizes are switched off.
pub fn filter_by_size(
    rows: Vec<ValuedRecord>,
    filter: &FilterConfig,
) -> Result<Vec<ValuedRecord>, DashboardError> {
    let sizes = filter.selected_sizes();
    if sizes.is_empty() {
        return Err(DashboardError::NoSelection);
    }

    let before = rows.len();
    let kept: Vec<ValuedRecord> = rows
        .into_iter()
        .filter(|row| sizes.contains(&row.record.table_size))
        .collect();

    debug!(?sizes, before, after = kept.len(), "Filtered by table size");
    Ok(kept)
}
