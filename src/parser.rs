//! CSV loader and schema check for reservation slot statistics.

use csv::{ReaderBuilder, Trim};
use tracing::{debug, warn};

use crate::error::DashboardError;
use crate::pipeline::types::SlotRecord;

/// Columns every input file must carry, in the order they are reported.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "day_of_week",
    "table_slot",
    "slope",
    "intercept",
    "observation_count",
    "table_size",
];

/// Parses CSV bytes into slot records, in file order.
///
/// # Errors
///
/// Returns [`DashboardError::Schema`] if any of [`REQUIRED_COLUMNS`] is absent
/// from the header row, and [`DashboardError::Csv`] if a row cannot be decoded.
pub fn parse_table(bytes: &[u8]) -> Result<Vec<SlotRecord>, DashboardError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::Headers).from_reader(bytes);

    let headers = rdr.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        warn!(?missing, "CSV is missing required columns");
        return Err(DashboardError::schema());
    }

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: SlotRecord = result?;
        rows.push(record);
    }

    debug!(rows = rows.len(), "Parsed reservation table");
    Ok(rows)
}
