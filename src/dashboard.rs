//! One dashboard interaction: read the CSV, validate it, run the pipeline.

use tracing::info;

use crate::error::DashboardError;
use crate::fetch::{CsvSource, load_csv};
use crate::parser::parse_table;
use crate::pipeline;
use crate::pipeline::types::{FilterConfig, Heatmap, SlotRecord};

/// Loads and validates the reservation table. The source is read in full
/// and released before parsing.
pub async fn load_records(source: &CsvSource) -> Result<Vec<SlotRecord>, DashboardError> {
    let bytes = load_csv(source).await?;
    parse_table(&bytes)
}

/// Re-reads `source` and recomputes the heatmap for `filter`.
#[tracing::instrument(skip_all, fields(source = %source, size2 = filter.include_size_2, size4 = filter.include_size_4))]
pub async fn refresh(source: &CsvSource, filter: &FilterConfig) -> Result<Heatmap, DashboardError> {
    let records = load_records(source).await?;
    let rows = records.len();
    let heatmap = pipeline::run(records, filter)?;
    info!(rows, cells = heatmap.cells.len(), "Heatmap refreshed");
    Ok(heatmap)
}
