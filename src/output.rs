//! Output formatting and persistence for rendered heatmaps.
//!
//! Supports Vega-Lite JSON, a standalone HTML page, and a CSV of the shaped cells.

use anyhow::Result;
use clap::ValueEnum;
use csv::WriterBuilder;
use std::io::Write;
use tracing::{debug, info};

use crate::chart::{PageBody, PageState, build_spec, render_page};
use crate::error::DashboardError;
use crate::pipeline::types::{FilterConfig, Heatmap};
use crate::stats::TableSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Vega-Lite v5 chart spec
    VegaLite,
    /// Standalone HTML page embedding the chart
    Html,
    /// Aggregated heatmap cells
    Csv,
}

/// Logs a heatmap using Rust's debug pretty-print format.
pub fn print_pretty(heatmap: &Heatmap) {
    debug!("{:#?}", heatmap);
}

/// Logs a table summary as pretty-printed JSON.
pub fn print_json(summary: &TableSummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Renders one pipeline outcome in `format`.
///
/// HTML pages show a failed outcome as a message instead of a chart; the other
/// formats return the failure as an error.
pub fn render_artifact(
    format: OutputFormat,
    filter: &FilterConfig,
    outcome: Result<Heatmap, DashboardError>,
) -> Result<String> {
    match format {
        OutputFormat::Html => {
            let spec = outcome.map(|heatmap| build_spec(&heatmap));
            let page = render_page(&PageState {
                filter: *filter,
                body: PageBody::from_result(&spec),
                interactive: false,
            })?;
            Ok(page)
        }
        OutputFormat::VegaLite => {
            let spec = build_spec(&outcome?);
            Ok(serde_json::to_string_pretty(&spec)?)
        }
        OutputFormat::Csv => cells_to_csv(&outcome?),
    }
}

/// Serializes heatmap cells as CSV with a header row.
pub fn cells_to_csv(heatmap: &Heatmap) -> Result<String> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    for cell in &heatmap.cells {
        writer.serialize(cell)?;
    }
    writer.flush()?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes `contents` to `path`, replacing any previous file, or to stdout when no path is given.
pub fn write_output(path: Option<&str>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            debug!(path, bytes = contents.len(), "Writing output file");
            std::fs::write(path, contents)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
