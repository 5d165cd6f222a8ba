//! Heatmap rendering: quantile color scale, Vega-Lite spec and HTML page.

pub mod html;
pub mod scale;
pub mod spec;

pub use html::{PageBody, PageState, render_page};
pub use spec::{ChartSpec, build_spec};

use crate::error::DashboardError;
use crate::pipeline;
use crate::pipeline::types::{FilterConfig, SlotRecord};

/// Runs the pipeline and builds the chart in one go.
pub fn render_chart(
    records: Vec<SlotRecord>,
    filter: &FilterConfig,
) -> Result<ChartSpec, DashboardError> {
    let heatmap = pipeline::run(records, filter)?;
    Ok(build_spec(&heatmap))
}
