//! Error type shared by the loader, the pipeline and the renderers.

use thiserror::Error;

use crate::parser::REQUIRED_COLUMNS;

/// Everything that can stop a heatmap from being rendered.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("CSV file not found at {path}. Please check the path and try again.")]
    MissingFile { path: String },

    #[error("The dataset must contain the following columns: {}", format_columns(.required))]
    Schema { required: Vec<String> },

    #[error("At least one table size must be selected for visualization.")]
    NoSelection,

    #[error("Invalid table slot {slot:?}: expected HH:MM")]
    InvalidSlot {
        slot: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid day_of_week {0}: expected 1 (Sunday) through 7 (Saturday)")]
    InvalidDay(u8),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(String),
}

/// How a failure is surfaced to the person looking at the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl DashboardError {
    pub fn schema() -> Self {
        DashboardError::Schema {
            required: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Only an empty size selection is a warning; the user can fix it from the sidebar.
    pub fn severity(&self) -> Severity {
        match self {
            DashboardError::NoSelection => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

fn format_columns(columns: &[String]) -> String {
    let quoted: Vec<String> = columns.iter().map(|c| format!("'{c}'")).collect();
    format!("[{}]", quoted.join(", "))
}
