//! CLI entry point for the table odds heatmap.
//!
//! Provides subcommands for rendering the heatmap once, serving the
//! interactive dashboard, and inspecting the input table.

use std::ffi::OsStr;
use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use table_odds::config::Settings;
use table_odds::dashboard::{load_records, refresh};
use table_odds::error::Severity;
use table_odds::fetch::CsvSource;
use table_odds::output::{OutputFormat, print_json, print_pretty, render_artifact, write_output};
use table_odds::pipeline::types::FilterConfig;
use table_odds::server;
use table_odds::stats::TableSummary;
use tracing::{error, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "table_odds")]
#[command(about = "Heatmap of the odds of getting a table, by weekday and time slot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the heatmap once
    Render {
        /// Path or URL of the reservation CSV (overrides TABLE_ODDS_CSV)
        #[arg(short, long, value_name = "FILE_OR_URL")]
        source: Option<String>,

        /// Show Table Size 2
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        size2: bool,

        /// Show Table Size 4
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        size4: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::VegaLite)]
        format: OutputFormat,

        /// File to write to (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Serve the interactive dashboard
    Serve {
        /// Path or URL of the reservation CSV (overrides TABLE_ODDS_CSV)
        #[arg(short, long, value_name = "FILE_OR_URL")]
        source: Option<String>,

        /// Address to listen on (overrides TABLE_ODDS_BIND)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Load and validate the CSV, then log a summary of its contents
    Inspect {
        /// Path or URL of the reservation CSV (overrides TABLE_ODDS_CSV)
        #[arg(short, long, value_name = "FILE_OR_URL")]
        source: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let settings = Settings::from_env()?;

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = Path::new(&settings.log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&settings.log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("table_odds.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            source,
            size2,
            size4,
            format,
            output,
        } => {
            let settings = settings.with_overrides(source, None);
            let source = CsvSource::parse(&settings.csv_source);
            let filter = FilterConfig::new(size2, size4);

            let outcome = refresh(&source, &filter).await;
            let failure = match &outcome {
                Ok(heatmap) => {
                    print_pretty(heatmap);
                    None
                }
                Err(e) => {
                    match e.severity() {
                        Severity::Warning => warn!(error = %e, "Nothing to render"),
                        Severity::Error => error!(error = %e, "Heatmap render failed"),
                    }
                    Some(e.to_string())
                }
            };

            let contents = render_artifact(format, &filter, outcome)?;
            write_output(output.as_deref(), &contents)?;

            if let Some(message) = failure {
                bail!(message);
            }
            info!(?format, output = output.as_deref().unwrap_or("-"), "Heatmap rendered");
        }
        Commands::Serve { source, bind } => {
            let settings = settings.with_overrides(source, bind);
            let source = CsvSource::parse(&settings.csv_source);
            server::serve(source, settings.bind_addr).await?;
        }
        Commands::Inspect { source } => {
            let settings = settings.with_overrides(source, None);
            let source = CsvSource::parse(&settings.csv_source);

            let records = load_records(&source).await?;
            let summary = TableSummary::from_records(&records).with_source(&settings.csv_source);
            print_json(&summary)?;
        }
    }

    Ok(())
}
