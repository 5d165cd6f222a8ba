//! Interactive dashboard over HTTP.
//!
//! Each request re-reads the CSV and recomputes the heatmap for the filter in
//! its query string (`size2`, `size4`, both default to `true`). The only
//! shared state is the immutable source location.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::{error, info, warn};

use crate::chart::{PageBody, PageState, build_spec, render_page};
use crate::dashboard::refresh;
use crate::error::{DashboardError, Severity};
use crate::fetch::CsvSource;
use crate::pipeline::types::FilterConfig;

#[derive(Clone)]
pub struct AppState {
    source: Arc<CsvSource>,
}

impl AppState {
    pub fn new(source: CsvSource) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/chart.json", get(chart_json))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Binds `addr` and serves the dashboard until the process is stopped.
pub async fn serve(source: CsvSource, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, source = %source, "Dashboard listening");
    axum::serve(listener, router(AppState::new(source))).await?;
    Ok(())
}

fn status_for(err: &DashboardError) -> StatusCode {
    match err {
        DashboardError::MissingFile { .. } => StatusCode::NOT_FOUND,
        DashboardError::NoSelection => StatusCode::BAD_REQUEST,
        DashboardError::Schema { .. }
        | DashboardError::InvalidDay(_)
        | DashboardError::InvalidSlot { .. }
        | DashboardError::Csv(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DashboardError::Io(_) | DashboardError::Http(_) => StatusCode::BAD_GATEWAY,
    }
}

fn log_failure(err: &DashboardError) {
    match err.severity() {
        Severity::Warning => warn!(error = %err, "Nothing to render"),
        Severity::Error => error!(error = %err, "Heatmap refresh failed"),
    }
}

/// The dashboard page. Failures are shown inside the page, so this is always 200
/// unless the page itself cannot be rendered.
#[tracing::instrument(skip_all)]
pub async fn index(State(state): State<AppState>, Query(filter): Query<FilterConfig>) -> Response {
    let spec = refresh(&state.source, &filter).await.map(|h| build_spec(&h));
    if let Err(e) = &spec {
        log_failure(e);
    }

    let page = render_page(&PageState {
        filter,
        body: PageBody::from_result(&spec),
        interactive: true,
    });

    match page {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}

/// The bare Vega-Lite spec, or `{"error": ...}` with a matching status.
#[tracing::instrument(skip_all)]
pub async fn chart_json(
    State(state): State<AppState>,
    Query(filter): Query<FilterConfig>,
) -> Response {
    match refresh(&state.source, &filter).await {
        Ok(heatmap) => Json(build_spec(&heatmap)).into_response(),
        Err(e) => {
            log_failure(&e);
            (status_for(&e), Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

pub async fn healthz() -> &'static str {
    "ok"
}
