//! Vital-Sign Monitor API Server
//!
//! REST API over the scheduling orchestrator: subject registration, reading
//! ingestion, emergency injection, alert listing and acknowledgement, plus a
//! Prometheus scrape endpoint. A background task drains the alert queue once
//! per monitoring cycle.

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use monitor::SchedulingOrchestrator;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod error;
mod routes;
mod settings;
mod telemetry;

pub use error::ApiError;
pub use settings::{AppConfig, DEFAULT_CONFIG_PATH};
pub use telemetry::{install_recorder, MetricsSink};

/// Application state shared across handlers
pub struct AppState {
    /// The scheduling engine; every request goes through this lock
    pub orchestrator: SchedulingOrchestrator,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: Instant,
    /// Prometheus exporter, if a recorder was installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(orchestrator: SchedulingOrchestrator, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            orchestrator,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: Instant::now(),
            metrics,
        }
    }
}

pub type SharedState = Arc<RwLock<AppState>>;

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub subjects: usize,
    pub pending_alerts: usize,
}

/// Create the application router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/statistics", get(routes::statistics::get_statistics))
        .route(
            "/api/v1/subjects",
            get(routes::subjects::list_subjects).post(routes::subjects::create_subject),
        )
        .route("/api/v1/readings", post(routes::readings::post_reading))
        .route("/api/v1/emergencies", post(routes::readings::post_emergency))
        .route("/api/v1/alerts", get(routes::alerts::get_alerts))
        .route("/api/v1/alerts/drain", post(routes::alerts::drain_alerts))
        .route("/api/v1/alerts/:id/ack", post(routes::alerts::acknowledge_alert))
        .route("/metrics", get(routes::statistics::get_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    let stats = state.orchestrator.statistics();

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: vital_types::unix_millis() / 1_000,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        subjects: stats.subject_count,
        pending_alerts: stats.pending_alerts,
    })
}

/// Initialize logging
///
/// Unknown level names fall back to `info`.
pub fn init_logging(
    level: &str,
    json: bool,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let level = level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = FmtSubscriber::builder().with_max_level(level).with_target(true);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    }
}

/// Drain the alert queue every `period`
pub fn spawn_cycle_task(state: SharedState, period: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let mut state = state.write().await;
            let dispatched = state.orchestrator.drain();
            telemetry::record_queue_depth(state.orchestrator.statistics().pending_alerts);
            if !dispatched.is_empty() {
                info!("Cycle drained {} alerts", dispatched.len());
            }
        }
    })
}

/// Run the server
pub async fn run_server(config: AppConfig) -> Result<(), ApiError> {
    let handle = install_recorder()?;

    let mut orchestrator = SchedulingOrchestrator::new(config.monitor.clone());
    orchestrator.add_sink(Box::new(MetricsSink));

    let state = Arc::new(RwLock::new(AppState::new(orchestrator, Some(handle))));
    spawn_cycle_task(state.clone(), Duration::from_millis(config.cycle_interval_ms.max(1)));
    let app = create_router(state);

    info!("Starting API server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
