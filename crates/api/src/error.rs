//! API Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use monitor::MonitorError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Monitor(#[from] MonitorError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Metrics recorder error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Metrics exporter not installed")]
    MetricsUnavailable,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Monitor(e) => match e {
                MonitorError::DuplicateSubject(_) | MonitorError::NotDispatched(_) => {
                    StatusCode::CONFLICT
                }
                MonitorError::UnknownSubject(_)
                | MonitorError::UnknownDevice(_)
                | MonitorError::UnknownAlert(_) => StatusCode::NOT_FOUND,
                MonitorError::InvalidRanges(_) => StatusCode::UNPROCESSABLE_ENTITY,
            },
            ApiError::MetricsUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Config(_) | ApiError::Metrics(_) | ApiError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
