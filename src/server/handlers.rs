//! Endpoint handlers.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use super::envelope::{ApiError, Envelope, timestamp};
use crate::service::{HealthReport, WordweaveService};
use crate::types::{AnalysisResult, PoemRecord};
use crate::{validate, version};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WordweaveService>,
}

/// `POST /generate`
pub async fn generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Envelope<PoemRecord>, ApiError> {
    let body = validate::parse_body(&body)?;
    let words = validate::validate_generation(&body)?;
    info!(verb = %words.verb, adjective = %words.adjective, noun = %words.noun, "generate request");

    let outcome = state.service.generate(words).await?;
    Ok(Envelope::ok(outcome.data, outcome.cached))
}

/// `POST /analyze-theme`
pub async fn analyze_theme(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Envelope<AnalysisResult>, ApiError> {
    let body = validate::parse_body(&body)?;
    let request = validate::validate_analysis(&body)?;
    info!(poem_chars = request.poem.chars().count(), "analyze request");

    let outcome = state.service.analyze(request).await?;
    Ok(Envelope::ok(outcome.data, outcome.cached))
}

/// `OPTIONS` on any route.
pub async fn preflight() -> Json<serde_json::Value> {
    Json(json!({ "message": "CORS preflight" }))
}

/// Overall health derived from dependency status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    /// Healthy when all dependencies are, unhealthy when none are.
    pub fn from_report(report: &HealthReport) -> Self {
        match (report.cache, report.model) {
            (true, true) => Self::Healthy,
            (false, false) => Self::Unhealthy,
            _ => Self::Degraded,
        }
    }

    fn label(ok: bool) -> Self {
        if ok { Self::Healthy } else { Self::Unhealthy }
    }
}

#[derive(Debug, Serialize)]
struct DependencyStatus {
    status: HealthStatus,
}

#[derive(Debug, Serialize)]
struct Services {
    cache: DependencyStatus,
    model: DependencyStatus,
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: HealthStatus,
    service: &'static str,
    model: String,
    version: String,
    timestamp: String,
    services: Services,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Response {
    let report = state.service.health().await;
    let status = HealthStatus::from_report(&report);
    let body = HealthBody {
        status,
        service: version::SERVICE_NAME,
        model: state.service.model_id().to_string(),
        version: version::version_string(),
        timestamp: timestamp(),
        services: Services {
            cache: DependencyStatus {
                status: HealthStatus::label(report.cache),
            },
            model: DependencyStatus {
                status: HealthStatus::label(report.model),
            },
        },
    };
    let code = match status {
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    };
    (code, Json(body)).into_response()
}

/// Unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Endpoint not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_rollup() {
        let status = |cache, model| HealthStatus::from_report(&HealthReport { cache, model });
        assert_eq!(status(true, true), HealthStatus::Healthy);
        assert_eq!(status(true, false), HealthStatus::Degraded);
        assert_eq!(status(false, true), HealthStatus::Degraded);
        assert_eq!(status(false, false), HealthStatus::Unhealthy);
    }
}
