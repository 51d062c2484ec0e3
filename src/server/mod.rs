//! HTTP server.
//!
//! This module provides:
//! - The axum router over a [`WordweaveService`] (`router`)
//! - Endpoint handlers and shared state (`handlers`)
//! - The JSON response envelope and error mapping (`envelope`)
//! - Configuration types (`config`)
//!
//! Routes: `POST /generate`, `POST /analyze-theme`, `GET /health`, and a
//! fixed `OPTIONS` reply on each of them.

pub mod config;
pub mod envelope;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::routing::{get, post};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub use envelope::{ApiError, Envelope};
pub use handlers::AppState;

use crate::service::WordweaveService;

const ALLOW_ORIGIN: &str = "*";
const ALLOW_HEADERS: &str = "Content-Type,X-API-Key,Authorization";
const ALLOW_METHODS: &str = "GET,POST,OPTIONS";

/// Build the router with CORS headers, request tracing and a body size limit.
///
/// The CORS headers are fixed and set on every response, preflight
/// included, so `OPTIONS` reaches the route's own handler.
pub fn router(service: Arc<WordweaveService>, max_body_bytes: usize) -> Router {
    let state = AppState { service };

    Router::new()
        .route(
            "/generate",
            post(handlers::generate).options(handlers::preflight),
        )
        .route(
            "/analyze-theme",
            post(handlers::analyze_theme).options(handlers::preflight),
        )
        .route(
            "/health",
            get(handlers::health).options(handlers::preflight),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(TraceLayer::new_for_http())
}
