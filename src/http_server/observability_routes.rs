//! Observability HTTP Routes
//!
//! Health check and per-request logging.

use std::time::Instant;

use axum::{
    extract::Request, http::StatusCode, middleware::Next, response::IntoResponse,
    response::Response, routing::get, Json, Router,
};
use serde::Serialize;

use crate::observability::{log_event_with_fields, Event};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Middleware logging one HTTP_REQUEST line per request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    log_event_with_fields(
        Event::HttpRequest,
        &[
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("status", response.status().as_str()),
            ("elapsed_us", started.elapsed().as_micros().to_string().as_str()),
        ],
    );

    response
}
