//! Readiness probe.
//!
//! Served on both `/healthz` and `/api/healthz`. The probe has no
//! dependencies to check, so a response at all means the process is ready.

use axum::{routing::get, Router};

use crate::http::server::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(readiness))
        .route("/api/healthz", get(readiness))
}

/// `GET /healthz`: plain-text `OK`.
pub async fn readiness() -> &'static str {
    "OK"
}
