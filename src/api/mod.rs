//! Public JSON API.

pub mod handlers;

use axum::{routing::post, Router};

use crate::http::server::AppState;
use self::handlers::validate_chirp;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/validate_chirp", post(validate_chirp))
}
