use axum::{body::Bytes, extract::State, Json};

use crate::chirps::ChirpResponse;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// `POST /api/validate_chirp`
///
/// The raw body is taken as bytes so that JSON syntax errors and shape
/// errors map to distinct messages instead of a framework rejection.
pub async fn validate_chirp(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChirpResponse>, ApiError> {
    let response = state.validator.validate(&body)?;
    tracing::debug!(
        masked = response.cleaned_body.matches(crate::chirps::MASK).count(),
        "Chirp accepted"
    );
    Ok(Json(response))
}
