// ============================
// crates/backend-lib/src/handlers/password.rs
// ============================
//! Password validation handler.
use crate::error::AppError;
use crate::metrics::{
    VALIDATION_ACCEPTED, VALIDATION_MALFORMED, VALIDATION_REJECTED, VALIDATION_REQUESTS,
};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use metrics::counter;
use passgate_common::{PasswordRequest, PasswordResponse};
use tracing::info;

/// Handle `POST /v1/api/password-validate`.
///
/// Bodies that do not decode into a [`PasswordRequest`] are rejected here and
/// never reach the validator.
pub async fn validate_password(
    State(state): State<AppState>,
    payload: Result<Json<PasswordRequest>, JsonRejection>,
) -> Result<Json<PasswordResponse>, AppError> {
    counter!(VALIDATION_REQUESTS).increment(1);

    let Json(request) = payload.map_err(|rejection| {
        counter!(VALIDATION_MALFORMED).increment(1);
        AppError::from(rejection)
    })?;

    let valid = state.validator.validate(&request.value);
    if valid {
        counter!(VALIDATION_ACCEPTED).increment(1);
    } else {
        counter!(VALIDATION_REJECTED).increment(1);
    }
    info!(valid, "Password validated");

    Ok(Json(PasswordResponse { valid }))
}
