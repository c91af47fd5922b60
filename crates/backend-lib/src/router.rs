// ============================
// passgate-lib/src/router.rs
// ============================
//! HTTP router.
use crate::handlers;
use crate::AppState;
use axum::{extract::DefaultBodyLimit, routing::post, Router};
use passgate_common::VALIDATE_PASSWORD_PATH;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new().route(VALIDATE_PASSWORD_PATH, post(handlers::validate_password));
    info!(path = VALIDATE_PASSWORD_PATH, method = "POST", "Registered endpoint");

    router
        .layer(DefaultBodyLimit::max(state.settings.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
