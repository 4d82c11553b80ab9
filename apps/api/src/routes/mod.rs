pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::compliance::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/compliance/check",
            post(handlers::handle_check_document),
        )
        .route("/api/v1/compliance/rules", get(handlers::handle_get_rules))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
