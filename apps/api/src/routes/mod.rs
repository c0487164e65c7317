pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route("/api/v1/layout/:card_count", get(handlers::handle_layout))
        .route(
            "/api/v1/templates/:id/preview",
            post(handlers::handle_preview),
        )
        .route("/api/v1/templates/:id/export", post(handlers::handle_export))
        .route("/api/v1/export", post(handlers::handle_export_default))
        .with_state(state)
}
