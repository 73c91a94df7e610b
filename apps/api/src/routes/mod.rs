pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::comparison::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/compare", post(handlers::handle_compare))
        .route(
            "/api/v1/compare/:section",
            post(handlers::handle_compare_section),
        )
        .with_state(state)
}
