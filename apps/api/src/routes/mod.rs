pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::roadmap::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Roadmap page
        .route("/", get(handlers::handle_index))
        .route("/roadmap", post(handlers::handle_submit))
        // Roadmap API
        .route("/api/v1/roadmap", post(handlers::handle_generate))
        .with_state(state)
}
