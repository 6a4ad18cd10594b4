pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::layout::handlers as layout_handlers;
use crate::milestones::handlers as milestone_handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Layout API
        .route("/api/v1/layout/pack", post(layout_handlers::handle_pack))
        // Milestone report API
        .route(
            "/api/v1/milestones/deck",
            post(milestone_handlers::handle_build_deck),
        )
        .fallback(not_found)
        .with_state(state)
}
