//! Axum route handlers for the Layout API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::layout::packer::pack_slides;
use crate::layout::slide_fill::{analyze_plan, PlanFillReport};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PackRequest {
    pub weights: Vec<u32>,
    /// Lines per slide. Falls back to the configured default.
    pub capacity: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct PackResponse {
    pub capacity: u32,
    pub slide_count: usize,
    pub slides: Vec<Vec<usize>>,
    pub fill: PlanFillReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/layout/pack
///
/// Packs raw item weights into slides and returns the index assignment per slide.
pub async fn handle_pack(
    State(state): State<AppState>,
    Json(request): Json<PackRequest>,
) -> Result<Json<PackResponse>, AppError> {
    let capacity = request.capacity.unwrap_or(state.config.lines_per_slide);
    if capacity == 0 {
        return Err(AppError::Validation(
            "capacity must be a positive number of lines".to_string(),
        ));
    }

    let plan = pack_slides(&request.weights, capacity);
    if plan.is_empty() {
        debug!("Layout request had no items");
    }
    let fill = analyze_plan(&plan, &request.weights, capacity);
    debug!(
        items = request.weights.len(),
        slides = plan.slide_count(),
        lower_bound = fill.lower_bound_slides,
        "Packed layout request"
    );

    Ok(Json(PackResponse {
        capacity,
        slide_count: plan.slide_count(),
        slides: plan.assignments(),
        fill,
    }))
}
