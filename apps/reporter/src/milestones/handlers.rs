//! Axum route handlers for the Milestone API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::milestones::deck::{build_deck, DeckLayout, DeckSlide};
use crate::models::milestone::Milestone;
use crate::models::period::{PeriodInput, ReportPeriod};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DeckRequest {
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub layout: DeckLayout,
    pub lines_per_slide: Option<u32>,
    pub period: Option<PeriodInput>,
}

#[derive(Debug, Serialize)]
pub struct DeckResponse {
    pub period: Option<ReportPeriod>,
    pub layout: DeckLayout,
    pub lines_per_slide: u32,
    pub active_count: usize,
    pub inactive_count: usize,
    pub slide_count: usize,
    pub slides: Vec<DeckSlide>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/milestones/deck
///
/// Splits milestones into completed/incomplete and assigns them to template slides.
/// The response tells the renderer how many copies of the milestone slide to make
/// and what goes on each.
pub async fn handle_build_deck(
    State(state): State<AppState>,
    Json(request): Json<DeckRequest>,
) -> Result<Json<DeckResponse>, AppError> {
    let period = request
        .period
        .as_ref()
        .map(ReportPeriod::parse)
        .transpose()?;

    let lines_per_slide = request
        .lines_per_slide
        .unwrap_or(state.config.lines_per_slide);
    if lines_per_slide == 0 {
        return Err(AppError::Validation(
            "lines_per_slide must be a positive number of lines".to_string(),
        ));
    }

    let deck = build_deck(
        &request.milestones,
        &state.config.active_milestone_color,
        lines_per_slide,
        request.layout,
    );
    info!(
        milestones = request.milestones.len(),
        slides = deck.slide_count(),
        period_days = ?period.map(|p| p.days()),
        "Milestone deck assembled"
    );

    Ok(Json(DeckResponse {
        period,
        layout: deck.layout,
        lines_per_slide: deck.lines_per_slide,
        active_count: deck.active_count,
        inactive_count: deck.inactive_count,
        slide_count: deck.slide_count(),
        slides: deck.slides,
    }))
}
