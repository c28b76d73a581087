use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{ScoredCandidate, ScoringWeights},
    services::{recommend as run_engine, RecommendParams},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub student_id: String,
    /// Defaults to the configured top-N when omitted
    pub top_n: Option<usize>,
    /// Defaults to the configured weights when omitted; partial overrides
    /// fall back per field
    pub weights: Option<ScoringWeights>,
    /// When set, an empty candidate pool yields 422 instead of an empty list
    #[serde(default)]
    pub require_results: bool,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub student_id: String,
    pub recommendations: Vec<ScoredCandidate>,
    pub skipped_enrollments: usize,
}

/// Handler for the recommendations endpoint: fetches a snapshot from the
/// store and runs the scoring engine over it
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<RecommendResponse>> {
    if request.student_id.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "student_id must not be blank".to_string(),
        ));
    }

    let snapshot = state.store.snapshot().await?;
    let params = RecommendParams {
        top_n: request.top_n.unwrap_or(state.config.default_top_n),
        weights: request.weights.unwrap_or_else(|| state.config.weights()),
        require_results: request.require_results,
    };

    let set = run_engine(
        &request.student_id,
        &snapshot.enrollments,
        &snapshot.courses,
        &params,
    )?;

    Ok(Json(RecommendResponse {
        student_id: request.student_id,
        recommendations: set.recommendations,
        skipped_enrollments: set.skipped_enrollments,
    }))
}
