use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::{error::AppResult, services::build_profile, state::AppState};

/// A student's derived interest profile
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub student_id: String,
    /// Enrolled course ids, sorted for stable output
    pub enrolled: Vec<String>,
    pub tag_counts: HashMap<String, u32>,
    pub category_counts: HashMap<String, u32>,
    /// Enrollments skipped because they referenced a missing course
    pub broken_references: usize,
}

/// Builds and returns the student's profile from the current snapshot.
///
/// An unknown student simply has an empty profile; that is a valid state,
/// not a 404.
pub async fn profile(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> AppResult<Json<ProfileResponse>> {
    let snapshot = state.store.snapshot().await?;
    let build = build_profile(&student_id, &snapshot.enrollments, &snapshot.courses);

    let mut enrolled: Vec<String> = build.profile.enrolled.into_iter().collect();
    enrolled.sort();

    Ok(Json(ProfileResponse {
        student_id: build.profile.student_id,
        enrolled,
        tag_counts: build.profile.tag_counts,
        category_counts: build.profile.category_counts,
        broken_references: build.broken_references,
    }))
}
