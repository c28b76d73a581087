use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::Enrollment,
    store::NewEnrollment,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub student_id: Option<String>,
}

/// Lists enrollment records, optionally filtered to one student
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Enrollment>>> {
    let enrollments = state
        .store
        .list_enrollments(params.student_id.as_deref())
        .await?;
    Ok(Json(enrollments))
}

/// Records a new enrollment
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<NewEnrollment>,
) -> AppResult<(StatusCode, Json<Enrollment>)> {
    let enrollment = state.store.insert_enrollment(request).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}
