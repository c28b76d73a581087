use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Course, CourseDocument},
    services::search::{search_catalog, SearchHit},
    state::AppState,
};

const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Lists the full catalog in insertion order
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    Ok(Json(state.store.list_courses().await?))
}

/// Adds a course to the catalog
pub async fn create(
    State(state): State<AppState>,
    Json(document): Json<CourseDocument>,
) -> AppResult<(StatusCode, Json<Course>)> {
    let course = state.store.insert_course(document).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// Fetches a single course by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> AppResult<Json<Course>> {
    state
        .store
        .get_course(&course_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("course {} not found", course_id)))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<usize>,
}

/// Free-text course search over title, description, and tags
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<SearchHit>>> {
    let catalog = state.store.list_courses().await?;
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    Ok(Json(search_catalog(&catalog, &params.q, limit)))
}
