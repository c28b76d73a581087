use axum::{http::StatusCode, middleware, routing::get, routing::post, Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{observability, state::AppState};

pub mod courses;
pub mod enrollments;
pub mod recommendations;
pub mod students;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(observability::request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(observability::request_span))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(courses::list).post(courses::create))
        .route("/courses/search", get(courses::search))
        .route("/courses/:course_id", get(courses::get_by_id))
        .route(
            "/enrollments",
            get(enrollments::list).post(enrollments::create),
        )
        .route("/students/:student_id/profile", get(students::profile))
        .route("/recommendations", post(recommendations::recommend))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
