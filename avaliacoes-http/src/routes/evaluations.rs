use crate::handlers::{create_evaluation, get_evaluation, list_evaluations};
use crate::server::AppState;
use axum::{Router, routing::get};

/// Create the evaluation routes with state
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/students/{student_id}/evaluations",
            get(list_evaluations).post(create_evaluation),
        )
        .route(
            "/students/{student_id}/evaluations/{evaluation_id}",
            get(get_evaluation),
        )
}
