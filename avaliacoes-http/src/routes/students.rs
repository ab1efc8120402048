use crate::handlers::{create_student, get_student};
use crate::server::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Create the student routes with state
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/students", post(create_student))
        .route("/students/{student_id}", get(get_student))
}
