pub mod evaluations;
pub mod students;

use crate::handlers;
use crate::models::{
    CreateEvaluationRequest, CreateStudentRequest, ErrorMessages, ListEvaluationsResponse,
};
use crate::server::AppState;
use avaliacoes_core::{Evaluation, Locale, Student};
use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::students::create_student,
        handlers::students::get_student,
        handlers::evaluations::create_evaluation,
        handlers::evaluations::list_evaluations,
        handlers::evaluations::get_evaluation
    ),
    components(schemas(
        CreateStudentRequest,
        CreateEvaluationRequest,
        ListEvaluationsResponse,
        ErrorMessages,
        Student,
        Evaluation,
        Locale
    ))
)]
pub struct ApiDoc;

/// Create the main API router with state
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi_document))
        .merge(students::routes())
        .merge(evaluations::routes())
}

/// Health check endpoint for container health monitoring
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
