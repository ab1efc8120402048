use avaliacoes_core::Evaluation;
use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Json},
};

use crate::error::AppError;
use crate::extractors::RequestLocale;
use crate::handlers::created_location;
use crate::models::{CreateEvaluationRequest, ErrorMessages, ListEvaluationsResponse};
use crate::server::AppState;

/// Create an evaluation for a student
///
/// The student is resolved before the body is looked at, so an unknown
/// student is reported as 404 even when the payload is also invalid.
#[utoipa::path(
    post,
    path = "/students/{student_id}/evaluations",
    request_body = CreateEvaluationRequest,
    responses(
        (status = 201, description = "Evaluation created", body = Evaluation,
            headers(("Location" = String, description = "Address of the new evaluation"))),
        (status = 400, description = "Blank fields or malformed body", body = ErrorMessages),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error", body = ErrorMessages)
    ),
    params(
        ("student_id" = String, Path, description = "Student identifier"),
        ("Accept-Language" = Option<String>, Header, description = "Preferred message language")
    )
)]
#[axum::debug_handler]
pub async fn create_evaluation(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Path(student_id): Path<String>,
    payload: Result<Json<CreateEvaluationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let student = state
        .service
        .find_student(&student_id)
        .await
        .map_err(AppError::localized(locale))?;

    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Undecodable evaluation payload: {}", rejection.body_text());
        AppError::malformed_body(locale)
    })?;

    let evaluation = state
        .service
        .add_evaluation(&student, request.into())
        .await
        .map_err(AppError::localized(locale))?;

    let location = created_location(
        state.public_url.as_deref(),
        &format!(
            "/students/{}/evaluations/{}",
            evaluation.student_id, evaluation.id
        ),
    );
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(evaluation),
    ))
}

/// List a student's evaluations
#[utoipa::path(
    get,
    path = "/students/{student_id}/evaluations",
    responses(
        (status = 200, description = "Evaluations listed successfully", body = ListEvaluationsResponse),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error", body = ErrorMessages)
    ),
    params(
        ("student_id" = String, Path, description = "Student identifier")
    )
)]
#[axum::debug_handler]
pub async fn list_evaluations(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Path(student_id): Path<String>,
) -> Result<Json<ListEvaluationsResponse>, AppError> {
    let evaluations = state
        .service
        .list_evaluations(&student_id)
        .await
        .map_err(AppError::localized(locale))?;

    Ok(Json(ListEvaluationsResponse { evaluations }))
}

/// Get one evaluation of a student
#[utoipa::path(
    get,
    path = "/students/{student_id}/evaluations/{evaluation_id}",
    responses(
        (status = 200, description = "Evaluation retrieved successfully", body = Evaluation),
        (status = 404, description = "Student or evaluation not found"),
        (status = 500, description = "Internal server error", body = ErrorMessages)
    ),
    params(
        ("student_id" = String, Path, description = "Student identifier"),
        ("evaluation_id" = String, Path, description = "Evaluation identifier")
    )
)]
#[axum::debug_handler]
pub async fn get_evaluation(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Path((student_id, evaluation_id)): Path<(String, String)>,
) -> Result<Json<Evaluation>, AppError> {
    let evaluation = state
        .service
        .get_evaluation(&student_id, &evaluation_id)
        .await
        .map_err(AppError::localized(locale))?;

    Ok(Json(evaluation))
}
