use avaliacoes_core::Student;
use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Json},
};

use crate::error::AppError;
use crate::extractors::RequestLocale;
use crate::handlers::created_location;
use crate::models::{CreateStudentRequest, ErrorMessages};
use crate::server::AppState;

/// Register a student
#[utoipa::path(
    post,
    path = "/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student registered", body = Student,
            headers(("Location" = String, description = "Address of the new student"))),
        (status = 400, description = "Invalid fields or malformed body", body = ErrorMessages),
        (status = 500, description = "Internal server error", body = ErrorMessages)
    ),
    params(
        ("Accept-Language" = Option<String>, Header, description = "Preferred message language")
    )
)]
#[axum::debug_handler]
pub async fn create_student(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Undecodable student payload: {}", rejection.body_text());
        AppError::malformed_body(locale)
    })?;

    let student = state
        .service
        .register_student(request.into())
        .await
        .map_err(AppError::localized(locale))?;

    let location = created_location(
        state.public_url.as_deref(),
        &format!("/students/{}", student.id),
    );
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(student),
    ))
}

/// Get student details
#[utoipa::path(
    get,
    path = "/students/{student_id}",
    responses(
        (status = 200, description = "Student retrieved successfully", body = Student),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error", body = ErrorMessages)
    ),
    params(
        ("student_id" = String, Path, description = "Student identifier")
    )
)]
#[axum::debug_handler]
pub async fn get_student(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Path(student_id): Path<String>,
) -> Result<Json<Student>, AppError> {
    let student = state
        .service
        .find_student(&student_id)
        .await
        .map_err(AppError::localized(locale))?;

    Ok(Json(student))
}
