//! Error handling for avaliacoes-http
//!
//! Maps service failures to status codes and the localized
//! `{ "mensagens": [...] }` body.

use avaliacoes_core::{
    Locale, ServiceError, Violation, Violations,
    locale::{internal_error_message, messages},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorMessages;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Referenced student or evaluation does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// One or more client input problems, rendered in `locale`
    #[error("Validation failed with {} violation(s)", .violations.len())]
    Validation {
        violations: Violations,
        locale: Locale,
    },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal { message: String, locale: Locale },
}

impl AppError {
    /// Wraps a service failure, keeping the locale needed to render it
    pub fn from_service(err: ServiceError, locale: Locale) -> Self {
        match err {
            ServiceError::ValidationFailed(violations) => Self::Validation { violations, locale },
            ServiceError::Store(store_err) => Self::Internal {
                message: store_err.to_string(),
                locale,
            },
            not_found @ (ServiceError::StudentNotFound { .. }
            | ServiceError::EvaluationNotFound { .. }) => Self::NotFound(not_found.to_string()),
        }
    }

    /// Closure form of [`AppError::from_service`], for `map_err`
    pub fn localized(locale: Locale) -> impl Fn(ServiceError) -> Self {
        move |err| Self::from_service(err, locale)
    }

    pub fn malformed_body(locale: Locale) -> Self {
        Self::Validation {
            violations: Violation::malformed_body().into(),
            locale,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl PartialEq<StatusCode> for AppError {
    fn eq(&self, status_code: &StatusCode) -> bool {
        &self.status_code() == status_code
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::NotFound(message) => {
                tracing::debug!("{}", message);
                status.into_response()
            }
            Self::Validation { violations, locale } => {
                tracing::warn!("Rejected request: {} violation(s)", violations.len());
                let body = ErrorMessages::new(messages(&violations, locale));
                (status, Json(body)).into_response()
            }
            Self::Internal { message, locale } => {
                tracing::error!("Request failed: {}", message);
                let body = ErrorMessages::new(vec![internal_error_message(locale)]);
                (status, Json(body)).into_response()
            }
        }
    }
}
