use thiserror::Error;

use crate::validation::Violations;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Storage unavailable: {message}")]
    Unavailable { message: String },
    #[error("Identifier sequence exhausted for {table}")]
    SequenceExhausted { table: &'static str },
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Student not found: {student_id}")]
    StudentNotFound { student_id: String },
    #[error("Evaluation not found: {evaluation_id}")]
    EvaluationNotFound { evaluation_id: String },
    #[error("Validation failed with {} violation(s)", .0.len())]
    ValidationFailed(Violations),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StudentNotFound { .. } | Self::EvaluationNotFound { .. }
        )
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
