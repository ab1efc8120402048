use avaliacoes_core::{Evaluation, EvaluationDraft};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating an evaluation
///
/// Both fields are optional on the wire so that a missing field is reported
/// as a validation message rather than a decoding error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvaluationRequest {
    /// Evaluation title
    #[serde(default)]
    pub title: Option<String>,

    /// Subject or topic the evaluation refers to
    #[serde(default)]
    pub subject_reference: Option<String>,
}

impl CreateEvaluationRequest {
    pub fn new(title: impl Into<String>, subject_reference: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            subject_reference: Some(subject_reference.into()),
        }
    }
}

impl From<CreateEvaluationRequest> for EvaluationDraft {
    fn from(request: CreateEvaluationRequest) -> Self {
        Self {
            title: request.title,
            subject_reference: request.subject_reference,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListEvaluationsResponse {
    pub evaluations: Vec<Evaluation>,
}
