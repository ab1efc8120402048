use avaliacoes_core::StudentDraft;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for registering a student
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    /// Full name
    #[serde(default)]
    pub name: Option<String>,

    /// Contact email
    #[serde(default)]
    pub email: Option<String>,

    /// Program or track name
    #[serde(default)]
    pub program: Option<String>,
}

impl CreateStudentRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        program: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            program: Some(program.into()),
        }
    }
}

impl From<CreateStudentRequest> for StudentDraft {
    fn from(request: CreateStudentRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            program: request.program,
        }
    }
}
