use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub type StudentId = u64;
pub type EvaluationId = u64;

/// A registered student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Generated identifier
    pub id: StudentId,

    /// Full name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Program or track the student is enrolled in
    pub program: String,
}

/// Student data accepted by the repository, before an id is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub program: String,
}

impl NewStudent {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        program: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            program: program.into(),
        }
    }

    pub(crate) fn into_student(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            program: self.program,
        }
    }
}

/// An evaluation recorded for a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Generated identifier
    pub id: EvaluationId,

    /// Evaluation title
    pub title: String,

    /// Subject or topic the evaluation refers to
    pub subject_reference: String,

    /// Owning student
    pub student_id: StudentId,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Evaluation data accepted by the repository, before an id is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvaluation {
    pub title: String,
    pub subject_reference: String,
    pub student_id: StudentId,
}

impl NewEvaluation {
    /// Builds an evaluation bound to an already resolved student.
    ///
    /// Taking the `Student` itself rather than an id means a dangling
    /// reference can't be constructed here.
    pub fn for_student(
        student: &Student,
        title: impl Into<String>,
        subject_reference: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subject_reference: subject_reference.into(),
            student_id: student.id,
        }
    }

    pub(crate) fn into_evaluation(self, id: EvaluationId, created_at: DateTime<Utc>) -> Evaluation {
        Evaluation {
            id,
            title: self.title,
            subject_reference: self.subject_reference,
            student_id: self.student_id,
            created_at,
        }
    }
}

/// Unvalidated evaluation payload, as received from a client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationDraft {
    pub title: Option<String>,
    pub subject_reference: Option<String>,
}

impl EvaluationDraft {
    pub fn new(title: impl Into<String>, subject_reference: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            subject_reference: Some(subject_reference.into()),
        }
    }
}

/// Unvalidated student payload, as received from a client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub program: Option<String>,
}

impl StudentDraft {
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
