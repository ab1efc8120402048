use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use crate::models::{
    Evaluation, EvaluationDraft, EvaluationId, NewEvaluation, Student, StudentDraft, StudentId,
};
use crate::store::{
    EvaluationRepository, InMemoryEvaluationRepository, InMemoryStudentRepository,
    StudentRepository,
};
use crate::validation::{validate_evaluation, validate_student};

/// Orchestrates student lookup, payload validation and persistence.
///
/// Every operation performs its checks before its single write, so a
/// failed call never leaves anything behind.
#[derive(Clone)]
pub struct EvaluationService {
    students: Arc<dyn StudentRepository>,
    evaluations: Arc<dyn EvaluationRepository>,
}

impl EvaluationService {
    pub fn new(
        students: Arc<dyn StudentRepository>,
        evaluations: Arc<dyn EvaluationRepository>,
    ) -> Self {
        Self {
            students,
            evaluations,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryStudentRepository::new()),
            Arc::new(InMemoryEvaluationRepository::new()),
        )
    }

    pub fn students(&self) -> &Arc<dyn StudentRepository> {
        &self.students
    }

    pub fn evaluations(&self) -> &Arc<dyn EvaluationRepository> {
        &self.evaluations
    }

    /// Resolves a student from a raw path segment.
    ///
    /// An id that doesn't parse as a number is reported the same way as
    /// one that parses but doesn't exist.
    pub async fn find_student(&self, raw_id: &str) -> ServiceResult<Student> {
        let not_found = || ServiceError::StudentNotFound {
            student_id: raw_id.to_string(),
        };
        let id: StudentId = raw_id.trim().parse().map_err(|_| not_found())?;
        debug!("Looking up student {}", id);
        self.students.find_by_id(id).await?.ok_or_else(not_found)
    }

    pub async fn register_student(&self, draft: StudentDraft) -> ServiceResult<Student> {
        let new_student = validate_student(draft).map_err(ServiceError::ValidationFailed)?;
        let student = self.students.save(new_student).await?;
        info!("Registered student {}", student.id);
        Ok(student)
    }

    /// Validates `draft` and stores it under an already resolved student.
    pub async fn add_evaluation(
        &self,
        student: &Student,
        draft: EvaluationDraft,
    ) -> ServiceResult<Evaluation> {
        let validated = validate_evaluation(draft).map_err(ServiceError::ValidationFailed)?;
        let new_evaluation =
            NewEvaluation::for_student(student, validated.title, validated.subject_reference);
        let evaluation = self.evaluations.save(new_evaluation).await?;
        info!(
            "Created evaluation {} for student {}",
            evaluation.id, student.id
        );
        Ok(evaluation)
    }

    /// Lookup first, then validation, then the write.
    pub async fn create_evaluation(
        &self,
        raw_student_id: &str,
        draft: EvaluationDraft,
    ) -> ServiceResult<Evaluation> {
        let student = self.find_student(raw_student_id).await?;
        self.add_evaluation(&student, draft).await
    }

    pub async fn list_evaluations(&self, raw_student_id: &str) -> ServiceResult<Vec<Evaluation>> {
        let student = self.find_student(raw_student_id).await?;
        Ok(self.evaluations.find_by_student(student.id).await?)
    }

    /// Fetches an evaluation through its owner. An evaluation that exists
    /// but belongs to a different student is reported as not found.
    pub async fn get_evaluation(
        &self,
        raw_student_id: &str,
        raw_evaluation_id: &str,
    ) -> ServiceResult<Evaluation> {
        let student = self.find_student(raw_student_id).await?;
        let not_found = || ServiceError::EvaluationNotFound {
            evaluation_id: raw_evaluation_id.to_string(),
        };
        let id: EvaluationId = raw_evaluation_id.trim().parse().map_err(|_| not_found())?;
        self.evaluations
            .find_by_id(id)
            .await?
            .filter(|evaluation| evaluation.student_id == student.id)
            .ok_or_else(not_found)
    }

    /// Empties both repositories, evaluations first.
    pub async fn reset(&self) -> ServiceResult<()> {
        self.evaluations.delete_all().await?;
        self.students.delete_all().await?;
        Ok(())
    }
}
