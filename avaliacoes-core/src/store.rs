//! Persistence for students and evaluations.
//!
//! The repository traits are the seam between the service and storage.
//! The in-memory implementations back the server and the tests.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::error::{StoreError, StoreResult};
use crate::models::{Evaluation, EvaluationId, NewEvaluation, NewStudent, Student, StudentId};

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Persists a student and returns it with its generated id
    async fn save(&self, student: NewStudent) -> StoreResult<Student>;

    async fn find_by_id(&self, id: StudentId) -> StoreResult<Option<Student>>;

    async fn count(&self) -> StoreResult<usize>;

    async fn delete_all(&self) -> StoreResult<()>;
}

#[async_trait]
pub trait EvaluationRepository: Send + Sync {
    /// Persists an evaluation and returns it with its generated id
    async fn save(&self, evaluation: NewEvaluation) -> StoreResult<Evaluation>;

    async fn find_by_id(&self, id: EvaluationId) -> StoreResult<Option<Evaluation>>;

    /// All evaluations, ordered by id
    async fn find_all(&self) -> StoreResult<Vec<Evaluation>>;

    /// Evaluations owned by one student, ordered by id
    async fn find_by_student(&self, student_id: StudentId) -> StoreResult<Vec<Evaluation>>;

    async fn count(&self) -> StoreResult<usize>;

    async fn delete_all(&self) -> StoreResult<()>;
}

/// Monotonic id generator starting at 1.
///
/// Ids are never reused, not even after `delete_all`.
#[derive(Debug)]
struct Sequence {
    table: &'static str,
    next: AtomicU64,
}

impl Sequence {
    fn new(table: &'static str) -> Self {
        Self {
            table,
            next: AtomicU64::new(1),
        }
    }

    fn next_id(&self) -> StoreResult<u64> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
            .map_err(|_| StoreError::SequenceExhausted { table: self.table })
    }
}

fn sorted_by_id<T>(mut rows: Vec<T>, id: impl Fn(&T) -> u64) -> Vec<T> {
    rows.sort_by_key(|row| id(row));
    rows
}

#[derive(Debug, Clone)]
pub struct InMemoryStudentRepository {
    rows: Arc<DashMap<StudentId, Student>>,
    sequence: Arc<Sequence>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(DashMap::new()),
            sequence: Arc::new(Sequence::new("students")),
        }
    }
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn save(&self, student: NewStudent) -> StoreResult<Student> {
        let id = self.sequence.next_id()?;
        let student = student.into_student(id);
        self.rows.insert(id, student.clone());
        Ok(student)
    }

    async fn find_by_id(&self, id: StudentId) -> StoreResult<Option<Student>> {
        Ok(self.rows.get(&id).map(|row| row.value().clone()))
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.rows.len())
    }

    async fn delete_all(&self) -> StoreResult<()> {
        self.rows.clear();
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryEvaluationRepository {
    rows: Arc<DashMap<EvaluationId, Evaluation>>,
    sequence: Arc<Sequence>,
}

impl InMemoryEvaluationRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(DashMap::new()),
            sequence: Arc::new(Sequence::new("evaluations")),
        }
    }
}

impl Default for InMemoryEvaluationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EvaluationRepository for InMemoryEvaluationRepository {
    async fn save(&self, evaluation: NewEvaluation) -> StoreResult<Evaluation> {
        let id = self.sequence.next_id()?;
        let evaluation = evaluation.into_evaluation(id, Utc::now());
        self.rows.insert(id, evaluation.clone());
        Ok(evaluation)
    }

    async fn find_by_id(&self, id: EvaluationId) -> StoreResult<Option<Evaluation>> {
        Ok(self.rows.get(&id).map(|row| row.value().clone()))
    }

    async fn find_all(&self) -> StoreResult<Vec<Evaluation>> {
        let rows = self.rows.iter().map(|row| row.value().clone()).collect();
        Ok(sorted_by_id(rows, |e: &Evaluation| e.id))
    }

    async fn find_by_student(&self, student_id: StudentId) -> StoreResult<Vec<Evaluation>> {
        let rows = self
            .rows
            .iter()
            .filter(|row| row.student_id == student_id)
            .map(|row| row.value().clone())
            .collect();
        Ok(sorted_by_id(rows, |e: &Evaluation| e.id))
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.rows.len())
    }

    async fn delete_all(&self) -> StoreResult<()> {
        self.rows.clear();
        Ok(())
    }
}
