//! # Avaliações core
//!
//! Domain layer for the student evaluation service: students own zero or
//! more evaluations, and an evaluation can only be created under a student
//! that exists at creation time.
//!
//! ## Components
//!
//! - Entities and the evaluation factory ([`models`])
//! - Repository traits and in-memory implementations ([`store`])
//! - Required-field checks on incoming payloads ([`validation`])
//! - Message catalog and `Accept-Language` negotiation ([`locale`])
//! - Lookup, validation and persistence orchestration ([`service`])
//! - Error types ([`error`])
//!
//! ## Creation flow
//!
//! ```text
//! student id → lookup → validation → factory → repository
//! ```
//!
//! The student lookup runs first, so a missing parent always wins over an
//! invalid payload. Nothing is written until both checks pass.

pub mod error;
pub mod locale;
pub mod models;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{ServiceError, ServiceResult, StoreError, StoreResult};
pub use locale::Locale;
pub use models::{
    Evaluation, EvaluationDraft, EvaluationId, NewEvaluation, NewStudent, Student, StudentDraft,
    StudentId,
};
pub use service::EvaluationService;
pub use store::{
    EvaluationRepository, InMemoryEvaluationRepository, InMemoryStudentRepository,
    StudentRepository,
};
pub use validation::{Constraint, Violation, Violations};
