//! Required-field checks for incoming payloads.
//!
//! Validators never short-circuit: every field is checked and every
//! violation is collected, so a client learns about all of its mistakes in
//! a single round trip.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{EvaluationDraft, NewStudent, StudentDraft};

pub const FIELD_TITLE: &str = "title";
pub const FIELD_SUBJECT_REFERENCE: &str = "subjectReference";
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PROGRAM: &str = "program";
pub const FIELD_BODY: &str = "body";

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid");
}

/// Kind of constraint a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Absent, empty or whitespace-only
    Blank,
    /// Not shaped like `local@domain.tld`
    MalformedEmail,
    /// The request body could not be decoded at all
    MalformedBody,
}

/// One failed constraint on one wire field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Violation {
    pub field: &'static str,
    pub constraint: Constraint,
}

impl Violation {
    pub fn blank(field: &'static str) -> Self {
        Self {
            field,
            constraint: Constraint::Blank,
        }
    }

    pub fn malformed_email(field: &'static str) -> Self {
        Self {
            field,
            constraint: Constraint::MalformedEmail,
        }
    }

    pub fn malformed_body() -> Self {
        Self {
            field: FIELD_BODY,
            constraint: Constraint::MalformedBody,
        }
    }
}

/// Collected violations for one request.
///
/// Behaves as a set: pushing the same violation twice keeps one copy.
/// Iteration follows insertion order, but callers must not rely on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        if !self.0.contains(&violation) {
            self.0.push(violation);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, violation: &Violation) -> bool {
        self.0.contains(violation)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// `Ok(value)` when nothing was collected, otherwise `Err(self)`
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<Violation> for Violations {
    fn from(violation: Violation) -> Self {
        Self(vec![violation])
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A draft that passed [`validate_evaluation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEvaluation {
    pub title: String,
    pub subject_reference: String,
}

pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn require(
    violations: &mut Violations,
    field: &'static str,
    value: Option<String>,
) -> Option<String> {
    if is_blank(value.as_deref()) {
        violations.push(Violation::blank(field));
        None
    } else {
        value
    }
}

/// Checks that both the title and the subject reference are present and
/// non-blank. Values are kept as sent, without trimming.
pub fn validate_evaluation(draft: EvaluationDraft) -> Result<ValidatedEvaluation, Violations> {
    let mut violations = Violations::new();
    let title = require(&mut violations, FIELD_TITLE, draft.title);
    let subject_reference = require(
        &mut violations,
        FIELD_SUBJECT_REFERENCE,
        draft.subject_reference,
    );

    match (title, subject_reference) {
        (Some(title), Some(subject_reference)) => violations.into_result(ValidatedEvaluation {
            title,
            subject_reference,
        }),
        _ => Err(violations),
    }
}

/// Checks the student fields. A blank email reports only `Blank`, the
/// format is checked once something is there.
pub fn validate_student(draft: StudentDraft) -> Result<NewStudent, Violations> {
    let mut violations = Violations::new();
    let name = require(&mut violations, FIELD_NAME, draft.name);
    let email = require(&mut violations, FIELD_EMAIL, draft.email)
        .filter(|email| {
            let well_formed = EMAIL_PATTERN.is_match(email.trim());
            if !well_formed {
                violations.push(Violation::malformed_email(FIELD_EMAIL));
            }
            well_formed
        });
    let program = require(&mut violations, FIELD_PROGRAM, draft.program);

    match (name, email, program) {
        (Some(name), Some(email), Some(program)) => {
            violations.into_result(NewStudent::new(name, email, program))
        }
        _ => Err(violations),
    }
}
