use avaliacoes_core::{EvaluationService, Locale, NewStudent, ServiceResult, Student};

use crate::server::AppState;

/// Create a test AppState backed by fresh in-memory repositories
pub fn create_test_state() -> AppState {
    AppState::new(EvaluationService::in_memory(), Locale::default())
}

/// Empty both repositories and seed the one known student.
///
/// Call at the start of every test so each run begins from the same
/// store contents regardless of what ran before.
pub async fn setup(state: &AppState) -> ServiceResult<Student> {
    state.service.reset().await?;
    let student = state
        .service
        .students()
        .save(NewStudent::new(
            "Antonio Eloy",
            "antonio@email.com.br",
            "Aceleração Acadêmica Senior",
        ))
        .await?;
    Ok(student)
}
