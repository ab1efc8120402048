use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for rejected requests
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessages {
    /// Localized messages, one per violated constraint. Order is not significant.
    pub mensagens: Vec<String>,
}

impl ErrorMessages {
    pub fn new(mensagens: Vec<String>) -> Self {
        Self { mensagens }
    }
}
