pub mod errors;
pub mod evaluations;
pub mod students;

// Re-export all models for easier imports
pub use errors::*;
pub use evaluations::*;
pub use students::*;
