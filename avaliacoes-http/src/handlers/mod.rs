pub mod evaluations;
pub mod students;
pub mod test_helpers;

// Re-export all handlers for easier imports
pub use evaluations::*;
pub use students::*;

/// Address of a newly created resource.
///
/// `path` must be built from stored ids, never from the request path.
/// With a configured public URL the result is absolute, otherwise it is
/// path-only. Request headers such as `Host` are never consulted.
pub fn created_location(public_url: Option<&str>, path: &str) -> String {
    match public_url {
        Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
        None => path.to_string(),
    }
}
