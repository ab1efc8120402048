use std::convert::Infallible;

use avaliacoes_core::Locale;
use axum::{
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};

use crate::server::AppState;

/// Extractor for the language the response messages should use
///
/// Negotiated from the `Accept-Language` header, falling back to the
/// server's configured default. Never rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

impl RequestLocale {
    /// Get the negotiated locale
    pub fn locale(&self) -> Locale {
        self.0
    }
}

impl FromRequestParts<AppState> for RequestLocale {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());

        Ok(RequestLocale(Locale::negotiate(
            header,
            state.default_locale,
        )))
    }
}
