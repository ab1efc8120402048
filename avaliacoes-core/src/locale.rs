//! Message catalog and language negotiation.
//!
//! Rendering a violation is a pure function of the violation and the
//! locale. No catalog state is loaded or cached at runtime.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

use crate::validation::{Constraint, Violation, Violations};

/// Supported message languages
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[strum(ascii_case_insensitive)]
pub enum Locale {
    #[strum(to_string = "pt-BR", serialize = "pt")]
    #[serde(rename = "pt-BR", alias = "pt", alias = "pt-br")]
    PtBr,
    #[default]
    #[strum(to_string = "en")]
    #[serde(rename = "en")]
    En,
    #[strum(to_string = "es")]
    #[serde(rename = "es")]
    Es,
}

impl Locale {
    /// Matches a single language tag, falling back to its primary subtag
    /// (`en-US` → `en`, `pt-PT` → `pt`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().replace('_', "-");
        if let Ok(locale) = Self::from_str(&tag) {
            return Some(locale);
        }
        let primary = tag.split('-').next()?;
        Self::from_str(primary).ok()
    }

    /// Picks the best supported language from an `Accept-Language` value.
    ///
    /// Entries are ranked by their `q` weight (default 1.0, ties keep
    /// header order). Entries with `q=0`, wildcards and unknown tags are
    /// skipped. Returns `fallback` when nothing matches.
    pub fn negotiate(header: Option<&str>, fallback: Locale) -> Locale {
        let Some(header) = header else {
            return fallback;
        };

        let mut candidates: Vec<(&str, f32)> = header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let tag = parts.next()?.trim();
                if tag.is_empty() || tag == "*" {
                    return None;
                }
                let weight = parts
                    .filter_map(|param| param.trim().strip_prefix("q="))
                    .find_map(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                (weight > 0.0).then_some((tag, weight))
            })
            .collect();

        // sort_by is stable, so equal weights keep header order
        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

        candidates
            .into_iter()
            .find_map(|(tag, _)| Self::from_tag(tag))
            .unwrap_or(fallback)
    }
}

/// Renders one violation in the given language.
pub fn message(violation: &Violation, locale: Locale) -> String {
    let field = violation.field;
    match (violation.constraint, locale) {
        (Constraint::Blank, Locale::PtBr) => format!("O campo {field} não deve estar em branco"),
        (Constraint::Blank, Locale::En) => format!("The field {field} must not be blank"),
        (Constraint::Blank, Locale::Es) => format!("El campo {field} no debe estar en blanco"),
        (Constraint::MalformedEmail, Locale::PtBr) => {
            format!("O campo {field} deve ser um endereço de e-mail bem formado")
        }
        (Constraint::MalformedEmail, Locale::En) => {
            format!("The field {field} must be a well-formed email address")
        }
        (Constraint::MalformedEmail, Locale::Es) => {
            format!("El campo {field} debe ser una dirección de correo electrónico bien formada")
        }
        (Constraint::MalformedBody, Locale::PtBr) => {
            "O corpo da requisição é inválido".to_string()
        }
        (Constraint::MalformedBody, Locale::En) => "The request body is malformed".to_string(),
        (Constraint::MalformedBody, Locale::Es) => {
            "El cuerpo de la solicitud no es válido".to_string()
        }
    }
}

/// Renders every violation in the given language.
pub fn messages(violations: &Violations, locale: Locale) -> Vec<String> {
    violations.iter().map(|v| message(v, locale)).collect()
}

/// Generic text for failures that are not the client's fault.
pub fn internal_error_message(locale: Locale) -> String {
    match locale {
        Locale::PtBr => "Erro interno do servidor".to_string(),
        Locale::En => "Internal server error".to_string(),
        Locale::Es => "Error interno del servidor".to_string(),
    }
}
