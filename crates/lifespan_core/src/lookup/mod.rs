//! Person date lookup against a public knowledge base.
//!
//! # Responsibility
//! - Define the lookup contract consumed by the add-person use case.
//! - Normalize user-entered titles and derive display names.
//!
//! # Invariants
//! - A successful lookup always carries a birth token.
//! - A missing death claim is reported as the `Present` sentinel.
//! - Lookup failures never reach the timeline pipeline.

pub mod wikidata;

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use wikidata::WikidataLookup;

static WHITESPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

pub type LookupResult<T> = Result<T, LookupError>;

/// Raw date tokens returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeDates {
    pub birth: String,
    /// Date token, or the `Present` sentinel.
    pub death: String,
}

/// Lookup failure surfaced at the add-person action.
#[derive(Debug)]
pub enum LookupError {
    /// No knowledge-base entity matches the title.
    NotFound(String),
    /// Entity exists but has no birth date claim.
    MissingBirth(String),
    /// Property is claimed but no claim carries a time value
    /// (`somevalue`/`novalue` snaks).
    UndatedClaim {
        entity: String,
        property: &'static str,
    },
    /// Transport or HTTP status failure.
    Http(reqwest::Error),
    /// Upstream payload did not have the expected shape.
    InvalidResponse(String),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(title) => {
                write!(f, "no knowledge-base entry found for `{title}`; check the title")
            }
            Self::MissingBirth(title) => write!(f, "birth date not found for `{title}`"),
            Self::UndatedClaim { entity, property } => write!(
                f,
                "entity `{entity}` has a `{property}` claim without a usable date"
            ),
            Self::Http(err) => write!(f, "lookup request failed: {err}"),
            Self::InvalidResponse(message) => write!(f, "unexpected lookup response: {message}"),
        }
    }
}

impl Error for LookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

/// Resolves a page title to birth/death tokens.
pub trait PersonLookup {
    fn lookup(&self, title: &str) -> LookupResult<LifeDates>;
}

impl<L: PersonLookup + ?Sized> PersonLookup for &L {
    fn lookup(&self, title: &str) -> LookupResult<LifeDates> {
        (**self).lookup(title)
    }
}

/// Turns free-form input into a page title: trimmed, whitespace runs as `_`.
pub fn normalize_title(input: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(input.trim(), "_").into_owned()
}

/// Display name stored for a page title (`Albert_Einstein` -> `Albert Einstein`).
pub fn display_name(title: &str) -> String {
    title.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::{display_name, normalize_title};

    #[test]
    fn title_normalization_collapses_whitespace() {
        assert_eq!(normalize_title("  Marie   Curie\t"), "Marie_Curie");
    }

    #[test]
    fn display_name_restores_spaces() {
        assert_eq!(display_name("Ada_Lovelace"), "Ada Lovelace");
    }
}
