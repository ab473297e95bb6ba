//! Unified error types for wxscrape.
//!
//! Every variant renders with an upper-snake code prefix so callers can match on
//! the text when the typed value is not available (logs, CLI output).

use crate::forecast::{Field, ForecastKind};

/// Unified error types for extraction and fetching.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input cannot be treated as an HTML document at all (empty, binary, no markup).
    #[error("MALFORMED_DOCUMENT: {0}")]
    MalformedDocument(String),

    /// A fixed layout path resolved to zero matches.
    #[error("FIELD_NOT_FOUND: {kind} slot {slot} has no `{field}` field")]
    FieldNotFound { kind: ForecastKind, slot: usize, field: Field },

    /// A month/day or hour label did not match the expected template.
    #[error("TEMPORAL_PARSE: {raw:?}: {reason}")]
    TemporalParse { raw: String, reason: String },

    /// Non-numeric residue left after stripping the unit suffix.
    #[error("NUMERIC_PARSE: {raw:?}")]
    NumericParse { raw: String },

    /// A positional path string could not be parsed.
    #[error("INVALID_PATH: {0}")]
    InvalidPath(String),

    /// Site name not present in the registry.
    #[error("UNKNOWN_SITE: {0}")]
    UnknownSite(String),

    /// Invalid URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// Network failure or unexpected HTTP status.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// Fetch timeout.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// Fetch response too large.
    #[error("FETCH_TOO_LARGE: {0}")]
    FetchTooLarge(String),
}

impl Error {
    /// Shorthand for a [`Error::TemporalParse`] on `raw`.
    pub fn temporal(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::TemporalParse { raw: raw.into(), reason: reason.into() }
    }
}
