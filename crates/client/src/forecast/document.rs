//! Lenient HTML loading.
//!
//! Parsing goes through html5ever (via `scraper`), which recovers from missing
//! closing tags and stray markup the way browsers do. Only input that cannot be an
//! HTML page at all is rejected.

use scraper::Html;
use wxscrape_core::Error;

use super::path::{Match, PositionalPath};

/// A parsed, read-only provider page.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse raw HTML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedDocument` for empty input, input containing NUL
    /// bytes, or input without any markup.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        if raw.trim().is_empty() {
            return Err(Error::MalformedDocument("document is empty".into()));
        }
        if raw.contains('\0') {
            return Err(Error::MalformedDocument("document contains binary data".into()));
        }
        if !raw.contains('<') {
            return Err(Error::MalformedDocument("document contains no markup".into()));
        }

        let html = Html::parse_document(raw);
        tracing::debug!("parsed document: {} bytes, {} recovered parse errors", raw.len(), html.errors.len());

        Ok(Self { html })
    }

    /// Parse a fetched response body.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedDocument` if the bytes are not UTF-8, plus every
    /// condition of [`Document::parse`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let raw = std::str::from_utf8(bytes)
            .map_err(|e| Error::MalformedDocument(format!("document is not valid UTF-8: {e}")))?;
        Self::parse(raw)
    }

    /// All matches of `path`, in document order.
    pub fn select(&self, path: &PositionalPath) -> Vec<Match<'_>> {
        path.select(&self.html)
    }

    /// Parse `path` and return its matches.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPath` if `path` does not parse.
    pub fn query(&self, path: &str) -> Result<Vec<Match<'_>>, Error> {
        Ok(self.select(&PositionalPath::parse(path)?))
    }
}
