//! Field lookup for one listing slot.

use wxscrape_core::{Error, Field, ForecastKind};

use super::document::Document;
use super::layout::{self, Presence};

/// A located raw field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub value: String,
    pub presence: Presence,
}

/// Resolves fields of one listing against a parsed page.
pub struct FieldLocator<'d> {
    document: &'d Document,
    kind: ForecastKind,
}

impl<'d> FieldLocator<'d> {
    pub fn new(document: &'d Document, kind: ForecastKind) -> Self {
        Self { document, kind }
    }

    /// Raw text of `field` at positional `slot`.
    ///
    /// The first match wins when the layout path is ambiguous.
    ///
    /// # Errors
    ///
    /// Returns `Error::FieldNotFound` when the path matches nothing, or when the
    /// listing does not expose `field` at all.
    pub fn locate(&self, slot: usize, field: Field) -> Result<RawField, Error> {
        let not_found = || Error::FieldNotFound { kind: self.kind, slot, field };

        let field_path = layout::field_path(self.kind, field).ok_or_else(not_found)?;
        let path = field_path.render(slot);

        let first = self.document.query(&path)?.into_iter().next().ok_or_else(not_found)?;
        let value = first.value();
        tracing::trace!(kind = %self.kind, slot, field = %field, path = %path, value = %value, "located field");

        Ok(RawField { value, presence: field_path.presence })
    }
}
