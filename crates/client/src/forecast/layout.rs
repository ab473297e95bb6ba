//! The provider's page layout, as data.
//!
//! Each listing has a per-entry container path (with an `{index}` placeholder for
//! the slot) and a table of field sub-paths under it. When the provider changes its
//! markup, this file is the only place that needs to change.

use std::ops::Range;

use chrono_tz::Tz;
use wxscrape_core::{Field, ForecastKind};

/// The provider's civil timezone. Forecast labels are local times in this zone.
pub const PROVIDER_TZ: Tz = chrono_tz::America::Chicago;

/// First forecast slot in either listing (1-based positional index). Slot 1 is
/// header chrome.
pub const FIRST_SLOT: usize = 2;

pub const HOURLY_ENTRIES: usize = 12;
pub const TEN_DAY_ENTRIES: usize = 10;

const HOURLY_CONTAINER: &str =
    r#"//*[@id="homepage-layout"]/div/div/div[1]/section[1]/div[2]/div/div[2]/div[1]/div[{index}]"#;
const TEN_DAY_CONTAINER: &str =
    r#"//*[@id="homepage-layout"]/div/div/div[1]/section[1]/div[2]/div/div[2]/div/div[{index}]"#;

/// Whether a field may legitimately render as a placeholder glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    MayBePlaceholder,
}

/// Location of one field relative to its entry container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath {
    pub kind: ForecastKind,
    pub field: Field,
    pub sub_path: &'static str,
    pub presence: Presence,
}

/// Field sub-paths keyed by (kind, field), in extraction order.
pub const FIELD_PATHS: &[FieldPath] = &[
    FieldPath { kind: ForecastKind::Hourly, field: Field::HourLabel, sub_path: "div[1]/span[1]", presence: Presence::Required },
    FieldPath { kind: ForecastKind::Hourly, field: Field::MonthDay, sub_path: "div[1]/span[2]", presence: Presence::Required },
    FieldPath { kind: ForecastKind::Hourly, field: Field::Temperature, sub_path: "div[2]", presence: Presence::Required },
    FieldPath { kind: ForecastKind::Hourly, field: Field::PrecipChance, sub_path: "div[4]", presence: Presence::Required },
    FieldPath { kind: ForecastKind::TenDay, field: Field::MonthDay, sub_path: "div[1]/span[3]", presence: Presence::Required },
    FieldPath {
        kind: ForecastKind::TenDay,
        field: Field::HighTemp,
        sub_path: "div[2]/div/span[1]",
        presence: Presence::MayBePlaceholder,
    },
    FieldPath { kind: ForecastKind::TenDay, field: Field::LowTemp, sub_path: "div[2]/span", presence: Presence::Required },
    FieldPath { kind: ForecastKind::TenDay, field: Field::PrecipChance, sub_path: "div[4]", presence: Presence::Required },
];

/// Container path template for a listing.
pub fn container(kind: ForecastKind) -> &'static str {
    match kind {
        ForecastKind::Hourly => HOURLY_CONTAINER,
        ForecastKind::TenDay => TEN_DAY_CONTAINER,
    }
}

/// Positional slots holding forecast entries, nearest first.
pub fn slots(kind: ForecastKind) -> Range<usize> {
    let len = match kind {
        ForecastKind::Hourly => HOURLY_ENTRIES,
        ForecastKind::TenDay => TEN_DAY_ENTRIES,
    };
    FIRST_SLOT..FIRST_SLOT + len
}

/// Table entry for `(kind, field)`, if that listing exposes the field.
pub fn field_path(kind: ForecastKind, field: Field) -> Option<&'static FieldPath> {
    FIELD_PATHS.iter().find(|p| p.kind == kind && p.field == field)
}

impl FieldPath {
    /// Full path string for this field at `slot`.
    pub fn render(&self, slot: usize) -> String {
        format!("{}/{}", container(self.kind).replace("{index}", &slot.to_string()), self.sub_path)
    }
}
