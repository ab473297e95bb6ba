//! Forecast extraction from the provider's rendered pages.
//!
//! ### Pipeline
//! - [`Document`]: lenient HTML parse into a queryable tree.
//! - [`FieldLocator`]: raw text per (slot, field) using the fixed paths in [`layout`].
//! - [`normalize`]: integers with unit suffixes stripped, and local month/day/hour
//!   labels turned into dates and instants.
//! - [`parse_hourly`] / [`parse_ten_day`]: walk the fixed slot range and build records.
//!
//! ### Failure Policy
//! - Any slot that fails fails the whole call. A shorter list is never returned, so
//!   callers can tell layout drift apart from a genuinely shorter listing.
//! - Calls are pure: the same page and recorded time always give the same records.

pub mod document;
pub mod layout;
pub mod locate;
pub mod normalize;
pub mod path;

#[cfg(test)]
pub(crate) mod fixtures;

pub use document::Document;
pub use layout::PROVIDER_TZ;
pub use locate::{FieldLocator, RawField};
pub use path::{Match, PositionalPath};

use chrono::{DateTime, TimeZone};
use wxscrape_core::{Error, Field, ForecastKind, HourlyForecastEntry, TenDayForecastEntry};

/// Parse the hourly listing (12 entries, nearest hour first).
///
/// `recorded_time` is the capture instant; its calendar year (in its own timezone)
/// supplies the year the page omits.
pub fn parse_hourly<Z: TimeZone>(html: &str, recorded_time: &DateTime<Z>) -> Result<Vec<HourlyForecastEntry>, Error> {
    hourly_from_document(&Document::parse(html)?, recorded_time)
}

/// Parse the ten-day listing (10 entries, nearest day first).
///
/// `high_temp` is [`wxscrape_core::MISSING_VALUE`] for days the page shows a
/// placeholder for.
pub fn parse_ten_day<Z: TimeZone>(
    html: &str, recorded_time: &DateTime<Z>,
) -> Result<Vec<TenDayForecastEntry>, Error> {
    ten_day_from_document(&Document::parse(html)?, recorded_time)
}

/// [`parse_hourly`] over an already-loaded document.
pub fn hourly_from_document<Z: TimeZone>(
    document: &Document, recorded_time: &DateTime<Z>,
) -> Result<Vec<HourlyForecastEntry>, Error> {
    let locator = FieldLocator::new(document, ForecastKind::Hourly);
    let year = normalize::infer_year(recorded_time);
    let recorded = recorded_time.timestamp();

    let entries = layout::slots(ForecastKind::Hourly)
        .map(|slot| -> Result<HourlyForecastEntry, Error> {
            let hour = locator.locate(slot, Field::HourLabel)?;
            let month_day = locator.locate(slot, Field::MonthDay)?;
            let valid_time = normalize::parse_valid_time(&month_day.value, &hour.value, year)?;

            Ok(HourlyForecastEntry {
                valid_time: valid_time.timestamp(),
                recorded_time: recorded,
                temperature: reading(&locator, slot, Field::Temperature)?,
                precip_chance: reading(&locator, slot, Field::PrecipChance)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("extracted {} hourly entries (year {})", entries.len(), year);
    Ok(entries)
}

/// [`parse_ten_day`] over an already-loaded document.
pub fn ten_day_from_document<Z: TimeZone>(
    document: &Document, recorded_time: &DateTime<Z>,
) -> Result<Vec<TenDayForecastEntry>, Error> {
    let locator = FieldLocator::new(document, ForecastKind::TenDay);
    let year = normalize::infer_year(recorded_time);
    let recorded = recorded_time.timestamp();

    let entries = layout::slots(ForecastKind::TenDay)
        .map(|slot| -> Result<TenDayForecastEntry, Error> {
            let month_day = locator.locate(slot, Field::MonthDay)?;

            Ok(TenDayForecastEntry {
                valid_date: normalize::parse_valid_date(&month_day.value, year)?,
                recorded_time: recorded,
                high_temp: reading(&locator, slot, Field::HighTemp)?,
                low_temp: reading(&locator, slot, Field::LowTemp)?,
                precip_chance: reading(&locator, slot, Field::PrecipChance)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("extracted {} ten-day entries (year {})", entries.len(), year);
    Ok(entries)
}

fn reading(locator: &FieldLocator<'_>, slot: usize, field: Field) -> Result<i32, Error> {
    let raw = locator.locate(slot, field)?;
    normalize::parse_reading(&raw.value, raw.presence)
}
