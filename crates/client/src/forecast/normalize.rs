//! Conversion of raw field text into typed values.
//!
//! Numbers: trailing unit glyphs (`°`, `%`) are stripped before parsing. A value
//! that is empty after stripping is a placeholder and becomes [`MISSING_VALUE`]
//! where the layout allows placeholders.
//!
//! Dates: the page shows only month/day (and an hour label for hourly entries).
//! The year is taken from the recorded time. This is wrong when the listing crosses
//! a year boundary relative to the capture date, which the provider's horizon never
//! does in practice; it is kept as a known limitation.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use wxscrape_core::{Error, MISSING_VALUE};

use super::layout::{PROVIDER_TZ, Presence};

const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse a temperature or percentage reading.
///
/// # Errors
///
/// Returns `Error::NumericParse` when non-numeric residue remains after stripping
/// the suffix, or when a required reading is a bare placeholder.
pub fn parse_reading(raw: &str, presence: Presence) -> Result<i32, Error> {
    let digits = raw.trim().trim_end_matches(|c: char| !c.is_ascii_digit()).trim();

    if digits.is_empty() {
        return match presence {
            Presence::MayBePlaceholder => Ok(MISSING_VALUE),
            Presence::Required => Err(Error::NumericParse { raw: raw.to_string() }),
        };
    }

    digits.parse::<i32>().map_err(|_| Error::NumericParse { raw: raw.to_string() })
}

/// Year used for month/day labels captured at `recorded_time`.
pub fn infer_year<Z: TimeZone>(recorded_time: &DateTime<Z>) -> i32 {
    recorded_time.year()
}

/// Calendar date for a `M/D` label in `year`.
///
/// # Errors
///
/// Returns `Error::TemporalParse` with the assembled string if it does not match
/// `M/D/YYYY` or names a day that does not exist in `year`.
pub fn parse_valid_date(month_day: &str, year: i32) -> Result<NaiveDate, Error> {
    let raw = format!("{}/{}", month_day.trim(), year);
    NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|e| Error::temporal(raw, e.to_string()))
}

/// Hour of day (0-23) for an `h AM|PM` label.
///
/// # Errors
///
/// Returns `Error::TemporalParse` for anything other than an hour 1-12 followed by
/// AM or PM.
pub fn parse_hour_label(label: &str) -> Result<u32, Error> {
    let bad = |reason: &str| Error::temporal(label, reason);

    let trimmed = label.trim();
    let split = trimmed.find(|c: char| !c.is_ascii_digit()).ok_or_else(|| bad("missing AM/PM"))?;
    let (hour, meridiem) = trimmed.split_at(split);

    let hour: u32 = hour.parse().map_err(|_| bad("missing hour"))?;
    if !(1..=12).contains(&hour) {
        return Err(bad("hour must be 1-12"));
    }

    match meridiem.trim() {
        m if m.eq_ignore_ascii_case("am") => Ok(hour % 12),
        m if m.eq_ignore_ascii_case("pm") => Ok(hour % 12 + 12),
        _ => Err(bad("expected AM or PM")),
    }
}

/// Instant for a month/day + hour label in the provider's timezone.
///
/// Ambiguous local times (the repeated fall-back hour) resolve to the later,
/// post-transition instant. Local times inside the spring-forward gap are moved one
/// hour later.
///
/// # Errors
///
/// Returns `Error::TemporalParse` if either label is malformed.
pub fn parse_valid_time(month_day: &str, hour_label: &str, year: i32) -> Result<DateTime<Tz>, Error> {
    let date = parse_valid_date(month_day, year)?;
    let hour = parse_hour_label(hour_label)?;
    let local = date
        .and_hms_opt(hour, 0, 0)
        .ok_or_else(|| Error::temporal(format!("{month_day} {hour_label}"), "no such local time"))?;

    resolve_local(local).ok_or_else(|| {
        Error::temporal(format!("{}/{} {}", month_day.trim(), year, hour_label.trim()), "no such local time")
    })
}

fn resolve_local(local: NaiveDateTime) -> Option<DateTime<Tz>> {
    PROVIDER_TZ
        .from_local_datetime(&local)
        .latest()
        .or_else(|| PROVIDER_TZ.from_local_datetime(&(local + Duration::hours(1))).latest())
}
