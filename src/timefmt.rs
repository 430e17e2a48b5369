//! Show time parsing and formatting
//!
//! Show start times are stored as naive UTC timestamps with whole-second
//! precision. This module owns the conversions between the HTML form
//! representation, the stored value, and the text shown on pages.

use chrono::{NaiveDateTime, Timelike, Utc};

/// Accepted form input formats, tried in order.
///
/// Browsers submit `datetime-local` values as `YYYY-MM-DDTHH:MM` (seconds
/// appear only when the user picks them); the space-separated variants
/// accept hand-typed values.
const FORM_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Current UTC time truncated to whole seconds.
///
/// All "is this show past or upcoming" decisions compare against this value.
/// Truncation keeps the bound timestamp in the same textual shape as stored
/// start times, so SQL comparisons stay consistent.
pub fn now() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Parse a show start time submitted by a form.
///
/// Returns `None` when the value matches none of the accepted formats.
///
/// # Examples
///
/// ```
/// use marquee::timefmt;
///
/// assert!(timefmt::parse_form("2035-04-01T20:00").is_some());
/// assert!(timefmt::parse_form("2035-04-01 20:00:30").is_some());
/// assert!(timefmt::parse_form("next tuesday").is_none());
/// ```
pub fn parse_form(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    FORM_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Format a start time for display on a page.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use marquee::timefmt;
///
/// let t = NaiveDate::from_ymd_opt(2035, 4, 1)
///     .unwrap()
///     .and_hms_opt(20, 0, 0)
///     .unwrap();
/// assert_eq!(timefmt::display(&t), "Sun Apr 01, 2035 08:00 PM");
/// ```
pub fn display(t: &NaiveDateTime) -> String {
    t.format("%a %b %d, %Y %I:%M %p").to_string()
}

/// Format a start time as a `datetime-local` input value.
pub fn form_value(t: &NaiveDateTime) -> String {
    t.format("%Y-%m-%dT%H:%M").to_string()
}
