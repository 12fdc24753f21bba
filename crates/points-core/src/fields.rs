//! # Field Parsers
//!
//! Date and time parsing for the textual receipt fields. Money parsing lives
//! in [`crate::money`].
//!
//! ## Accepted Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field          Wire format     Parsed as                              │
//! │  ─────────────  ──────────────  ─────────────────────────────────────  │
//! │  purchaseDate   YYYY-MM-DD      NaiveDate, then last char → ones digit │
//! │  purchaseTime   HH:MM           "HH:MM" + ":00" → NaiveTime            │
//! │                                                                         │
//! │  Anything else → CoreError::MalformedField                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::{CoreError, CoreResult};

/// Wire name of the purchase date field.
pub const PURCHASE_DATE_FIELD: &str = "purchaseDate";

/// Wire name of the purchase time field.
pub const PURCHASE_TIME_FIELD: &str = "purchaseTime";

/// chrono format for purchase dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// chrono format for a time of day with seconds.
pub const TIME_FORMAT: &str = "%H:%M:%S";

// =============================================================================
// Date
// =============================================================================

/// Parses a purchase date such as `"2022-01-01"`.
pub fn parse_purchase_date(raw: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
        CoreError::malformed(PURCHASE_DATE_FIELD, raw, format!("expected YYYY-MM-DD ({e})"))
    })
}

/// Returns the ones digit of the day-of-month, read from the date's last
/// character.
///
/// The date is validated as a calendar date first, so the last character is
/// always the day's ones digit.
///
/// ## Example
/// ```rust
/// use points_core::fields::day_ones_digit;
///
/// assert_eq!(day_ones_digit("2022-03-13").unwrap(), 3);
/// assert!(day_ones_digit("2022-03-1x").is_err());
/// assert!(day_ones_digit("").is_err());
/// ```
pub fn day_ones_digit(raw: &str) -> CoreResult<u32> {
    parse_purchase_date(raw)?;

    raw.chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| CoreError::malformed(PURCHASE_DATE_FIELD, raw, "must end in a digit"))
}

// =============================================================================
// Time
// =============================================================================

/// Parses a purchase time such as `"14:33"` into a time of day.
///
/// The wire format has no seconds, so `":00"` is appended before parsing.
/// A value that already carries seconds is rejected.
///
/// ## Example
/// ```rust
/// use chrono::NaiveTime;
/// use points_core::fields::parse_purchase_time;
///
/// let t = parse_purchase_time("14:33").unwrap();
/// assert_eq!(t, NaiveTime::from_hms_opt(14, 33, 0).unwrap());
///
/// assert!(parse_purchase_time("25:00").is_err());
/// assert!(parse_purchase_time("14:33:00").is_err());
/// ```
pub fn parse_purchase_time(raw: &str) -> CoreResult<NaiveTime> {
    let with_seconds = format!("{raw}:00");
    NaiveTime::parse_from_str(&with_seconds, TIME_FORMAT).map_err(|e| {
        CoreError::malformed(PURCHASE_TIME_FIELD, raw, format!("expected HH:MM ({e})"))
    })
}
