//! Formatting utilities for card display
//!
//! Central location for the display fallbacks and the reported-date
//! format so the board and the CLI listing stay consistent.

use jiff::Timestamp;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;

/// Shown in place of a missing address.
pub const ADDRESS_FALLBACK: &str = "Address not available";

/// Shown in place of a missing or unparsable reported-at timestamp.
pub const DATE_FALLBACK: &str = "N/A";

/// Report count assumed when the server omits one.
pub const DEFAULT_REPORT_COUNT: u32 = 1;

/// Short month/day/time rendering of a card's reported-at line.
const REPORTED_DATE_FORMAT: &str = "%b %-d, %I:%M %p";

/// Format a reported-at timestamp as a short month/day/time string.
///
/// Accepts an instant with an offset ("2024-05-01T10:00:00Z") or a civil
/// datetime without one. Anything else, including a missing value,
/// renders as [`DATE_FALLBACK`].
///
/// # Examples
///
/// ```
/// use vialis::formatting::format_reported_date;
///
/// assert_eq!(
///     format_reported_date(Some("2024-05-01T10:00:00Z")),
///     "May 1, 10:00 AM"
/// );
/// assert_eq!(format_reported_date(None), "N/A");
/// assert_eq!(format_reported_date(Some("yesterday-ish")), "N/A");
/// ```
pub fn format_reported_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return DATE_FALLBACK.to_string();
    };

    if let Ok(ts) = raw.parse::<Timestamp>() {
        return ts
            .to_zoned(TimeZone::UTC)
            .strftime(REPORTED_DATE_FORMAT)
            .to_string();
    }

    // The server has been observed to emit civil datetimes with no offset.
    if let Ok(dt) = raw.parse::<DateTime>() {
        return dt.strftime(REPORTED_DATE_FORMAT).to_string();
    }

    DATE_FALLBACK.to_string()
}
