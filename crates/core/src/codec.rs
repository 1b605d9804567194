//! Slot token codec.
//!
//! Every `DateSlot` persists as exactly one string token in the canonical
//! form `YYYY-MM-DDTHH:mm:ss+05:30`. Two historical shapes must still be
//! read (never written): a bare `YYYY-MM-DD` date and an ISO datetime with a
//! missing or foreign offset. Decoding is total: malformed tokens degrade to
//! best-effort defaults instead of failing, so a bad legacy row can never
//! take down the calendar view.
//!
//! Dates are formatted and parsed as plain calendar values; nothing here
//! round-trips through a UTC epoch, which is what would shift a date by one
//! day on either side of the stored offset.

use chrono::{NaiveDate, NaiveTime};

use crate::models::date_slot::DateSlot;

/// The single offset all stored tokens carry.
pub const UTC_OFFSET_SUFFIX: &str = "+05:30";

const COMPACT_OFFSET: &str = "+0530";

/// The storage shapes a token can arrive in. Only `Canonical` is ever
/// written; the legacy variants survive in rows migrated in place.
#[derive(Debug, PartialEq, Eq)]
enum TokenShape<'a> {
    LegacyDateOnly(&'a str),
    LegacyNoOffset { date: &'a str, time: &'a str },
    Canonical { date: &'a str, time: &'a str },
}

fn classify(token: &str) -> TokenShape<'_> {
    if is_bare_date(token) {
        return TokenShape::LegacyDateOnly(token);
    }
    if token.contains(UTC_OFFSET_SUFFIX) || token.contains(COMPACT_OFFSET) {
        if let Some((date, rest)) = token.split_once('T') {
            let time = rest.split_once('+').map_or(rest, |(t, _)| t);
            return TokenShape::Canonical { date, time };
        }
    }
    if let Some((date, rest)) = token.split_once('T') {
        return TokenShape::LegacyNoOffset {
            date,
            time: strip_offset(rest),
        };
    }
    // Unrecognized shape: treat the whole token as a date-only value.
    TokenShape::LegacyDateOnly(token)
}

fn is_bare_date(token: &str) -> bool {
    let b = token.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

/// Drop a trailing `Z` or `±HH:mm` offset from the time part of a token.
fn strip_offset(raw: &str) -> &str {
    let raw = raw.strip_suffix('Z').unwrap_or(raw);
    let raw = raw.split_once('+').map_or(raw, |(t, _)| t);
    // A '-' inside the time part can only introduce a negative offset.
    match raw.find('-') {
        Some(pos) if pos > 0 => &raw[..pos],
        _ => raw,
    }
}

fn parse_date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").unwrap_or_default()
}

/// Reduce a raw time string to minute precision. Seconds are dropped; an
/// empty or malformed value means midnight.
pub fn sanitize_time(raw: &str) -> NaiveTime {
    let mut parts = raw.trim().splitn(3, ':');
    let hour = parts.next().and_then(|p| p.parse::<u32>().ok());
    let minute = parts.next().and_then(|p| p.parse::<u32>().ok());
    match (hour, minute) {
        (Some(h), Some(m)) => NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN),
        _ => NaiveTime::MIN,
    }
}

/// Encode a slot into its canonical 25-character token.
pub fn encode(slot: &DateSlot) -> String {
    format!(
        "{}T{}:00{}",
        slot.date.format("%Y-%m-%d"),
        slot.start_time.format("%H:%M"),
        UTC_OFFSET_SUFFIX
    )
}

/// Decode a stored token of any accepted shape. Total: garbage decodes to
/// the default date at midnight rather than erroring.
pub fn decode(token: &str) -> DateSlot {
    match classify(token.trim()) {
        TokenShape::LegacyDateOnly(raw) => DateSlot {
            date: parse_date(raw),
            start_time: NaiveTime::MIN,
        },
        TokenShape::Canonical { date, time } | TokenShape::LegacyNoOffset { date, time } => {
            DateSlot {
                date: parse_date(date),
                start_time: sanitize_time(time),
            }
        }
    }
}

/// Rewrite a stored token into canonical form. Legacy rows pass through here
/// before being compared against newly proposed slots.
pub fn normalize(token: &str) -> String {
    encode(&decode(token))
}
