//! Module for handling date parsing.

use chrono::NaiveDate;

/// Parse a date string with multiple format attempts
///
/// Formats are tried in the given order; the first one that accepts the
/// whole string wins. Surrounding whitespace is ignored.
#[must_use]
pub fn parse_date_string<S: AsRef<str>>(s: &str, formats: &[S]) -> Option<NaiveDate> {
    let s = s.trim();
    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format.as_ref()).ok())
}
