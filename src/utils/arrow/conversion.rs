//! Conversions between Arrow `Date32` day counts and chrono dates.

use chrono::{Days, NaiveDate};

const UNIX_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1970, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// Convert an Arrow `Date32` value (days since the Unix epoch) to `NaiveDate`
#[must_use]
pub fn date32_to_naive_date(days_since_epoch: i32) -> Option<NaiveDate> {
    let days = Days::new(u64::from(days_since_epoch.unsigned_abs()));
    if days_since_epoch >= 0 {
        UNIX_EPOCH.checked_add_days(days)
    } else {
        UNIX_EPOCH.checked_sub_days(days)
    }
}

/// Convert a `NaiveDate` to an Arrow `Date32` value
#[must_use]
pub fn naive_date_to_date32(date: NaiveDate) -> i32 {
    // Dates representable by chrono stay well inside i32 days of the epoch.
    (date - UNIX_EPOCH).num_days() as i32
}
