//! Resolving "today" and the current month in the configured timezone.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::{Error, year_month::YearMonth};

/// The current UTC offset of `canonical_timezone`, or `None` if the name is unknown.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Today's date in `canonical_timezone`, e.g. "Asia/Tokyo".
///
/// This is evaluated on every call so that a long running server rolls over
/// to the next month on time.
///
/// # Errors
///
/// Returns [Error::InvalidTimezoneError] if `canonical_timezone` is not a
/// known timezone name.
pub fn local_today(canonical_timezone: &str) -> Result<Date, Error> {
    let offset = get_local_offset(canonical_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {canonical_timezone}");
        Error::InvalidTimezoneError(canonical_timezone.to_owned())
    })?;

    Ok(OffsetDateTime::now_utc().to_offset(offset).date())
}

/// The month of [local_today].
pub fn current_month(canonical_timezone: &str) -> Result<YearMonth, Error> {
    local_today(canonical_timezone).map(YearMonth::from)
}
