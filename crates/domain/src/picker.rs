// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date-time picker rules.
//!
//! The calendar control offers wall-clock times on a fixed minute grid in the
//! user's timezone. Picks are converted to UTC instants before they enter the
//! selection, and back to wall-clock time for display.
//!
//! ## Invariants
//!
//! - Picked minutes are multiples of [`PICKER_INTERVAL_MINUTES`]
//! - Picked seconds are zero
//! - Picks inside a DST gap are refused
//! - Picks inside a DST overlap resolve to the earlier instant

use crate::error::DomainError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

/// Minutes between two consecutive times offered by the picker.
pub const PICKER_INTERVAL_MINUTES: u8 = 5;

/// Parses an IANA timezone name.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the name is unknown.
pub fn parse_timezone(timezone: &str) -> Result<Tz, DomainError> {
    timezone
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(timezone.to_string()))
}

/// Converts a wall-clock pick into a UTC instant.
///
/// # Arguments
///
/// * `date` - The picked calendar date
/// * `time` - The picked time of day
/// * `timezone` - The IANA timezone the pick was made in
///
/// # Errors
///
/// Returns an error if:
/// - The timezone is unknown
/// - The time is off the picker grid
/// - The wall-clock time falls in a DST gap of the timezone
pub fn resolve_wall_clock(
    date: Date,
    time: Time,
    timezone: &str,
) -> Result<OffsetDateTime, DomainError> {
    let tz: Tz = parse_timezone(timezone)?;

    if time.second() != 0 || time.nanosecond() != 0 || time.minute() % PICKER_INTERVAL_MINUTES != 0
    {
        return Err(DomainError::OffGridTime {
            minute: time.minute(),
            interval: PICKER_INTERVAL_MINUTES,
        });
    }

    // Convert time::Date to chrono::NaiveDate
    let naive_date: NaiveDate = NaiveDate::from_ymd_opt(
        date.year(),
        u32::from(u8::from(date.month())),
        u32::from(date.day()),
    )
    .ok_or_else(|| DomainError::DateConversion(format!("Invalid picked date: {date}")))?;

    let naive_time: NaiveTime =
        NaiveTime::from_hms_opt(u32::from(time.hour()), u32::from(time.minute()), 0)
            .ok_or_else(|| DomainError::DateConversion(format!("Invalid picked time: {time}")))?;

    let local: NaiveDateTime = naive_date.and_time(naive_time);
    // An overlap keeps the first occurrence (the pre-transition offset)
    let resolved: DateTime<Tz> = tz
        .from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| DomainError::UnresolvableLocalTime {
            local: local.to_string(),
            timezone: timezone.to_string(),
        })?;

    OffsetDateTime::from_unix_timestamp(resolved.timestamp())
        .map_err(|e| DomainError::DateConversion(e.to_string()))
}

/// Converts a UTC instant into wall-clock time in a timezone.
///
/// # Errors
///
/// Returns an error if the timezone is unknown or the instant is outside the
/// representable range.
pub fn to_wall_clock(at: OffsetDateTime, timezone: &str) -> Result<PrimitiveDateTime, DomainError> {
    let tz: Tz = parse_timezone(timezone)?;

    let utc: DateTime<Utc> = DateTime::from_timestamp(at.unix_timestamp(), 0)
        .ok_or_else(|| DomainError::DateConversion(format!("Instant out of range: {at}")))?;
    let local: NaiveDateTime = utc.with_timezone(&tz).naive_local();

    // Convert chrono::NaiveDateTime back to time::PrimitiveDateTime
    let month: Month = u8::try_from(local.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| DomainError::DateConversion(format!("Invalid month in {local}")))?;
    let day: u8 = u8::try_from(local.day())
        .map_err(|_| DomainError::DateConversion(format!("Invalid day in {local}")))?;
    let date: Date = Date::from_calendar_date(local.year(), month, day)
        .map_err(|e| DomainError::DateConversion(e.to_string()))?;

    let hour: u8 = u8::try_from(local.hour())
        .map_err(|_| DomainError::DateConversion(format!("Invalid hour in {local}")))?;
    let minute: u8 = u8::try_from(local.minute())
        .map_err(|_| DomainError::DateConversion(format!("Invalid minute in {local}")))?;
    let second: u8 = u8::try_from(local.second())
        .map_err(|_| DomainError::DateConversion(format!("Invalid second in {local}")))?;
    let time: Time = Time::from_hms(hour, minute, second)
        .map_err(|e| DomainError::DateConversion(e.to_string()))?;

    Ok(PrimitiveDateTime::new(date, time))
}
