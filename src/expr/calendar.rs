// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Calendar field helpers shared by the resolvers.
//!
//! All helpers take and return values; nothing here touches shared state.
//! Results keep the offset of their input, so a date stays in whatever
//! zone the caller's base was expressed in.

use chrono::{
    DateTime, Datelike, FixedOffset, Local, MappedLocalTime, NaiveDate, NaiveTime, TimeDelta,
    TimeZone,
};

/// Drop the time-of-day, keeping the date and offset.
pub(crate) fn truncate_to_midnight(dt: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    dt - dt.time().signed_duration_since(NaiveTime::MIN)
}

/// Midnight plus an explicit hour and minute.
pub(crate) fn at_time(
    dt: DateTime<FixedOffset>,
    hour: u32,
    minute: u32,
) -> Option<DateTime<FixedOffset>> {
    let delta = TimeDelta::try_minutes(i64::from(hour * 60 + minute))?;
    truncate_to_midnight(dt).checked_add_signed(delta)
}

/// The same instant moved to the last day of its month.
pub(crate) fn month_end(dt: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    dt.with_day(last_day_of_month(dt.year(), dt.month()))
}

/// The same instant moved to Dec 31 of its year.
pub(crate) fn year_end(dt: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    dt.with_day(1)?.with_month(12)?.with_day(31)
}

/// The same instant moved to the nth day of its year, 1-based. Fails when
/// the year has no such day.
pub(crate) fn nth_day_of_year(dt: DateTime<FixedOffset>, n: u32) -> Option<DateTime<FixedOffset>> {
    let date = NaiveDate::from_yo_opt(dt.year(), n)?;
    dt.with_day(1)?.with_month(date.month())?.with_day(date.day())
}

pub(crate) fn last_day_of_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map_or(31, |d| d.day())
}

/// Build a local timestamp from explicit components, independent of any
/// base date.
pub(crate) fn build_date_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Option<DateTime<FixedOffset>> {
    match Local.with_ymd_and_hms(year, month, day, hour, minute, 0) {
        MappedLocalTime::Single(dt) => Some(dt.fixed_offset()),
        // A fold picks the earlier wall time, a gap has no mapping.
        MappedLocalTime::Ambiguous(earliest, _) => Some(earliest.fixed_offset()),
        MappedLocalTime::None => None,
    }
}
