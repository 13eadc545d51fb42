// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Apply a parsed relative expression to a base date.
//!
//! Every date part except minutes works on the base truncated to
//! midnight; minutes offset the real-world clock instead and keep the
//! full time-of-day. An explicit `HH:MM` is applied last. `None` from
//! any step means the expression named a date that does not exist
//! (day 31 of a 30-day month, a year without a daylight-saving shift)
//! or overflowed the calendar, and surfaces as a format error at the
//! API boundary.

use chrono::{DateTime, Datelike, Days, FixedOffset, Local, Months, TimeDelta};

use super::{
    calendar, dst,
    relative::{DayOfUnit, Expr, Part},
};

pub(crate) fn resolve(expr: &Expr, base: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    let dt = match expr.part {
        Part::Minutes => {
            let now: DateTime<FixedOffset> = Local::now().into();
            return now.checked_add_signed(TimeDelta::try_minutes(i64::from(expr.offset))?);
        }
        Part::Days => shift_days(calendar::truncate_to_midnight(base), expr.offset)?,
        Part::Weeks { weekday } => {
            let start = calendar::truncate_to_midnight(base);
            let dt = shift_days(start, expr.offset.checked_mul(7)?)?;
            match weekday {
                Some(n) => snap_to_weekday(dt, n)?,
                None => dt,
            }
        }
        Part::Months { day } => {
            let dt = shift_months(calendar::truncate_to_midnight(base), expr.offset)?;
            match day {
                Some(DayOfUnit::Nth(n)) => dt.with_day(n)?,
                Some(DayOfUnit::Last) => calendar::month_end(dt)?,
                None => dt,
            }
        }
        Part::Years { day } => {
            let dt = shift_years(calendar::truncate_to_midnight(base), expr.offset)?;
            match day {
                Some(DayOfUnit::Nth(n)) => calendar::nth_day_of_year(dt, n)?,
                Some(DayOfUnit::Last) => calendar::year_end(dt)?,
                None => dt,
            }
        }
        Part::Dst { end, day_offset } => {
            let start = calendar::truncate_to_midnight(base);
            let year = shift_years(start, expr.offset)?.year();
            let transition = if end {
                dst::fall_back(year)?
            } else {
                dst::spring_forward(year)?
            };
            shift_days(calendar::truncate_to_midnight(transition), day_offset)?
        }
    };

    match expr.time {
        Some(t) => calendar::at_time(dt, t.hour, t.minute),
        None => Some(dt),
    }
}

fn shift_days(dt: DateTime<FixedOffset>, n: i32) -> Option<DateTime<FixedOffset>> {
    if n >= 0 {
        dt.checked_add_days(Days::new(u64::from(n.unsigned_abs())))
    } else {
        dt.checked_sub_days(Days::new(u64::from(n.unsigned_abs())))
    }
}

/// Month arithmetic clamps to the end of the target month, so Jan 31
/// plus one month is the last day of February.
fn shift_months(dt: DateTime<FixedOffset>, n: i32) -> Option<DateTime<FixedOffset>> {
    if n >= 0 {
        dt.checked_add_months(Months::new(n.unsigned_abs()))
    } else {
        dt.checked_sub_months(Months::new(n.unsigned_abs()))
    }
}

/// Year arithmetic clamps Feb 29 to Feb 28 when the target year is not
/// a leap year. Also used by the dst resolver to pick its target year.
pub(crate) fn shift_years(dt: DateTime<FixedOffset>, n: i32) -> Option<DateTime<FixedOffset>> {
    let year = dt.year().checked_add(n)?;
    match dt.with_year(year) {
        Some(shifted) => Some(shifted),
        None => dt.with_day(28)?.with_year(year),
    }
}

/// Snap to weekday `n` (1=Sunday .. 7=Saturday) within the week that
/// contains `dt`, with Sunday fixed as the first day of the week.
fn snap_to_weekday(dt: DateTime<FixedOffset>, n: u32) -> Option<DateTime<FixedOffset>> {
    let back = dt.weekday().num_days_from_sunday();
    let week_start = dt.checked_sub_days(Days::new(u64::from(back)))?;
    week_start.checked_add_days(Days::new(u64::from(n - 1)))
}
