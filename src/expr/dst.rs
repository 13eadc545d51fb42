// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Locate daylight-saving transitions of the system-local timezone.
//!
//! chrono exposes no transition table, only the UTC offset in effect at
//! a given instant. The year is therefore scanned in day-sized steps,
//! and each step across which the offset changes is narrowed down by
//! bisection to the transition second. The result is the local wall
//! time immediately after the transition, i.e. already under the new
//! offset.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeDelta, TimeZone};

/// The first standard-to-daylight transition within `year`, local time,
/// or `None` when the zone observes no such shift that year.
pub(crate) fn spring_forward(year: i32) -> Option<DateTime<FixedOffset>> {
    transition(year, false)
}

/// The last daylight-to-standard transition within `year`, local time.
pub(crate) fn fall_back(year: i32) -> Option<DateTime<FixedOffset>> {
    transition(year, true)
}

fn transition(year: i32, falling: bool) -> Option<DateTime<FixedOffset>> {
    let start = Local
        .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .earliest()?
        .naive_utc();
    let end = Local
        .with_ymd_and_hms(year, 12, 31, 23, 59, 59)
        .earliest()?
        .naive_utc();
    let step = TimeDelta::try_hours(24)?;

    let mut found = None;
    let mut cursor = start;
    while cursor < end {
        let next = (cursor + step).min(end);
        let before = utc_offset_at(cursor);
        let after = utc_offset_at(next);
        if (falling && after < before) || (!falling && after > before) {
            let instant = bisect(cursor, next, before);
            if !falling {
                // the first shift forward wins
                return Some(local_after(instant));
            }
            // keep the last shift back at or before the end of the year
            found = Some(instant);
        }
        cursor = next;
    }
    found.map(local_after)
}

/// Narrow `[lo, hi]` down to the first second at which the offset no
/// longer equals `before`.
fn bisect(mut lo: NaiveDateTime, mut hi: NaiveDateTime, before: i32) -> NaiveDateTime {
    while hi - lo > TimeDelta::seconds(1) {
        let mid = lo + (hi - lo) / 2;
        if utc_offset_at(mid) == before {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    hi
}

fn utc_offset_at(utc: NaiveDateTime) -> i32 {
    Local.offset_from_utc_datetime(&utc).fix().local_minus_utc()
}

fn local_after(utc: NaiveDateTime) -> DateTime<FixedOffset> {
    Local.from_utc_datetime(&utc).fixed_offset()
}

// Transition lookups depend on the process-wide TZ variable, so their
// tests live in the tests/ directory where each zone gets its own
// test binary.
