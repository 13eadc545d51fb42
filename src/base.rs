// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! The run-scoped base date.
//!
//! Relative expressions that are given no explicit base resolve against
//! a single "today" snapshot, fixed at first use rather than sliding
//! with the wall clock. It is replaced wholesale on reset, so readers
//! on other threads observe either the old or the new snapshot.

use std::sync::RwLock;

use chrono::{DateTime, FixedOffset, Local};

use crate::expr::calendar;

static BASE_DATE: RwLock<Option<DateTime<FixedOffset>>> = RwLock::new(None);

/// The current base date, initialized on first call with the local
/// date truncated to midnight.
pub(crate) fn base_date() -> DateTime<FixedOffset> {
    {
        let guard = BASE_DATE.read().expect("base date lock poisoned");
        if let Some(dt) = *guard {
            return dt;
        }
    }
    let mut guard = BASE_DATE.write().expect("base date lock poisoned");
    *guard.get_or_insert_with(truncated_now)
}

/// Replace the base date with a freshly truncated "now".
pub(crate) fn reset() {
    let mut guard = BASE_DATE.write().expect("base date lock poisoned");
    *guard = Some(truncated_now());
}

fn truncated_now() -> DateTime<FixedOffset> {
    calendar::truncate_to_midnight(Local::now().into())
}

#[cfg(test)]
mod tests {
    use super::{base_date, reset};
    use chrono::{Local, NaiveTime};

    #[test]
    fn stable_until_reset() {
        let first = base_date();
        assert_eq!(first, base_date());

        reset();
        let fresh = base_date();
        assert_eq!(fresh.time(), NaiveTime::MIN);
        assert_eq!(fresh.date_naive(), Local::now().date_naive());
        assert_eq!(fresh, base_date());
    }
}
