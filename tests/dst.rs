// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Daylight-saving resolution in a zone with known transition dates.
//! Every test in this binary pins the same TZ value, so they can run
//! concurrently within the process.

use anyhow::Result;
use chrono::{DateTime, FixedOffset, NaiveDate};
use reldate::parse_relative;
use std::env;

fn base(year: i32, month: u32, day: u32) -> DateTime<FixedOffset> {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .fixed_offset()
}

fn local_date(dt: DateTime<FixedOffset>) -> String {
    dt.naive_local().format("%Y-%m-%d %H:%M:%S").to_string()
}

// New York in 2021: spring forward on Mar 14, fall back on Nov 7.

#[test]
fn spring_transition() -> Result<()> {
    env::set_var("TZ", "America/New_York");

    let dt = parse_relative("+0SDST", Some(base(2021, 6, 1)))?;
    assert_eq!(local_date(dt), "2021-03-14 00:00:00");
    Ok(())
}

#[test]
fn fall_transition() -> Result<()> {
    env::set_var("TZ", "America/New_York");

    let dt = parse_relative("+0EDST", Some(base(2021, 6, 1)))?;
    assert_eq!(local_date(dt), "2021-11-07 00:00:00");
    Ok(())
}

#[test]
fn year_offset_shifts_the_target_year() -> Result<()> {
    env::set_var("TZ", "America/New_York");

    // 2022 sprang forward on Mar 13
    let dt = parse_relative("+1SDST", Some(base(2021, 6, 1)))?;
    assert_eq!(local_date(dt), "2022-03-13 00:00:00");

    // 2020 fell back on Nov 1
    let dt = parse_relative("-1EDST", Some(base(2021, 6, 1)))?;
    assert_eq!(local_date(dt), "2020-11-01 00:00:00");
    Ok(())
}

#[test]
fn inner_day_offset_and_time() -> Result<()> {
    env::set_var("TZ", "America/New_York");

    let dt = parse_relative("+0SDST+1d", Some(base(2021, 6, 1)))?;
    assert_eq!(local_date(dt), "2021-03-15 00:00:00");

    let dt = parse_relative("+0SDST-3d", Some(base(2021, 6, 1)))?;
    assert_eq!(local_date(dt), "2021-03-11 00:00:00");

    let dt = parse_relative("+0EDST 17:00", Some(base(2021, 6, 1)))?;
    assert_eq!(local_date(dt), "2021-11-07 17:00:00");
    Ok(())
}
