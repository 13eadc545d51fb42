// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Parse an absolute date.
//!
//! Three fixed formats are recognized:
//!
//! ```text
//! 2015-12-31     # ISO-like, single-digit month and day allowed
//! 20151231       # compact, exactly eight digits
//! 12/31/2015     # U.S. writing
//! ```
//!
//! The dashed form may carry a time of day: `2015-12-31 08:30`. Field
//! ranges are checked here; whether the combination names a real
//! calendar day (no Feb 30) is checked when the date is built.

use winnow::{
    ascii::multispace1,
    combinator::{alt, opt, preceded},
    seq,
    stream::AsChar,
    token::{take, take_while},
    ModalResult, Parser,
};

use super::time::{self, Time};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub(crate) struct Date {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) day: u32,
}

pub(crate) fn parse(input: &mut &str) -> ModalResult<(Date, Option<Time>)> {
    alt((
        (iso, opt(preceded(multispace1, time::parse))),
        compact.map(|d| (d, None)),
        us.map(|d| (d, None)),
    ))
    .parse_next(input)
}

/// Parse `YYYY-M-D`
fn iso(input: &mut &str) -> ModalResult<Date> {
    seq!(Date {
        year: year,
        _: '-',
        month: month,
        _: '-',
        day: day,
    })
    .parse_next(input)
}

/// Parse `YYYYMMDD`
fn compact(input: &mut &str) -> ModalResult<Date> {
    (
        take(4usize).try_map(|s: &str| s.parse::<i32>()),
        take(2usize).try_map(|s: &str| s.parse::<u32>()),
        take(2usize).try_map(|s: &str| s.parse::<u32>()),
    )
        .verify(|(_, month, day)| (1..=12).contains(month) && (1..=31).contains(day))
        .map(|(year, month, day)| Date { year, month, day })
        .parse_next(input)
}

/// Parse `M/D/YYYY`
fn us(input: &mut &str) -> ModalResult<Date> {
    seq!(Date {
        month: month,
        _: '/',
        day: day,
        _: '/',
        year: year,
    })
    .parse_next(input)
}

fn year(input: &mut &str) -> ModalResult<i32> {
    take_while(4..=4, AsChar::is_dec_digit)
        .verify_map(|s: &str| s.parse().ok())
        .parse_next(input)
}

fn month(input: &mut &str) -> ModalResult<u32> {
    take_while(1..=2, AsChar::is_dec_digit)
        .verify_map(|s: &str| {
            let m: u32 = s.parse().ok()?;
            (1..=12).contains(&m).then_some(m)
        })
        .parse_next(input)
}

fn day(input: &mut &str) -> ModalResult<u32> {
    take_while(1..=2, AsChar::is_dec_digit)
        .verify_map(|s: &str| {
            let d: u32 = s.parse().ok()?;
            (1..=31).contains(&d).then_some(d)
        })
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::{parse, Date};
    use crate::expr::time::Time;
    use winnow::Parser;

    #[test]
    fn date_only() {
        let reference = Date {
            year: 2015,
            month: 12,
            day: 31,
        };

        for s in ["2015-12-31", "20151231", "12/31/2015"] {
            assert_eq!(parse.parse(s).unwrap(), (reference, None), "input: {s}");
        }
    }

    #[test]
    fn single_digit_month_day() {
        let reference = Date {
            year: 1987,
            month: 5,
            day: 7,
        };

        for s in ["1987-5-7", "1987-05-07", "1987-5-07", "5/7/1987", "05/07/1987"] {
            assert_eq!(parse.parse(s).unwrap(), (reference, None), "input: {s}");
        }
    }

    #[test]
    fn with_time() {
        assert_eq!(
            parse.parse("2015-12-31 08:30").unwrap(),
            (
                Date {
                    year: 2015,
                    month: 12,
                    day: 31,
                },
                Some(Time {
                    hour: 8,
                    minute: 30,
                }),
            )
        );
    }

    #[test]
    fn rejected() {
        for s in [
            "",
            "2015-13-01",
            "2015-00-01",
            "2015-12-00",
            "2015-12-32",
            "20151301",
            "201512311",   // nine digits
            "2015123",     // seven digits
            "13/01/2015",
            "12/31/15",    // the year must be four digits
            "15-12-31",
            "20151231 08:30", // only the dashed form takes a time
            "12/31/2015 08:30",
            "2015-12-31  ",
        ] {
            assert!(parse.parse(s).is_err(), "input: {s}");
        }
    }
}
