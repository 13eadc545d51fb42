// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Parse a relative-date expression.
//!
//! The grammar is:
//!
//! ```text
//! expr      := sign digits datepart [ secondaryToken ] [ whitespace time ]
//! sign      := '+' | '-'
//! datepart  := 'min' | 'd' | 'w' | 'm' | 'y' | weekdayAbbrev | 'sdst' | 'edst'
//! weekdayAbbrev := 'sun'|'mon'|'tue'|'wed'|'thu'|'fri'|'sat'
//! secondaryToken := innerOffset | digits{1,2} | 'l'
//! innerOffset := sign digits 'd'     -- only after sdst/edst
//! time      := digit{1,2} ':' digit{2}
//! ```
//!
//! The secondary token is interpreted per date part: a digit 1-7 after
//! `w` selects a weekday, a day-of-unit number or `l` ("last") after
//! `m` and `y` selects a day, and a signed day offset follows
//! `sdst`/`edst`. Everywhere else a day-of-unit secondary is still
//! grammatical but has no meaning, so it parses and is ignored. The
//! sign on the initial offset is mandatory, which is what distinguishes
//! a relative expression from an absolute date at a glance.

use winnow::{
    ascii::{digit1, multispace1},
    combinator::{alt, opt, preceded, terminated},
    seq,
    stream::AsChar,
    token::{one_of, take_while},
    ModalResult, Parser,
};

use super::{time, weekday};

/// A refinement selecting a day within the shifted unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DayOfUnit {
    /// The nth day, counting from 1.
    Nth(u32),
    /// The last day of the unit.
    Last,
}

/// The unit of displacement, tagged with the refinements it supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Part {
    Minutes,
    Days,
    /// `weekday` counts 1=Sunday through 7=Saturday.
    Weeks { weekday: Option<u32> },
    Months { day: Option<DayOfUnit> },
    Years { day: Option<DayOfUnit> },
    /// A daylight-saving transition of the shifted year: the start of
    /// daylight time, or its end.
    Dst { end: bool, day_offset: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Expr {
    pub(crate) offset: i32,
    pub(crate) part: Part,
    pub(crate) time: Option<time::Time>,
}

pub(crate) fn parse(input: &mut &str) -> ModalResult<Expr> {
    seq!(Expr {
        offset: signed_offset,
        part: part,
        time: opt(preceded(multispace1, time::parse)),
    })
    .parse_next(input)
}

/// Parse the mandatory signed initial offset, e.g. `+2` or `-1`.
fn signed_offset(input: &mut &str) -> ModalResult<i32> {
    (one_of(['+', '-']), digit1)
        .take()
        .verify_map(|s: &str| s.parse().ok())
        .parse_next(input)
}

// `min` must be tried before the bare `m` month token, and the dst and
// weekday tokens before the single-letter ones, so that e.g. `+1sat`
// never stops at a partial match.
fn part(input: &mut &str) -> ModalResult<Part> {
    alt((minutes, dst, weekday_name, weeks, months, years, days)).parse_next(input)
}

// The grammar allows a day-of-unit secondary after any date part; for
// minutes and days it carries no meaning and is accepted and ignored.

fn minutes(input: &mut &str) -> ModalResult<Part> {
    terminated("min", opt(day_of_unit))
        .value(Part::Minutes)
        .parse_next(input)
}

fn days(input: &mut &str) -> ModalResult<Part> {
    terminated('d', opt(day_of_unit))
        .value(Part::Days)
        .parse_next(input)
}

// Only a digit 1-7 selects a weekday; any other secondary is ignored.
fn weeks(input: &mut &str) -> ModalResult<Part> {
    preceded('w', opt(day_of_unit))
        .map(|day| Part::Weeks {
            weekday: match day {
                Some(DayOfUnit::Nth(n @ 1..=7)) => Some(n),
                _ => None,
            },
        })
        .parse_next(input)
}

fn weekday_name(input: &mut &str) -> ModalResult<Part> {
    weekday::parse
        .map(|n| Part::Weeks { weekday: Some(n) })
        .parse_next(input)
}

fn months(input: &mut &str) -> ModalResult<Part> {
    preceded('m', opt(day_of_unit))
        .map(|day| Part::Months { day })
        .parse_next(input)
}

fn years(input: &mut &str) -> ModalResult<Part> {
    preceded('y', opt(day_of_unit))
        .map(|day| Part::Years { day })
        .parse_next(input)
}

fn dst(input: &mut &str) -> ModalResult<Part> {
    (
        alt(("sdst".value(false), "edst".value(true))),
        opt(inner_day_offset),
    )
        .map(|(end, day_offset)| Part::Dst {
            end,
            day_offset: day_offset.unwrap_or(0),
        })
        .parse_next(input)
}

/// Parse the signed day adjustment after a dst token, e.g. the `-3d` in
/// `+1sdst-3d`.
fn inner_day_offset(input: &mut &str) -> ModalResult<i32> {
    terminated((one_of(['+', '-']), digit1).take(), 'd')
        .verify_map(|s: &str| s.parse().ok())
        .parse_next(input)
}

fn day_of_unit(input: &mut &str) -> ModalResult<DayOfUnit> {
    alt((
        'l'.value(DayOfUnit::Last),
        take_while(1..=2, AsChar::is_dec_digit)
            .verify_map(|s: &str| s.parse().ok())
            .map(DayOfUnit::Nth),
    ))
    .parse_next(input)
}
