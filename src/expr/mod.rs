// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Recognized date expressions, one module per flavor:
//!
//!  - [`absolute`]: fixed-format calendar dates
//!  - [`relative`]: signed offsets from a base date
//!  - [`weekday`]: three-letter weekday tokens
//!  - [`time`]: the optional `HH:MM` suffix
//!
//! plus the machinery that turns a parsed expression into a concrete
//! timestamp: [`calendar`] field helpers, the per-date-part [`resolve`]
//! logic and the [`dst`] transition search.

use chrono::{DateTime, FixedOffset};
use winnow::{combinator::alt, ModalResult, Parser};

pub(crate) mod absolute;
pub(crate) mod calendar;
pub(crate) mod dst;
pub(crate) mod relative;
pub(crate) mod resolve;
pub(crate) mod time;
pub(crate) mod weekday;

#[derive(Clone)]
pub(crate) enum Item {
    Absolute(absolute::Date, Option<time::Time>),
    Today,
    Relative(relative::Expr),
}

/// Match `input` in full against the recognized formats, in priority
/// order: absolute dates, the literal `today`, the relative grammar.
pub(crate) fn parse(input: &str) -> Option<Item> {
    item.parse(input).ok()
}

fn item(input: &mut &str) -> ModalResult<Item> {
    alt((
        absolute::parse.map(|(date, time)| Item::Absolute(date, time)),
        "today".value(Item::Today),
        relative::parse.map(Item::Relative),
    ))
    .parse_next(input)
}

/// Match `input` in full against the relative grammar alone.
pub(crate) fn parse_relative(input: &str) -> Option<relative::Expr> {
    relative::parse.parse(input).ok()
}

/// Resolve a parsed item. `base` is only invoked for the item kinds
/// that need a base date, so resolving an absolute date never
/// initializes the run-scoped one.
pub(crate) fn at_date(
    item: Item,
    base: impl FnOnce() -> DateTime<FixedOffset>,
) -> Option<DateTime<FixedOffset>> {
    match item {
        Item::Absolute(date, explicit) => {
            let (hour, minute) = explicit.map_or((0, 0), |t| (t.hour, t.minute));
            calendar::build_date_time(date.year, date.month, date.day, hour, minute)
        }
        Item::Today => Some(base()),
        Item::Relative(expr) => resolve::resolve(&expr, base()),
    }
}
