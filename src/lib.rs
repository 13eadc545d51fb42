// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
//! A Rust crate for parsing compact relative-date expressions and a few
//! fixed absolute formats, resolving them to a `DateTime`.
//!
//! Relative expressions are a signed offset, a date-part unit and
//! optional refinements:
//!
//! * `+2d`, `-1w`: plain offsets in days or weeks
//! * `+1m15`, `-1ml`: the 15th or last day of the shifted month
//! * `-1mon`: Monday of the week one before the base
//! * `+1d 17:00`: an explicit time of day
//! * `+0sdst`, `+0edst-1d`: around the year's daylight-saving shifts
//!
//! Expressions without an explicit base resolve against a run-scoped
//! "today": the local date at first use, truncated to midnight and
//! fixed until [`reset_base_date`] is called.

use std::error::Error;
use std::fmt::{self, Display};

use chrono::{DateTime, FixedOffset};

mod base;
mod expr;

#[derive(Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The input matched neither an absolute format nor the relative
    /// grammar, or named a date that does not exist. Carries the
    /// offending input.
    InvalidInput(String),
}

impl Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidInput(input) => {
                write!(f, "invalid date expression: {input}")
            }
        }
    }
}

impl Error for FormatError {}

impl FormatError {
    fn invalid<S: AsRef<str>>(input: S) -> Self {
        FormatError::InvalidInput(input.as_ref().to_owned())
    }
}

/// Parses a date string and returns a `DateTime` for it.
///
/// Absolute formats are tried first (`YYYYMMDD`, `YYYY-M-D`, `M/D/YYYY`,
/// `YYYY-M-D HH:MM`), then the literal `today`, then the relative
/// grammar. Relative expressions and `today` resolve against the
/// run-scoped base date. Matching is case-insensitive and anchored: the
/// whole input must conform.
///
/// # Examples
///
/// ```
/// let dt = reldate::parse_date("2015-12-31").unwrap();
/// assert_eq!(dt.date_naive().to_string(), "2015-12-31");
/// ```
///
/// # Errors
///
/// Returns `Err(FormatError::InvalidInput)` when the input matches no
/// recognized format or names a date that does not exist.
pub fn parse_date<S: AsRef<str>>(input: S) -> Result<DateTime<FixedOffset>, FormatError> {
    let input = input.as_ref();
    let lowered = input.to_ascii_lowercase();
    let item = expr::parse(&lowered).ok_or_else(|| FormatError::invalid(input))?;
    expr::at_date(item, base::base_date).ok_or_else(|| FormatError::invalid(input))
}

/// Resolves a relative expression against an explicit base date, or the
/// run-scoped base date if `base` is `None`.
///
/// # Examples
///
/// ```
/// use chrono::{Days, NaiveDate};
///
/// let base = NaiveDate::from_ymd_opt(2015, 6, 15)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap()
///     .and_utc()
///     .fixed_offset();
/// let dt = reldate::parse_relative("+2d", Some(base)).unwrap();
/// assert_eq!(dt, base + Days::new(2));
/// ```
///
/// # Errors
///
/// Returns `Err(FormatError::InvalidInput)` when the input does not
/// match the relative grammar, or resolves to a date that does not
/// exist (e.g. `+0m31` against a 30-day month, or a daylight-saving
/// lookup in a zone without transitions).
pub fn parse_relative<S: AsRef<str>>(
    input: S,
    base: Option<DateTime<FixedOffset>>,
) -> Result<DateTime<FixedOffset>, FormatError> {
    let input = input.as_ref();
    let lowered = input.to_ascii_lowercase();
    let parsed = expr::parse_relative(&lowered).ok_or_else(|| FormatError::invalid(input))?;
    let base = base.unwrap_or_else(base::base_date);
    expr::resolve::resolve(&parsed, base).ok_or_else(|| FormatError::invalid(input))
}

/// Returns whether `input` matches the relative grammar. A pure check:
/// no resolution is attempted and no base date is touched.
///
/// # Examples
///
/// ```
/// assert!(reldate::is_relative_expression("-1ml"));
/// assert!(!reldate::is_relative_expression("2015-12-31"));
/// ```
pub fn is_relative_expression<S: AsRef<str>>(input: S) -> bool {
    expr::parse_relative(&input.as_ref().to_ascii_lowercase()).is_some()
}

/// Returns the run-scoped base date: the local date at first use,
/// truncated to midnight. Stable across calls until [`reset_base_date`].
pub fn today() -> DateTime<FixedOffset> {
    base::base_date()
}

/// Replaces the run-scoped base date with a freshly truncated "now".
pub fn reset_base_date() {
    base::reset();
}
