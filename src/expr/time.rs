// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Parse an explicit time-of-day suffix.
//!
//! An expression may end in a `HH:MM` token separated from the rest by
//! whitespace, e.g. `+1d 17:00`. The hour may be one or two digits, the
//! minute must be exactly two.

use winnow::{seq, stream::AsChar, token::take_while, ModalResult, Parser};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub(crate) struct Time {
    pub(crate) hour: u32,
    pub(crate) minute: u32,
}

pub(crate) fn parse(input: &mut &str) -> ModalResult<Time> {
    seq!(Time {
        hour: hour,
        _: ':',
        minute: minute,
    })
    .parse_next(input)
}

fn hour(input: &mut &str) -> ModalResult<u32> {
    take_while(1..=2, AsChar::is_dec_digit)
        .verify_map(|s: &str| {
            let h: u32 = s.parse().ok()?;
            (h < 24).then_some(h)
        })
        .parse_next(input)
}

fn minute(input: &mut &str) -> ModalResult<u32> {
    take_while(2..=2, AsChar::is_dec_digit)
        .verify_map(|s: &str| {
            let m: u32 = s.parse().ok()?;
            (m < 60).then_some(m)
        })
        .parse_next(input)
}
