// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Parse a three-letter weekday token.
//!
//! The token resolves to the weekday's numeric value, counting 1=Sunday
//! through 7=Saturday. Input is lowercased at the API boundary, so the
//! names match case-insensitively.

use winnow::{ascii::alpha1, ModalResult, Parser};

pub(crate) fn parse(input: &mut &str) -> ModalResult<u32> {
    alpha1
        .verify_map(|s: &str| {
            Some(match s {
                "sun" => 1,
                "mon" => 2,
                "tue" => 3,
                "wed" => 4,
                "thu" => 5,
                "fri" => 6,
                "sat" => 7,
                _ => return None,
            })
        })
        .parse_next(input)
}
