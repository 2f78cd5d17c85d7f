//! Plain decimal numbers as they appear in CSS values

use nom::branch::alt;
use nom::character::complete::{char, digit0, digit1, one_of};
use nom::combinator::{map_res, opt, recognize};
use nom::sequence::{pair, tuple};
use nom::IResult;

/// Parse `[+-]digits[.digits]` or `[+-].digits`.
///
/// Exponents are not accepted so a unit starting with `e` (`em`, `ex`)
/// is never mistaken for one.
pub(crate) fn number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
        ))),
        str::parse::<f64>,
    )(input)
}
