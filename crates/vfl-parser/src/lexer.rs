//! Token-level rules for visual format strings.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit1},
    combinator::{map, map_res, opt, recognize, value},
    sequence::{pair, preceded, tuple},
    IResult,
};

use vfl_core::{Axis, Relation};

/// Parse an identifier (starts with letter/underscore, followed by alphanumeric/underscore).
pub fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

/// Parse a number (integer or decimal, optionally negative).
pub fn number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        str::parse::<f64>,
    )(input)
}

/// Parse a relation operator.
pub fn relation(input: &str) -> IResult<&str, Relation> {
    alt((
        value(Relation::Equal, tag("==")),
        value(Relation::GreaterThanOrEqual, tag(">=")),
        value(Relation::LessThanOrEqual, tag("<=")),
    ))(input)
}

/// Parse a priority suffix: `@750`.
pub fn priority(input: &str) -> IResult<&str, u32> {
    preceded(char('@'), map_res(digit1, str::parse::<u32>))(input)
}

/// Parse the axis prefix letter.
pub fn axis(input: &str) -> IResult<&str, Axis> {
    alt((
        value(Axis::Horizontal, char('H')),
        value(Axis::Vertical, char('V')),
    ))(input)
}

/// Parse the container edge marker.
pub fn superview(input: &str) -> IResult<&str, ()> {
    map(char('|'), |_| ())(input)
}
