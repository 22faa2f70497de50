//! Grammar rules for visual format strings.
//!
//! ```text
//! format     := (axis ":")? ("|" connection)? view (connection view)* (connection "|")?
//! view       := "[" identifier ("(" predicate ("," predicate)* ")")? "]"
//! connection := "-" predicates "-" | "-" | ""
//! predicate  := relation? (number | identifier) ("@" integer)?
//! ```

use nom::{
    branch::alt,
    character::complete::{char, multispace0},
    combinator::{map, opt, success},
    multi::separated_list1,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};
use smallvec::SmallVec;

use vfl_core::{
    Axis, Connection, ParseError, PredicateObject, PredicateSpec, VisualFormat, ViewSpec,
};

use crate::lexer::*;

/// Parse a complete visual format string.
pub fn parse_format(input: &str) -> Result<VisualFormat, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let parser = Parser { source: input };

    let (rest, axis) = opt(terminated(axis, char(':')))(input).map_err(|_| parser.eof())?;
    let axis = axis.unwrap_or(Axis::Horizontal);

    let (rest, leading) =
        opt(preceded(superview, connection))(rest).map_err(|_| parser.eof())?;

    let (mut rest, first) = view(rest).map_err(|_| parser.unexpected(rest, "a view"))?;

    let mut views = vec![first];
    let mut connections = Vec::new();
    while let Ok((next, (link, spec))) = pair(connection, view)(rest) {
        connections.push(link);
        views.push(spec);
        rest = next;
    }

    let (rest, trailing) =
        opt(terminated(connection, superview))(rest).map_err(|_| parser.eof())?;

    if !rest.is_empty() {
        return Err(ParseError::TrailingInput {
            position: parser.offset(rest),
            rest: rest.to_string(),
        });
    }

    let format = VisualFormat {
        axis,
        leading,
        views,
        connections,
        trailing,
    };
    tracing::trace!(input, views = format.views.len(), "parsed visual format");
    Ok(format)
}

/// Tracks the source for error offsets.
struct Parser<'a> {
    source: &'a str,
}

impl<'a> Parser<'a> {
    fn offset(&self, rest: &str) -> usize {
        self.source.len() - rest.len()
    }

    fn unexpected(&self, rest: &str, expected: &str) -> ParseError {
        ParseError::UnexpectedToken {
            position: self.offset(rest),
            expected: expected.to_string(),
            found: rest.chars().take(16).collect(),
        }
    }

    fn eof(&self) -> ParseError {
        self.unexpected("", "more input")
    }
}

/// `[name]` or `[name(predicates)]`
fn view(input: &str) -> IResult<&str, ViewSpec> {
    map(
        delimited(
            char('['),
            pair(identifier, opt(parenthesized_predicates)),
            char(']'),
        ),
        |(name, predicates)| ViewSpec {
            name: name.to_string(),
            predicates: predicates.unwrap_or_default(),
        },
    )(input)
}

/// How two items are spaced. Never fails: no dash means flush.
fn connection(input: &str) -> IResult<&str, Connection> {
    alt((
        map(
            delimited(char('-'), predicate_list, char('-')),
            Connection::Predicates,
        ),
        map(char('-'), |_| Connection::Standard),
        map(success(()), |_| Connection::Flush),
    ))(input)
}

/// A single bare predicate (`8`, `>=metric_0@1000`) or a parenthesized list.
fn predicate_list(input: &str) -> IResult<&str, SmallVec<[PredicateSpec; 2]>> {
    alt((
        parenthesized_predicates,
        map(predicate, |single| {
            let mut list = SmallVec::new();
            list.push(single);
            list
        }),
    ))(input)
}

fn parenthesized_predicates(input: &str) -> IResult<&str, SmallVec<[PredicateSpec; 2]>> {
    map(
        delimited(
            char('('),
            separated_list1(delimited(multispace0, char(','), multispace0), predicate),
            char(')'),
        ),
        SmallVec::from_vec,
    )(input)
}

fn predicate(input: &str) -> IResult<&str, PredicateSpec> {
    map(
        tuple((opt(relation), predicate_object, opt(priority))),
        |(relation, object, priority)| PredicateSpec {
            relation: relation.unwrap_or_default(),
            object,
            priority,
        },
    )(input)
}

fn predicate_object(input: &str) -> IResult<&str, PredicateObject> {
    alt((
        map(number, PredicateObject::Constant),
        map(identifier, |name| PredicateObject::Named(name.to_string())),
    ))(input)
}
