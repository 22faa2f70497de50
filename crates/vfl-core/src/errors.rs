//! Error types for the visual format builder.

use crate::types::Axis;
use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum VflError {
    #[error(transparent)]
    Builder(#[from] BuilderError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Invalid use of a fragment builder.
///
/// These are programming errors at the call site; nothing retries them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuilderError {
    #[error("A length relation needs at least one predicate")]
    EmptyPredicates,

    #[error("Nothing to wrap: at least a view or a length is required")]
    NothingToWrap,

    #[error("Priority {value} is outside 1..=1000")]
    PriorityOutOfRange { value: u32 },

    #[error("Length range {start}..{end} is empty")]
    EmptyRange { start: i64, end: i64 },
}

/// Errors while parsing a rendered visual format string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Empty visual format")]
    Empty,

    #[error("Unexpected input at offset {position}: expected {expected}, found {found:?}")]
    UnexpectedToken {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("Unparsed input at offset {position}: {rest:?}")]
    TrailingInput { position: usize, rest: String },
}

/// Errors while resolving a parsed format against its symbol tables.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("Undefined view: {name}")]
    UnknownView { name: String },

    #[error("Undefined metric: {name}")]
    UnknownMetric { name: String },

    #[error("Priority {value} is outside 1..=1000")]
    PriorityOutOfRange { value: u32 },

    #[error("Option {option} aligns along the {axis:?} axis")]
    AlignmentAlongAxis { option: String, axis: Axis },
}
