//! Core value types for visual format fragments.

use std::fmt;

use bitflags::bitflags;

use crate::errors::BuilderError;

/// Weight of a relation, from 1 (weakest) to 1000 (required).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
pub struct Priority(u16);

impl Priority {
    pub const REQUIRED: Self = Self(1000);
    pub const HIGH: Self = Self(750);
    pub const LOW: Self = Self(250);
    pub const FITTING_SIZE: Self = Self(50);

    /// Create a priority, rejecting values outside `1..=1000`.
    pub fn new(value: u16) -> Result<Self, BuilderError> {
        if (1..=1000).contains(&value) {
            Ok(Self(value))
        } else {
            Err(BuilderError::PriorityOutOfRange {
                value: u32::from(value),
            })
        }
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn is_required(self) -> bool {
        self == Self::REQUIRED
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::REQUIRED
    }
}

impl TryFrom<u16> for Priority {
    type Error = BuilderError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Priority> for u16 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Relation between a length and its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    #[default]
    Equal,
    GreaterThanOrEqual,
    LessThanOrEqual,
}

impl Relation {
    /// The relation as written inside a predicate.
    pub fn glyph(self) -> &'static str {
        match self {
            Relation::Equal => "==",
            Relation::GreaterThanOrEqual => ">=",
            Relation::LessThanOrEqual => "<=",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Layout direction a fragment is installed along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn prefix(self) -> &'static str {
        match self {
            Axis::Horizontal => "H",
            Axis::Vertical => "V",
        }
    }

    /// Prefix fragment text with this axis: `H:...` or `V:...`.
    pub fn render(self, text: &str) -> String {
        format!("{}:{}", self.prefix(), text)
    }
}

bitflags! {
    /// Alignment and direction flags handed to the layout engine untouched.
    ///
    /// Bit positions follow the platform's format option values.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FormatOptions: u32 {
        const ALIGN_ALL_LEFT = 1 << 1;
        const ALIGN_ALL_RIGHT = 1 << 2;
        const ALIGN_ALL_TOP = 1 << 3;
        const ALIGN_ALL_BOTTOM = 1 << 4;
        const ALIGN_ALL_LEADING = 1 << 5;
        const ALIGN_ALL_TRAILING = 1 << 6;
        const ALIGN_ALL_CENTER_X = 1 << 9;
        const ALIGN_ALL_CENTER_Y = 1 << 10;
        const ALIGN_ALL_LAST_BASELINE = 1 << 11;
        const ALIGN_ALL_FIRST_BASELINE = 1 << 12;

        const DIRECTION_LEFT_TO_RIGHT = 1 << 16;
        const DIRECTION_RIGHT_TO_LEFT = 2 << 16;
    }
}

/// Synthetic name substituted into fragment text in place of a view or a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// `view_N`
    View(u32),
    /// `viewR_N`, the reference side of a view-relative length
    RelativeView(u32),
    /// `metric_N`
    Metric(u32),
}

impl Symbol {
    pub fn id(self) -> u32 {
        match self {
            Symbol::View(id) | Symbol::RelativeView(id) | Symbol::Metric(id) => id,
        }
    }

    pub fn is_view(self) -> bool {
        !matches!(self, Symbol::Metric(_))
    }

    /// Parse a symbol name such as `view_3` or `metric_12`.
    pub fn parse(name: &str) -> Option<Self> {
        fn id(digits: &str) -> Option<u32> {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            digits.parse().ok()
        }

        if let Some(rest) = name.strip_prefix("viewR_") {
            id(rest).map(Symbol::RelativeView)
        } else if let Some(rest) = name.strip_prefix("view_") {
            id(rest).map(Symbol::View)
        } else {
            name.strip_prefix("metric_").and_then(id).map(Symbol::Metric)
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::View(id) => write!(f, "view_{id}"),
            Symbol::RelativeView(id) => write!(f, "viewR_{id}"),
            Symbol::Metric(id) => write!(f, "metric_{id}"),
        }
    }
}

/// A length that will be bound to a metric symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metric {
    pub value: f64,
    pub priority: Priority,
}

impl Metric {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            priority: Priority::REQUIRED,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// One clause of a view's length predicate list, e.g. `>=70`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Predicate {
    pub relation: Relation,
    pub length: f64,
    pub priority: Priority,
}

impl Predicate {
    pub fn new(relation: Relation, length: f64) -> Self {
        Self {
            relation,
            length,
            priority: Priority::REQUIRED,
        }
    }

    pub fn equal(length: f64) -> Self {
        Self::new(Relation::Equal, length)
    }

    pub fn at_least(length: f64) -> Self {
        Self::new(Relation::GreaterThanOrEqual, length)
    }

    pub fn at_most(length: f64) -> Self {
        Self::new(Relation::LessThanOrEqual, length)
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
