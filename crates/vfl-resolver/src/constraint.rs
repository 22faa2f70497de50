//! Resolved constraint descriptions.

use std::fmt;

use vfl_core::{Axis, FormatOptions, Priority, Relation};

/// A layout attribute of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Left,
    Right,
    Top,
    Bottom,
    Leading,
    Trailing,
    Width,
    Height,
    CenterX,
    CenterY,
    LastBaseline,
    FirstBaseline,
}

impl Attribute {
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Left => "left",
            Attribute::Right => "right",
            Attribute::Top => "top",
            Attribute::Bottom => "bottom",
            Attribute::Leading => "leading",
            Attribute::Trailing => "trailing",
            Attribute::Width => "width",
            Attribute::Height => "height",
            Attribute::CenterX => "centerX",
            Attribute::CenterY => "centerY",
            Attribute::LastBaseline => "lastBaseline",
            Attribute::FirstBaseline => "firstBaseline",
        }
    }

    /// The axis this attribute positions or sizes along.
    pub fn axis(self) -> Axis {
        match self {
            Attribute::Left
            | Attribute::Right
            | Attribute::Leading
            | Attribute::Trailing
            | Attribute::Width
            | Attribute::CenterX => Axis::Horizontal,
            Attribute::Top
            | Attribute::Bottom
            | Attribute::Height
            | Attribute::CenterY
            | Attribute::LastBaseline
            | Attribute::FirstBaseline => Axis::Vertical,
        }
    }

    /// The attribute an alignment flag pins, if it is one.
    pub fn from_alignment(flag: FormatOptions) -> Option<Self> {
        let attribute = if flag == FormatOptions::ALIGN_ALL_LEFT {
            Attribute::Left
        } else if flag == FormatOptions::ALIGN_ALL_RIGHT {
            Attribute::Right
        } else if flag == FormatOptions::ALIGN_ALL_TOP {
            Attribute::Top
        } else if flag == FormatOptions::ALIGN_ALL_BOTTOM {
            Attribute::Bottom
        } else if flag == FormatOptions::ALIGN_ALL_LEADING {
            Attribute::Leading
        } else if flag == FormatOptions::ALIGN_ALL_TRAILING {
            Attribute::Trailing
        } else if flag == FormatOptions::ALIGN_ALL_CENTER_X {
            Attribute::CenterX
        } else if flag == FormatOptions::ALIGN_ALL_CENTER_Y {
            Attribute::CenterY
        } else if flag == FormatOptions::ALIGN_ALL_LAST_BASELINE {
            Attribute::LastBaseline
        } else if flag == FormatOptions::ALIGN_ALL_FIRST_BASELINE {
            Attribute::FirstBaseline
        } else {
            return None;
        };
        Some(attribute)
    }
}

/// Which attributes a format line uses for its start edge, end edge and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisAttributes {
    pub start: Attribute,
    pub end: Attribute,
    pub length: Attribute,
}

impl AxisAttributes {
    /// Horizontal lines follow the layout direction unless a direction flag overrides it.
    pub fn for_axis(axis: Axis, options: FormatOptions) -> Self {
        match axis {
            Axis::Vertical => Self {
                start: Attribute::Top,
                end: Attribute::Bottom,
                length: Attribute::Height,
            },
            Axis::Horizontal if options.contains(FormatOptions::DIRECTION_RIGHT_TO_LEFT) => Self {
                start: Attribute::Right,
                end: Attribute::Left,
                length: Attribute::Width,
            },
            Axis::Horizontal if options.contains(FormatOptions::DIRECTION_LEFT_TO_RIGHT) => Self {
                start: Attribute::Left,
                end: Attribute::Right,
                length: Attribute::Width,
            },
            Axis::Horizontal => Self {
                start: Attribute::Leading,
                end: Attribute::Trailing,
                length: Attribute::Width,
            },
        }
    }
}

/// The constrained object: a named view or the container.
#[derive(Debug, Clone, PartialEq)]
pub enum Item<V> {
    View { name: String, view: V },
    Superview,
}

/// An attribute of an item.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor<V> {
    pub item: Item<V>,
    pub attribute: Attribute,
}

impl<V> Anchor<V> {
    pub fn new(item: Item<V>, attribute: Attribute) -> Self {
        Self { item, attribute }
    }

    pub fn superview(attribute: Attribute) -> Self {
        Self::new(Item::Superview, attribute)
    }
}

/// `first <relation> second + constant`, or `first <relation> constant` when
/// there is no second anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConstraint<V> {
    pub first: Anchor<V>,
    pub relation: Relation,
    pub second: Option<Anchor<V>>,
    pub constant: f64,
    pub priority: Priority,
}

impl<V> fmt::Display for Anchor<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.item {
            Item::View { name, .. } => write!(f, "{name}.{}", self.attribute.name()),
            Item::Superview => write!(f, "superview.{}", self.attribute.name()),
        }
    }
}

impl<V> fmt::Display for LayoutConstraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.first, self.relation)?;
        match &self.second {
            Some(second) if self.constant == 0.0 => write!(f, "{second}")?,
            Some(second) if self.constant < 0.0 => write!(f, "{second} - {}", -self.constant)?,
            Some(second) => write!(f, "{second} + {}", self.constant)?,
            None => write!(f, "{}", self.constant)?,
        }
        if !self.priority.is_required() {
            write!(f, " @{}", self.priority)?;
        }
        Ok(())
    }
}
