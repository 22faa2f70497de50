//! Grammar combinators.
//!
//! The binary combinators take their left side as an already built
//! [`Fragment`]. Arguments are evaluated left to right, so the left side has
//! claimed its symbol ids before anything on the right is built, and ids
//! follow reading order even when the right side is itself a relation.

use vfl_core::{Fragment, IdAllocator};

use crate::operand::Operand;

/// The container edge in format text.
const SUPERVIEW: &str = "|";

/// Spacing between two neighbouring items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Link {
    /// `A-B`: the platform's standard spacing, or the gap written next to it
    #[default]
    Standard,
    /// `A->=B`
    AtLeast,
    /// `A-<=B`
    AtMost,
}

impl Link {
    pub fn glyph(self) -> &'static str {
        match self {
            Link::Standard => "-",
            Link::AtLeast => "->=",
            Link::AtMost => "-<=",
        }
    }
}

/// Join a built fragment and an operand with `link`.
pub fn link<V>(
    ids: &IdAllocator,
    lhs: Fragment<V>,
    link: Link,
    rhs: impl Into<Operand<V>>,
) -> Fragment<V> {
    lhs.join(link.glyph(), rhs.into().into_fragment(ids))
}

/// `A-B`
pub fn adjacent<V>(
    ids: &IdAllocator,
    lhs: Fragment<V>,
    rhs: impl Into<Operand<V>>,
) -> Fragment<V> {
    link(ids, lhs, Link::Standard, rhs)
}

/// `A->=B`
pub fn at_least_gap<V>(
    ids: &IdAllocator,
    lhs: Fragment<V>,
    rhs: impl Into<Operand<V>>,
) -> Fragment<V> {
    link(ids, lhs, Link::AtLeast, rhs)
}

/// `A-<=B`
pub fn at_most_gap<V>(
    ids: &IdAllocator,
    lhs: Fragment<V>,
    rhs: impl Into<Operand<V>>,
) -> Fragment<V> {
    link(ids, lhs, Link::AtMost, rhs)
}

/// `|-B`: anchor to the container's leading (or top) edge.
pub fn leading_anchor<V>(ids: &IdAllocator, rhs: impl Into<Operand<V>>) -> Fragment<V> {
    Fragment::literal(SUPERVIEW).join(Link::Standard.glyph(), rhs.into().into_fragment(ids))
}

/// `A-|`: anchor to the container's trailing (or bottom) edge.
pub fn trailing_anchor<V>(ids: &IdAllocator, lhs: impl Into<Operand<V>>) -> Fragment<V> {
    lhs.into()
        .into_fragment(ids)
        .join(Link::Standard.glyph(), Fragment::literal(SUPERVIEW))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relations::length;
    use vfl_core::{FormatOptions, Metric};

    #[test]
    fn test_leading_anchor_single_view() {
        let ids = IdAllocator::new();
        let fragment = leading_anchor(&ids, Operand::View("v"));
        assert_eq!(fragment.text(), "|-[view_0]");
        assert_eq!(fragment.views().len(), 1);
        assert_eq!(fragment.views()["view_0"], "v");
        assert!(fragment.metrics().is_empty());
    }

    #[test]
    fn test_leading_anchor_metric() {
        let ids = IdAllocator::new();
        let fragment = leading_anchor::<()>(&ids, Metric::new(5.5));
        assert_eq!(fragment.text(), "|-metric_0@1000");
        assert_eq!(fragment.metrics()["metric_0"], 5.5);
    }

    #[test]
    fn test_nested_combinators_fold_left() {
        let ids = IdAllocator::new();
        let first = leading_anchor(&ids, Operand::View('a'));
        let gapped = adjacent(&ids, first, 8);
        let second = adjacent(&ids, gapped, Operand::View('b'));
        let fragment = trailing_anchor(&ids, second);
        assert_eq!(fragment.text(), "|-[view_0]-8-[view_1]-|");
        assert_eq!(fragment.views()["view_0"], 'a');
        assert_eq!(fragment.views()["view_1"], 'b');
    }

    #[test]
    fn test_relational_gaps() {
        let ids = IdAllocator::new();
        let wide = at_least_gap(&ids, Fragment::view(&ids, 'a'), 8);
        let fragment = adjacent(&ids, wide, Operand::View('b'));
        assert_eq!(fragment.text(), "[view_0]->=8-[view_1]");

        let narrow = at_most_gap(&ids, Fragment::view(&ids, 'c'), 20);
        assert_eq!(narrow.text(), "[view_2]-<=20");
    }

    #[test]
    fn test_left_operand_allocates_first() {
        let ids = IdAllocator::new();
        let fragment = adjacent(&ids, Fragment::view(&ids, "left"), Operand::View("right"));
        assert_eq!(fragment.views()["view_0"], "left");
        assert_eq!(fragment.views()["view_1"], "right");
    }

    #[test]
    fn test_relation_on_the_right_numbers_after_the_left_view() {
        let ids = IdAllocator::new();
        let fragment = adjacent(
            &ids,
            Fragment::view(&ids, 'a'),
            length(&ids, 'b').equal(30.0),
        );
        assert_eq!(fragment.text(), "[view_0]-[view_1(==metric_1@1000)]");
        assert_eq!(fragment.views()["view_0"], 'a');
        assert_eq!(fragment.views()["view_1"], 'b');
        assert_eq!(fragment.metrics()["metric_1"], 30.0);

        let ids = IdAllocator::new();
        let fragment = at_least_gap(&ids, Fragment::view(&ids, 'a'), Fragment::view(&ids, 'b'));
        assert_eq!(fragment.text(), "[view_0]->=[view_1]");
        assert_eq!(fragment.views()["view_0"], 'a');
    }

    #[test]
    fn test_options_survive_combination() {
        let ids = IdAllocator::new();
        let left = Fragment::view(&ids, 0).with_options(FormatOptions::ALIGN_ALL_CENTER_Y);
        let right = Fragment::view(&ids, 1).with_options(FormatOptions::DIRECTION_LEFT_TO_RIGHT);
        let fragment = trailing_anchor(&ids, adjacent(&ids, left, right));
        assert!(fragment.options().contains(FormatOptions::ALIGN_ALL_CENTER_Y));
        assert!(fragment.options().contains(FormatOptions::DIRECTION_LEFT_TO_RIGHT));
    }
}
