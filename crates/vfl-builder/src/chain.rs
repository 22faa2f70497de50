//! Fluent, strictly left-to-right composition.

use vfl_core::{Fragment, IdAllocator, Metric};

use crate::combinators::{self, Link};
use crate::operand::Operand;

/// A visual format line under construction.
///
/// Each step normalizes its operand when it is called, so symbol ids are
/// assigned in the order the chain is written:
///
/// ```
/// use vfl_builder::{Chain, Operand};
/// use vfl_core::IdAllocator;
///
/// let ids = IdAllocator::new();
/// let row = Chain::new(&ids, Operand::View("find"))
///     .view("find_next")
///     .then_at_least(20)
///     .view("field")
///     .finish();
///
/// assert_eq!(row.text(), "[view_0]-[view_1]->=20-[view_2]");
/// ```
#[derive(Debug)]
pub struct Chain<'a, V> {
    ids: &'a IdAllocator,
    fragment: Fragment<V>,
}

impl<'a, V> Chain<'a, V> {
    /// Start a chain at `first`.
    pub fn new(ids: &'a IdAllocator, first: impl Into<Operand<V>>) -> Self {
        Self {
            ids,
            fragment: first.into().into_fragment(ids),
        }
    }

    /// Start a chain anchored to the container's leading edge: `|-first`.
    pub fn leading(ids: &'a IdAllocator, first: impl Into<Operand<V>>) -> Self {
        Self {
            ids,
            fragment: combinators::leading_anchor(ids, first),
        }
    }

    /// Append `next` with standard spacing: `...-next`.
    pub fn then(self, next: impl Into<Operand<V>>) -> Self {
        self.link(Link::Standard, next)
    }

    /// Append `next` behind a `>=` gap: `...->=next`.
    pub fn then_at_least(self, next: impl Into<Operand<V>>) -> Self {
        self.link(Link::AtLeast, next)
    }

    /// Append `next` behind a `<=` gap: `...-<=next`.
    pub fn then_at_most(self, next: impl Into<Operand<V>>) -> Self {
        self.link(Link::AtMost, next)
    }

    /// Append a view.
    pub fn view(self, view: V) -> Self {
        self.then(Operand::View(view))
    }

    /// Append a bare gap number. No symbol is allocated.
    ///
    /// Use [`metric`](Self::metric) for a fractional gap.
    pub fn gap(self, gap: i32) -> Self {
        self.then(Operand::gap(gap))
    }

    /// Append a gap bound to a metric symbol.
    pub fn metric(self, metric: Metric) -> Self {
        self.then(Operand::Metric(metric))
    }

    /// Append with an explicit link.
    pub fn link(self, link: Link, next: impl Into<Operand<V>>) -> Self {
        let Self { ids, fragment } = self;
        Self {
            ids,
            fragment: combinators::link(ids, fragment, link, next),
        }
    }

    /// Anchor to the container's trailing edge and finish: `...-|`.
    pub fn trailing(self) -> Fragment<V> {
        let fragment = combinators::trailing_anchor(self.ids, self.fragment);
        tracing::trace!(text = %fragment.text(), "finished chain");
        fragment
    }

    /// Finish without a trailing anchor.
    pub fn finish(self) -> Fragment<V> {
        tracing::trace!(text = %self.fragment.text(), "finished chain");
        self.fragment
    }
}

impl<'a, V> From<Chain<'a, V>> for Operand<V> {
    fn from(chain: Chain<'a, V>) -> Self {
        Operand::Fragment(chain.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relations::length;
    use vfl_core::{Axis, FormatOptions, Priority};
    use vfl_parser::parse_format;

    #[test]
    fn test_superview_both_sides() {
        let ids = IdAllocator::new();
        let fragment = Chain::leading(&ids, Operand::View("v")).trailing();
        assert_eq!(fragment.text(), "|-[view_0]-|");
        assert!(fragment.metrics().is_empty());
    }

    #[test]
    fn test_custom_gaps_between_views() {
        let ids = IdAllocator::new();
        let fragment = Chain::leading(&ids, 1)
            .view("v1")
            .gap(1)
            .view("v2")
            .gap(2)
            .view("v3")
            .gap(3)
            .trailing();
        assert_eq!(fragment.text(), "|-1-[view_0]-1-[view_1]-2-[view_2]-3-|");
        assert!(fragment.metrics().is_empty());
        assert_eq!(
            fragment.views().values().copied().collect::<Vec<_>>(),
            ["v1", "v2", "v3"]
        );
    }

    #[test]
    fn test_gaps_parse_as_numbers() {
        let ids = IdAllocator::new();
        let fragment = Chain::new(&ids, Operand::View('a'))
            .gap(i32::MAX)
            .view('b')
            .gap(-4)
            .view('c')
            .metric(Metric::new(f64::INFINITY))
            .view('d')
            .finish();
        assert_eq!(
            fragment.text(),
            "[view_0]-2147483647-[view_1]--4-[view_2]-metric_3@1000-[view_4]"
        );

        let format = parse_format(&fragment.render(Axis::Horizontal)).unwrap();
        assert_eq!(
            format.referenced_names(),
            ["view_0", "view_1", "view_2", "metric_3", "view_4"]
        );
    }

    #[test]
    fn test_chain_with_length_relations() {
        let ids = IdAllocator::new();
        let green = length(&ids, "green").equal(30.0);
        let fragment = Chain::leading(&ids, green)
            .gap(10)
            .then(length(&ids, "red").equal(30.0))
            .finish();
        assert_eq!(
            fragment.text(),
            "|-[view_0(==metric_0@1000)]-10-[view_1(==metric_1@1000)]"
        );
        assert_eq!(fragment.metrics()["metric_0"], 30.0);
        assert_eq!(fragment.metrics()["metric_1"], 30.0);
    }

    #[test]
    fn test_metric_gap_allocates() {
        let ids = IdAllocator::new();
        let fragment = Chain::new(&ids, Operand::View('a'))
            .metric(Metric::new(12.0).with_priority(Priority::LOW))
            .view('b')
            .finish();
        assert_eq!(fragment.text(), "[view_0]-metric_1@250-[view_2]");
    }

    #[test]
    fn test_at_most_gap() {
        let ids = IdAllocator::new();
        let fragment = Chain::new(&ids, Operand::View('a'))
            .then_at_most(40)
            .view('b')
            .finish();
        assert_eq!(fragment.text(), "[view_0]-<=40-[view_1]");
    }

    #[test]
    fn test_nested_chain_as_operand() {
        let ids = IdAllocator::new();
        let inner = Chain::new(&ids, Operand::View('a')).view('b');
        let fragment = Chain::leading(&ids, inner).view('c').trailing();
        assert_eq!(fragment.text(), "|-[view_0]-[view_1]-[view_2]-|");
    }

    #[test]
    fn test_options_assigned_after_build() {
        let ids = IdAllocator::new();
        let mut fragment = Chain::leading(&ids, Operand::View('a')).view('b').trailing();
        fragment.set_options(FormatOptions::ALIGN_ALL_CENTER_Y);
        assert_eq!(fragment.options(), FormatOptions::ALIGN_ALL_CENTER_Y);
        assert_eq!(fragment.text(), "|-[view_0]-[view_1]-|");
    }
}
