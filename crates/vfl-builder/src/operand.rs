//! Operands accepted by the combinators.

use vfl_core::{Fragment, IdAllocator, Metric};

/// Anything that can sit on either side of a combinator.
///
/// Every operand is turned into a [`Fragment`] by [`into_fragment`](Self::into_fragment)
/// before a combinator runs. Views and metrics allocate a symbol at that point;
/// literals never do.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<V> {
    /// An already built fragment, passed through unchanged
    Fragment(Fragment<V>),
    /// A view, wrapped as `[view_N]`
    View(V),
    /// A length, wrapped as `metric_N@P`
    Metric(Metric),
    /// Raw grammar text such as a gap number
    Literal(String),
}

impl<V> Operand<V> {
    /// A bare gap number, in whole points.
    pub fn gap(value: i32) -> Self {
        Operand::Literal(value.to_string())
    }

    /// Normalize into a fragment, allocating ids for views and metrics.
    pub fn into_fragment(self, ids: &IdAllocator) -> Fragment<V> {
        match self {
            Operand::Fragment(fragment) => fragment,
            Operand::View(view) => Fragment::view(ids, view),
            Operand::Metric(metric) => Fragment::metric(ids, metric),
            Operand::Literal(text) => Fragment::literal(text),
        }
    }
}

impl<V> From<Fragment<V>> for Operand<V> {
    fn from(fragment: Fragment<V>) -> Self {
        Operand::Fragment(fragment)
    }
}

impl<V> From<Metric> for Operand<V> {
    fn from(metric: Metric) -> Self {
        Operand::Metric(metric)
    }
}

impl<V> From<i32> for Operand<V> {
    fn from(gap: i32) -> Self {
        Operand::gap(gap)
    }
}
