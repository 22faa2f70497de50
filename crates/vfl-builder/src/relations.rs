//! Length relations for a single view.
//!
//! A relation renders as `[view_N(<predicates>)]`. The view shares its id with
//! the first metric, so a one-predicate relation costs one id and an
//! n-predicate list costs n consecutive ids:
//!
//! ```text
//! [view_4(==metric_4@1000)]
//! [view_0(>=metric_0@1000,<=metric_1@1000)]
//! [view_2(==viewR_3@1000)]
//! ```

use std::ops::Range;

use indexmap::IndexMap;
use vfl_core::{BuilderError, Fragment, IdAllocator, Predicate, Priority, Relation, Symbol};

/// Start a length relation for `view`.
pub fn length<V>(ids: &IdAllocator, view: V) -> LengthBuilder<'_, V> {
    LengthBuilder { ids, view }
}

/// Builds a fragment constraining one view's length along the install axis.
#[derive(Debug)]
pub struct LengthBuilder<'a, V> {
    ids: &'a IdAllocator,
    view: V,
}

impl<'a, V> LengthBuilder<'a, V> {
    /// `[view(==to)]`
    pub fn equal(self, to: f64) -> Fragment<V> {
        self.single(Predicate::equal(to))
    }

    pub fn equal_with_priority(self, to: f64, priority: Priority) -> Fragment<V> {
        self.single(Predicate::equal(to).with_priority(priority))
    }

    /// `[view(>=to)]`
    pub fn at_least(self, to: f64) -> Fragment<V> {
        self.single(Predicate::at_least(to))
    }

    pub fn at_least_with_priority(self, to: f64, priority: Priority) -> Fragment<V> {
        self.single(Predicate::at_least(to).with_priority(priority))
    }

    /// `[view(<=to)]`
    pub fn at_most(self, to: f64) -> Fragment<V> {
        self.single(Predicate::at_most(to))
    }

    pub fn at_most_with_priority(self, to: f64, priority: Priority) -> Fragment<V> {
        self.single(Predicate::at_most(to).with_priority(priority))
    }

    /// `[view(>=min,<=max)]`
    pub fn between(self, min: f64, max: f64) -> Fragment<V> {
        self.render(&[Predicate::at_least(min), Predicate::at_most(max)])
    }

    pub fn between_with_priorities(
        self,
        min: f64,
        min_priority: Priority,
        max: f64,
        max_priority: Priority,
    ) -> Fragment<V> {
        self.render(&[
            Predicate::at_least(min).with_priority(min_priority),
            Predicate::at_most(max).with_priority(max_priority),
        ])
    }

    /// `start..end` as `[view(>=start,<=end-1)]`.
    pub fn range(self, range: Range<i64>) -> Result<Fragment<V>, BuilderError> {
        if range.is_empty() {
            return Err(BuilderError::EmptyRange {
                start: range.start,
                end: range.end,
            });
        }
        Ok(self.between(range.start as f64, (range.end - 1) as f64))
    }

    /// An arbitrary predicate list, rendered in the order given.
    pub fn predicates(self, predicates: &[Predicate]) -> Result<Fragment<V>, BuilderError> {
        if predicates.is_empty() {
            return Err(BuilderError::EmptyPredicates);
        }
        Ok(self.render(predicates))
    }

    /// `[view(==other)]`
    pub fn equal_to_view(self, other: V) -> Fragment<V> {
        self.relative_to(Relation::Equal, other, Priority::REQUIRED)
    }

    /// `[view(>=other)]`
    pub fn at_least_view(self, other: V) -> Fragment<V> {
        self.relative_to(Relation::GreaterThanOrEqual, other, Priority::REQUIRED)
    }

    /// `[view(<=other)]`
    pub fn at_most_view(self, other: V) -> Fragment<V> {
        self.relative_to(Relation::LessThanOrEqual, other, Priority::REQUIRED)
    }

    /// Relate this view's length to another view's length.
    ///
    /// The other view is bound to a `viewR_` symbol so it never shadows a
    /// `view_` symbol, even when both refer to the same view.
    pub fn relative_to(self, relation: Relation, other: V, priority: Priority) -> Fragment<V> {
        let subject = Symbol::View(self.ids.allocate());
        let reference = Symbol::RelativeView(self.ids.allocate());

        let mut views = IndexMap::with_capacity(2);
        views.insert(subject.to_string(), self.view);
        views.insert(reference.to_string(), other);

        Fragment::from_parts(
            format!("[{subject}({relation}{reference}@{priority})]"),
            views,
            IndexMap::new(),
        )
    }

    fn single(self, predicate: Predicate) -> Fragment<V> {
        self.render(&[predicate])
    }

    /// Render a non-empty predicate list.
    fn render(self, predicates: &[Predicate]) -> Fragment<V> {
        debug_assert!(!predicates.is_empty());
        let first = self.ids.allocate_block(predicates.len() as u32);
        let subject = Symbol::View(first);

        let mut metrics = IndexMap::with_capacity(predicates.len());
        let clauses: Vec<String> = predicates
            .iter()
            .zip(first..)
            .map(|(predicate, id)| {
                let symbol = Symbol::Metric(id);
                metrics.insert(symbol.to_string(), predicate.length);
                format!("{}{}@{}", predicate.relation, symbol, predicate.priority)
            })
            .collect();

        let mut views = IndexMap::with_capacity(1);
        views.insert(subject.to_string(), self.view);

        Fragment::from_parts(
            format!("[{subject}({})]", clauses.join(",")),
            views,
            metrics,
        )
    }
}
