//! The builder value: format text plus the symbol tables it references.

use indexmap::IndexMap;

use crate::errors::BuilderError;
use crate::ids::IdAllocator;
use crate::types::{Axis, FormatOptions, Metric, Priority, Symbol};

/// A piece of a visual format expression.
///
/// Holds the accumulated grammar text, the views and metrics its symbols stand
/// for, and the format options handed to the layout engine. Fragments are
/// values: combining two fragments consumes them and returns a new one.
///
/// Every `view_N`, `viewR_N` and `metric_N` token in [`text`](Self::text) has
/// exactly one table entry, and every table entry appears in the text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragment<V> {
    text: String,
    views: IndexMap<String, V>,
    metrics: IndexMap<String, f64>,
    options: FormatOptions,
}

impl<V> Default for Fragment<V> {
    fn default() -> Self {
        Self {
            text: String::new(),
            views: IndexMap::new(),
            metrics: IndexMap::new(),
            options: FormatOptions::empty(),
        }
    }
}

impl<V> Fragment<V> {
    /// Wrap a single view: `[view_N]`.
    pub fn view(ids: &IdAllocator, view: V) -> Self {
        let symbol = Symbol::View(ids.allocate());
        let mut views = IndexMap::with_capacity(1);
        views.insert(symbol.to_string(), view);
        Self {
            text: format!("[{symbol}]"),
            views,
            ..Self::default()
        }
    }

    /// Wrap a metric: `metric_N@P`.
    pub fn metric(ids: &IdAllocator, metric: Metric) -> Self {
        let symbol = Symbol::Metric(ids.allocate());
        let mut metrics = IndexMap::with_capacity(1);
        metrics.insert(symbol.to_string(), metric.value);
        Self {
            text: format!("{symbol}@{}", metric.priority),
            metrics,
            ..Self::default()
        }
    }

    /// Wrap a length with the required priority: `metric_N@1000`.
    pub fn scalar(ids: &IdAllocator, value: f64) -> Self {
        Self::metric(ids, Metric::new(value))
    }

    /// Raw grammar text with empty tables.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// A bare gap number. Consumes no symbol id.
    ///
    /// Bare gaps are whole points. Fractional or computed gaps go through a
    /// metric symbol instead, which the grammar binds to any `f64`.
    pub fn gap(value: i32) -> Self {
        Self::literal(value.to_string())
    }

    /// Wrap a view, a length, or a view constrained to a length.
    ///
    /// - view and length: `[view_N(==metric_N@P)]`, one id shared by both
    /// - view only: `[view_N]`
    /// - length only: `metric_N@P`
    pub fn element(
        ids: &IdAllocator,
        view: Option<V>,
        length: Option<f64>,
        priority: Priority,
    ) -> Result<Self, BuilderError> {
        match (view, length) {
            (Some(view), Some(length)) => {
                let id = ids.allocate();
                let view_symbol = Symbol::View(id);
                let metric_symbol = Symbol::Metric(id);
                let mut views = IndexMap::with_capacity(1);
                views.insert(view_symbol.to_string(), view);
                let mut metrics = IndexMap::with_capacity(1);
                metrics.insert(metric_symbol.to_string(), length);
                Ok(Self::from_parts(
                    format!("[{view_symbol}(=={metric_symbol}@{priority})]"),
                    views,
                    metrics,
                ))
            }
            (Some(view), None) => Ok(Self::view(ids, view)),
            (None, Some(length)) => Ok(Self::metric(
                ids,
                Metric::new(length).with_priority(priority),
            )),
            (None, None) => Err(BuilderError::NothingToWrap),
        }
    }

    /// Assemble a fragment from already-consistent parts.
    ///
    /// The caller guarantees every symbol in `text` has a table entry and the
    /// other way round.
    pub fn from_parts(
        text: String,
        views: IndexMap<String, V>,
        metrics: IndexMap<String, f64>,
    ) -> Self {
        Self {
            text,
            views,
            metrics,
            options: FormatOptions::empty(),
        }
    }

    /// Concatenate `self`, `glyph` and `other`, merging tables and options.
    ///
    /// On a key collision the right-hand entry wins. Collisions cannot happen
    /// between fragments drawn from one allocator.
    pub fn join(mut self, glyph: &str, other: Fragment<V>) -> Self {
        debug_assert!(
            other.views.keys().all(|k| !self.views.contains_key(k)),
            "duplicate view symbol while merging fragments"
        );
        debug_assert!(
            other.metrics.keys().all(|k| !self.metrics.contains_key(k)),
            "duplicate metric symbol while merging fragments"
        );

        self.text.reserve(glyph.len() + other.text.len());
        self.text.push_str(glyph);
        self.text.push_str(&other.text);
        self.views.extend(other.views);
        self.metrics.extend(other.metrics);
        self.options |= other.options;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn views(&self) -> &IndexMap<String, V> {
        &self.views
    }

    pub fn metrics(&self) -> &IndexMap<String, f64> {
        &self.metrics
    }

    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// Replace the format options.
    pub fn set_options(&mut self, options: FormatOptions) {
        self.options = options;
    }

    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// The full format string for `axis`, e.g. `H:|-[view_0]-|`.
    pub fn render(&self, axis: Axis) -> String {
        axis.render(&self.text)
    }

    /// All symbol names, views first, each in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.views
            .keys()
            .chain(self.metrics.keys())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
