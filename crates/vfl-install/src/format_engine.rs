//! A layout engine backed by the workspace parser and resolver.

use indexmap::IndexMap;

use vfl_core::{FormatOptions, VflError};
use vfl_parser::parse_format;
use vfl_resolver::{resolve, LayoutConstraint, ResolveOptions};

use crate::engine::LayoutEngine;

/// Parses and resolves formats, then keeps the constraints installed on each
/// container. Nothing is solved.
#[derive(Debug, Clone)]
pub struct FormatEngine<V> {
    config: ResolveOptions,
    formats: Vec<String>,
    installed: Vec<(V, LayoutConstraint<V>)>,
}

impl<V> Default for FormatEngine<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FormatEngine<V> {
    pub fn new() -> Self {
        Self::with_config(ResolveOptions::default())
    }

    pub fn with_config(config: ResolveOptions) -> Self {
        Self {
            config,
            formats: Vec::new(),
            installed: Vec::new(),
        }
    }

    /// Every format string parsed so far, in order.
    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    /// Total number of installed constraints.
    pub fn len(&self) -> usize {
        self.installed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
    }
}

impl<V: PartialEq> FormatEngine<V> {
    /// Constraints installed on `container`, in install order.
    pub fn constraints_on<'a>(
        &'a self,
        container: &'a V,
    ) -> impl Iterator<Item = &'a LayoutConstraint<V>> + 'a {
        self.installed
            .iter()
            .filter(move |(owner, _)| owner == container)
            .map(|(_, constraint)| constraint)
    }
}

impl<V: Clone + PartialEq> LayoutEngine<V> for FormatEngine<V> {
    type Constraint = LayoutConstraint<V>;
    type Error = VflError;

    fn constraints_with_format(
        &mut self,
        format: &str,
        options: FormatOptions,
        metrics: &IndexMap<String, f64>,
        views: &IndexMap<String, V>,
    ) -> Result<Vec<LayoutConstraint<V>>, VflError> {
        let parsed = parse_format(format)?;
        let constraints = resolve(&parsed, options, metrics, views, &self.config)?;
        self.formats.push(format.to_string());
        Ok(constraints)
    }

    fn add_constraints(&mut self, container: &V, constraints: Vec<LayoutConstraint<V>>) {
        tracing::trace!(count = constraints.len(), "adding constraints");
        self.installed
            .extend(constraints.into_iter().map(|c| (container.clone(), c)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vfl_core::{ParseError, ResolveError};

    fn tables(names: &[&str]) -> IndexMap<String, u8> {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.to_string(), index as u8))
            .collect()
    }

    #[test]
    fn test_parse_and_resolve() {
        let mut engine = FormatEngine::new();
        let mut metrics = IndexMap::new();
        metrics.insert("metric_1".to_string(), 4.0);

        let constraints = engine
            .constraints_with_format(
                "H:|-[view_0]-metric_1@1000-[view_2]",
                FormatOptions::empty(),
                &metrics,
                &tables(&["view_0", "view_2"]),
            )
            .unwrap();

        assert_eq!(constraints.len(), 2);
        assert_eq!(constraints[1].constant, 4.0);
        assert_eq!(engine.formats(), ["H:|-[view_0]-metric_1@1000-[view_2]"]);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_constraints_are_kept_per_container() {
        let mut engine = FormatEngine::new();
        let views = tables(&["view_0"]);
        let metrics = IndexMap::new();

        let first = engine
            .constraints_with_format("H:|[view_0]|", FormatOptions::empty(), &metrics, &views)
            .unwrap();
        engine.add_constraints(&10, first);
        let second = engine
            .constraints_with_format("V:[view_0(44)]", FormatOptions::empty(), &metrics, &views)
            .unwrap();
        engine.add_constraints(&20, second);

        assert_eq!(engine.len(), 3);
        assert_eq!(engine.constraints_on(&10).count(), 2);
        assert_eq!(engine.constraints_on(&20).count(), 1);
    }

    #[test]
    fn test_errors() {
        let mut engine = FormatEngine::<u8>::new();
        let metrics = IndexMap::new();

        let parse = engine.constraints_with_format("H:", FormatOptions::empty(), &metrics, &tables(&[]));
        assert!(matches!(
            parse,
            Err(VflError::Parse(ParseError::UnexpectedToken { .. }))
        ));

        let resolve = engine.constraints_with_format(
            "H:[view_0]",
            FormatOptions::empty(),
            &metrics,
            &tables(&[]),
        );
        assert!(matches!(
            resolve,
            Err(VflError::Resolve(ResolveError::UnknownView { .. }))
        ));
        assert!(engine.formats().is_empty());
    }
}
