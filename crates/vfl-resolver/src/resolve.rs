//! Binding a parsed format to its views and metrics.

use indexmap::IndexMap;

use vfl_core::{
    Connection, FormatOptions, PredicateObject, PredicateSpec, Priority, ResolveError,
    VisualFormat,
};

use crate::constraint::{Anchor, Attribute, AxisAttributes, Item, LayoutConstraint};

/// Spacing used where a format says `-` without a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolveOptions {
    /// Between two neighbouring views
    pub standard_spacing: f64,
    /// Between a view and the container edge
    pub superview_spacing: f64,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            standard_spacing: 8.0,
            superview_spacing: 20.0,
        }
    }
}

impl ResolveOptions {
    pub fn with_standard_spacing(mut self, spacing: f64) -> Self {
        self.standard_spacing = spacing;
        self
    }

    pub fn with_superview_spacing(mut self, spacing: f64) -> Self {
        self.superview_spacing = spacing;
        self
    }
}

/// Turn a parsed format into constraint descriptions.
///
/// Constraints come out in textual order: each view's incoming connection,
/// then its length predicates, then the trailing connection, then any
/// alignment requested by `options`.
pub fn resolve<V: Clone>(
    format: &VisualFormat,
    options: FormatOptions,
    metrics: &IndexMap<String, f64>,
    views: &IndexMap<String, V>,
    config: &ResolveOptions,
) -> Result<Vec<LayoutConstraint<V>>, ResolveError> {
    let resolver = Resolver {
        attributes: AxisAttributes::for_axis(format.axis, options),
        metrics,
        views,
        config,
    };

    let items = format
        .views
        .iter()
        .map(|spec| resolver.item(&spec.name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut constraints = Vec::new();
    for (index, (spec, item)) in format.views.iter().zip(&items).enumerate() {
        if index == 0 {
            if let Some(leading) = &format.leading {
                resolver.leading_edge(leading, item, &mut constraints)?;
            }
        } else if let Some(connection) = format.connections.get(index - 1) {
            resolver.spacing(connection, &items[index - 1], item, &mut constraints)?;
        }
        for predicate in &spec.predicates {
            constraints.push(resolver.length(item, predicate)?);
        }
    }

    if let (Some(trailing), Some(last)) = (&format.trailing, items.last()) {
        resolver.trailing_edge(trailing, last, &mut constraints)?;
    }

    for (name, flag) in options.iter_names() {
        let Some(attribute) = Attribute::from_alignment(flag) else {
            continue;
        };
        if attribute.axis() == format.axis {
            return Err(ResolveError::AlignmentAlongAxis {
                option: name.to_string(),
                axis: format.axis,
            });
        }
        for pair in items.windows(2) {
            constraints.push(LayoutConstraint {
                first: Anchor::new(pair[1].clone(), attribute),
                relation: Default::default(),
                second: Some(Anchor::new(pair[0].clone(), attribute)),
                constant: 0.0,
                priority: Priority::REQUIRED,
            });
        }
    }

    tracing::debug!(
        axis = format.axis.prefix(),
        views = items.len(),
        constraints = constraints.len(),
        "resolved visual format"
    );
    Ok(constraints)
}

struct Resolver<'a, V> {
    attributes: AxisAttributes,
    metrics: &'a IndexMap<String, f64>,
    views: &'a IndexMap<String, V>,
    config: &'a ResolveOptions,
}

impl<'a, V: Clone> Resolver<'a, V> {
    fn item(&self, name: &str) -> Result<Item<V>, ResolveError> {
        let view = self
            .views
            .get(name)
            .ok_or_else(|| ResolveError::UnknownView {
                name: name.to_string(),
            })?;
        Ok(Item::View {
            name: name.to_string(),
            view: view.clone(),
        })
    }

    fn metric(&self, object: &PredicateObject) -> Result<f64, ResolveError> {
        match object {
            PredicateObject::Constant(value) => Ok(*value),
            PredicateObject::Named(name) => {
                self.metrics
                    .get(name)
                    .copied()
                    .ok_or_else(|| ResolveError::UnknownMetric { name: name.clone() })
            }
        }
    }

    /// `[view(pred)]`: a constant length, a metric, or another view's length.
    fn length(
        &self,
        item: &Item<V>,
        predicate: &PredicateSpec,
    ) -> Result<LayoutConstraint<V>, ResolveError> {
        let length = self.attributes.length;
        let priority = priority(predicate.priority)?;
        let first = Anchor::new(item.clone(), length);

        if let PredicateObject::Named(name) = &predicate.object {
            if !self.metrics.contains_key(name) && self.views.contains_key(name) {
                return Ok(LayoutConstraint {
                    first,
                    relation: predicate.relation,
                    second: Some(Anchor::new(self.item(name)?, length)),
                    constant: 0.0,
                    priority,
                });
            }
        }

        Ok(LayoutConstraint {
            first,
            relation: predicate.relation,
            second: None,
            constant: self.metric(&predicate.object)?,
            priority,
        })
    }

    /// `[a]-gap-[b]`: `b.start REL a.end + gap`
    fn spacing(
        &self,
        connection: &Connection,
        before: &Item<V>,
        after: &Item<V>,
        out: &mut Vec<LayoutConstraint<V>>,
    ) -> Result<(), ResolveError> {
        let first = Anchor::new(after.clone(), self.attributes.start);
        let second = Anchor::new(before.clone(), self.attributes.end);
        self.gap(connection, self.config.standard_spacing, first, second, out)
    }

    /// `|-gap-[a]`: `a.start REL superview.start + gap`
    fn leading_edge(
        &self,
        connection: &Connection,
        item: &Item<V>,
        out: &mut Vec<LayoutConstraint<V>>,
    ) -> Result<(), ResolveError> {
        let first = Anchor::new(item.clone(), self.attributes.start);
        let second = Anchor::superview(self.attributes.start);
        self.gap(connection, self.config.superview_spacing, first, second, out)
    }

    /// `[a]-gap-|`: `superview.end REL a.end + gap`
    fn trailing_edge(
        &self,
        connection: &Connection,
        item: &Item<V>,
        out: &mut Vec<LayoutConstraint<V>>,
    ) -> Result<(), ResolveError> {
        let first = Anchor::superview(self.attributes.end);
        let second = Anchor::new(item.clone(), self.attributes.end);
        self.gap(connection, self.config.superview_spacing, first, second, out)
    }

    fn gap(
        &self,
        connection: &Connection,
        standard: f64,
        first: Anchor<V>,
        second: Anchor<V>,
        out: &mut Vec<LayoutConstraint<V>>,
    ) -> Result<(), ResolveError> {
        let fixed = |constant| LayoutConstraint {
            first: first.clone(),
            relation: Default::default(),
            second: Some(second.clone()),
            constant,
            priority: Priority::REQUIRED,
        };

        match connection {
            Connection::Flush => out.push(fixed(0.0)),
            Connection::Standard => out.push(fixed(standard)),
            Connection::Predicates(predicates) => {
                for predicate in predicates {
                    out.push(LayoutConstraint {
                        first: first.clone(),
                        relation: predicate.relation,
                        second: Some(second.clone()),
                        constant: self.metric(&predicate.object)?,
                        priority: priority(predicate.priority)?,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Unwritten priorities are required.
fn priority(value: Option<u32>) -> Result<Priority, ResolveError> {
    let Some(value) = value else {
        return Ok(Priority::REQUIRED);
    };
    u16::try_from(value)
        .ok()
        .and_then(|narrow| Priority::new(narrow).ok())
        .ok_or(ResolveError::PriorityOutOfRange { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vfl_core::{Axis, Relation};
    use vfl_parser::parse_format;

    fn tables(
        views: &[&str],
        metrics: &[(&str, f64)],
    ) -> (IndexMap<String, &'static str>, IndexMap<String, f64>) {
        let views = views
            .iter()
            .map(|name| (name.to_string(), "handle"))
            .collect();
        let metrics = metrics
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();
        (views, metrics)
    }

    fn render(
        text: &str,
        options: FormatOptions,
        views: &[&str],
        metrics: &[(&str, f64)],
    ) -> Result<String, ResolveError> {
        let format = parse_format(text).unwrap();
        let (views, metrics) = tables(views, metrics);
        let constraints = resolve(
            &format,
            options,
            &metrics,
            &views,
            &ResolveOptions::default(),
        )?;
        Ok(constraints
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    #[test]
    fn test_superview_to_superview() {
        let resolved = render(
            "H:|-[view_0]-8-[view_1]-|",
            FormatOptions::empty(),
            &["view_0", "view_1"],
            &[],
        )
        .unwrap();
        insta::assert_snapshot!(resolved, @r###"
        view_0.leading == superview.leading + 20
        view_1.leading == view_0.trailing + 8
        superview.trailing == view_1.trailing + 20
        "###);
    }

    #[test]
    fn test_length_predicates() {
        let resolved = render(
            "V:[view_0(>=metric_0@1000,<=metric_1@250)]",
            FormatOptions::empty(),
            &["view_0"],
            &[("metric_0", 10.0), ("metric_1", 100.0)],
        )
        .unwrap();
        insta::assert_snapshot!(resolved, @r###"
        view_0.height >= 10
        view_0.height <= 100 @250
        "###);
    }

    #[test]
    fn test_relative_length() {
        let resolved = render(
            "H:[view_0(==viewR_1@1000)]",
            FormatOptions::empty(),
            &["view_0", "viewR_1"],
            &[],
        )
        .unwrap();
        assert_eq!(resolved, "view_0.width == viewR_1.width");
    }

    #[test]
    fn test_flush_metric_and_relational_gaps() {
        let resolved = render(
            "H:|[view_0]->=metric_1@500-[view_2][view_3]|",
            FormatOptions::DIRECTION_LEFT_TO_RIGHT,
            &["view_0", "view_2", "view_3"],
            &[("metric_1", 12.0)],
        )
        .unwrap();
        insta::assert_snapshot!(resolved, @r###"
        view_0.left == superview.left
        view_2.left >= view_0.right + 12 @500
        view_3.left == view_2.right
        superview.right == view_3.right
        "###);
    }

    #[test]
    fn test_alignment_options() {
        let resolved = render(
            "H:[view_0]-[view_1]-[view_2]",
            FormatOptions::ALIGN_ALL_CENTER_Y,
            &["view_0", "view_1", "view_2"],
            &[],
        )
        .unwrap();
        insta::assert_snapshot!(resolved, @r###"
        view_1.leading == view_0.trailing + 8
        view_2.leading == view_1.trailing + 8
        view_1.centerY == view_0.centerY
        view_2.centerY == view_1.centerY
        "###);
    }

    #[test]
    fn test_alignment_along_axis_is_rejected() {
        let result = render(
            "V:[view_0]-[view_1]",
            FormatOptions::ALIGN_ALL_TOP,
            &["view_0", "view_1"],
            &[],
        );
        assert_eq!(
            result,
            Err(ResolveError::AlignmentAlongAxis {
                option: "ALIGN_ALL_TOP".to_string(),
                axis: Axis::Vertical,
            })
        );
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(
            render("H:[view_0]-[view_9]", FormatOptions::empty(), &["view_0"], &[]),
            Err(ResolveError::UnknownView {
                name: "view_9".to_string()
            })
        );
        assert_eq!(
            render("H:[view_0(==metric_4)]", FormatOptions::empty(), &["view_0"], &[]),
            Err(ResolveError::UnknownMetric {
                name: "metric_4".to_string()
            })
        );
    }

    #[test]
    fn test_priority_out_of_range() {
        assert_eq!(
            render("H:[view_0(==10@1001)]", FormatOptions::empty(), &["view_0"], &[]),
            Err(ResolveError::PriorityOutOfRange { value: 1001 })
        );
        assert_eq!(
            render("H:[view_0(==10@0)]", FormatOptions::empty(), &["view_0"], &[]),
            Err(ResolveError::PriorityOutOfRange { value: 0 })
        );
    }

    #[test]
    fn test_custom_spacing() {
        let format = parse_format("V:|-[view_0]-[view_1]").unwrap();
        let (views, metrics) = tables(&["view_0", "view_1"], &[]);
        let config = ResolveOptions::default()
            .with_standard_spacing(4.0)
            .with_superview_spacing(16.0);
        let constraints =
            resolve(&format, FormatOptions::empty(), &metrics, &views, &config).unwrap();
        assert_eq!(constraints.len(), 2);
        assert_eq!(constraints[0].constant, 16.0);
        assert_eq!(constraints[1].constant, 4.0);
        assert_eq!(constraints[1].relation, Relation::Equal);
        assert_eq!(constraints[1].first.attribute, Attribute::Top);
    }
}
