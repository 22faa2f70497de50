use indexmap::IndexMap;
use vfl_core::FormatOptions;

/// A layout engine that understands visual format strings.
pub trait LayoutEngine<V> {
    type Constraint;
    type Error;

    /// Parse `format` against the symbol tables into constraints.
    fn constraints_with_format(
        &mut self,
        format: &str,
        options: FormatOptions,
        metrics: &IndexMap<String, f64>,
        views: &IndexMap<String, V>,
    ) -> Result<Vec<Self::Constraint>, Self::Error>;

    /// Activate `constraints` on `container`.
    fn add_constraints(&mut self, container: &V, constraints: Vec<Self::Constraint>);
}
