//! Attaching views and handing fragments to the engine.

use vfl_core::{Axis, Fragment};

use crate::engine::LayoutEngine;
use crate::hierarchy::ViewHierarchy;

/// Installation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallOptions {
    /// Turn off frame-derived constraints on every referenced view
    pub detach_autoresizing: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            detach_autoresizing: true,
        }
    }
}

impl InstallOptions {
    pub fn with_detach_autoresizing(mut self, detach: bool) -> Self {
        self.detach_autoresizing = detach;
        self
    }
}

/// Install `fragment` on `container` along `axis`.
///
/// Every referenced view other than the container itself becomes a subview of
/// the container unless it already is one. Returns the number of constraints
/// the engine produced. Engine errors are returned as they are.
pub fn install<V, H, E>(
    hierarchy: &mut H,
    engine: &mut E,
    container: &V,
    fragment: &Fragment<V>,
    axis: Axis,
    options: &InstallOptions,
) -> Result<usize, E::Error>
where
    V: PartialEq,
    H: ViewHierarchy<V>,
    E: LayoutEngine<V>,
{
    for view in fragment.views().values() {
        if options.detach_autoresizing {
            hierarchy.set_translates_autoresizing(view, false);
        }
        if view != container && !hierarchy.contains(container, view) {
            hierarchy.add_child(container, view);
        }
    }

    let format = fragment.render(axis);
    let constraints = engine.constraints_with_format(
        &format,
        fragment.options(),
        fragment.metrics(),
        fragment.views(),
    )?;
    let count = constraints.len();

    tracing::debug!(
        format = %format,
        views = fragment.views().len(),
        constraints = count,
        "installing visual format"
    );
    engine.add_constraints(container, constraints);
    Ok(count)
}

/// Installs fragments into one hierarchy through one engine.
///
/// ```
/// use vfl_builder::{Chain, Operand};
/// use vfl_core::IdAllocator;
/// use vfl_install::{FormatEngine, Installer, ViewTree};
///
/// let mut tree = ViewTree::new();
/// let root = tree.add_root("root");
/// let label = tree.add_view("label");
///
/// let ids = IdAllocator::new();
/// let row = Chain::leading(&ids, Operand::View(label)).trailing();
///
/// let mut engine = FormatEngine::new();
/// let installed = Installer::new(&mut tree, &mut engine)
///     .add(&root, &row)
///     .horizontal()
///     .unwrap();
///
/// assert_eq!(installed, 2);
/// assert_eq!(tree.parent(label), Some(root));
/// ```
#[derive(Debug)]
pub struct Installer<'a, H, E> {
    hierarchy: &'a mut H,
    engine: &'a mut E,
    options: InstallOptions,
}

impl<'a, H, E> Installer<'a, H, E> {
    pub fn new(hierarchy: &'a mut H, engine: &'a mut E) -> Self {
        Self {
            hierarchy,
            engine,
            options: InstallOptions::default(),
        }
    }

    pub fn with_options(mut self, options: InstallOptions) -> Self {
        self.options = options;
        self
    }

    /// Install along a known axis.
    pub fn install<V>(
        &mut self,
        container: &V,
        fragment: &Fragment<V>,
        axis: Axis,
    ) -> Result<usize, E::Error>
    where
        V: PartialEq,
        H: ViewHierarchy<V>,
        E: LayoutEngine<V>,
    {
        install(
            &mut *self.hierarchy,
            &mut *self.engine,
            container,
            fragment,
            axis,
            &self.options,
        )
    }

    /// Queue `fragment` for `container`; the axis is chosen on the returned value.
    pub fn add<'i, V>(
        &'i mut self,
        container: &'i V,
        fragment: &'i Fragment<V>,
    ) -> PendingInstall<'i, V, H, E> {
        PendingInstall {
            hierarchy: &mut *self.hierarchy,
            engine: &mut *self.engine,
            options: self.options,
            container,
            fragment,
        }
    }
}

/// A fragment waiting for its axis.
#[must_use = "nothing is installed until an axis is chosen"]
#[derive(Debug)]
pub struct PendingInstall<'i, V, H, E> {
    hierarchy: &'i mut H,
    engine: &'i mut E,
    options: InstallOptions,
    container: &'i V,
    fragment: &'i Fragment<V>,
}

impl<'i, V, H, E> PendingInstall<'i, V, H, E>
where
    V: PartialEq,
    H: ViewHierarchy<V>,
    E: LayoutEngine<V>,
{
    /// `H:`
    pub fn horizontal(self) -> Result<usize, E::Error> {
        self.along(Axis::Horizontal)
    }

    /// `V:`
    pub fn vertical(self) -> Result<usize, E::Error> {
        self.along(Axis::Vertical)
    }

    pub fn along(self, axis: Axis) -> Result<usize, E::Error> {
        install(
            self.hierarchy,
            self.engine,
            self.container,
            self.fragment,
            axis,
            &self.options,
        )
    }
}
