//! Installing finished fragments.
//!
//! The [`Installer`] attaches every view a fragment references to the
//! container, renders the fragment for an axis and hands it to a
//! [`LayoutEngine`]. The view hierarchy and the engine are both traits;
//! [`ViewTree`] and [`FormatEngine`] are in-process implementations built on
//! the workspace's own parser and resolver.

mod engine;
mod format_engine;
mod hierarchy;
mod install;
mod tree;

pub use engine::LayoutEngine;
pub use format_engine::FormatEngine;
pub use hierarchy::ViewHierarchy;
pub use install::{install, InstallOptions, Installer, PendingInstall};
pub use tree::{ViewId, ViewNode, ViewTree};
