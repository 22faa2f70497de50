//! Resolution of parsed visual formats.
//!
//! Binds the names in a [`VisualFormat`](vfl_core::VisualFormat) to the views
//! and metrics handed over with it and produces [`LayoutConstraint`]
//! descriptions. Nothing here solves the constraints; a layout engine consumes
//! the descriptions.

mod constraint;
mod resolve;

pub use constraint::{Anchor, Attribute, AxisAttributes, Item, LayoutConstraint};
pub use resolve::{resolve, ResolveOptions};
