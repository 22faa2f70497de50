//! Builders for visual format fragments.
//!
//! This crate implements:
//! - Operand normalization (views, metrics, gap literals, fragments)
//! - Grammar combinators (adjacency, superview anchors, relational gaps)
//! - A left-to-right [`Chain`] over the combinators
//! - Per-view length relations, including multi-predicate lists
//!
//! # Example
//!
//! ```
//! use vfl_builder::{Chain, Operand};
//! use vfl_core::IdAllocator;
//!
//! let ids = IdAllocator::new();
//! let fragment = Chain::leading(&ids, Operand::View("title"))
//!     .gap(8)
//!     .view("subtitle")
//!     .trailing();
//!
//! assert_eq!(fragment.text(), "|-[view_0]-8-[view_1]-|");
//! ```

mod chain;
mod combinators;
mod operand;
mod relations;

pub use chain::Chain;
pub use combinators::{adjacent, at_least_gap, at_most_gap, leading_anchor, link, trailing_anchor, Link};
pub use operand::Operand;
pub use relations::{length, LengthBuilder};
