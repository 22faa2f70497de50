//! Core types, fragments, and utilities for the visual format builder.
//!
//! This crate provides the foundational types used across all other vfl crates:
//! - Symbol allocation for views and metrics
//! - The [`Fragment`] builder value
//! - Value types (priorities, relations, axes, format options)
//! - AST types for parsed visual format strings
//! - Error types

pub mod ast;
pub mod errors;
pub mod fragment;
pub mod ids;
pub mod types;

pub use ast::*;
pub use errors::*;
pub use fragment::*;
pub use ids::*;
pub use types::*;
