//! Parser for visual format strings.
//!
//! Turns text such as `H:|-[view_0]-8-[view_1(>=metric_2@1000)]-|` into a
//! [`VisualFormat`](vfl_core::VisualFormat). Names are left unresolved; the
//! resolver binds them to views and metrics.
//!
//! # Example
//!
//! ```
//! use vfl_parser::parse_format;
//!
//! let format = parse_format("V:|-[view_0]-[view_1]").unwrap();
//! assert_eq!(format.views.len(), 2);
//! assert!(format.trailing.is_none());
//! ```

mod grammar;
mod lexer;

pub use grammar::parse_format;
