//! Identifier predicates, deparsing, and diagnostic text layout for likeness.
//!
//! This crate provides:
//! - [`syntax`] - Syntactic-name and operator predicates over expressions
//! - [`text`] - Middle truncation and transcript-style line padding
//! - [`deparse`] - Width-constrained source text for expressions
//! - [`render`] - Quoted or padded expressions ready for a diagnostic

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod deparse;
pub mod render;
pub mod syntax;
pub mod text;

pub use deparse::{deparse_one_line, deparse_width, wrap_column};
pub use render::{SyntacticMode, render};
pub use syntax::{
    has_syntactic_names, innermost_is_operator, is_operator_call, is_syntactic_name,
    needs_no_escape,
};
pub use text::{Padding, pad_lines, pad_optional_lines, truncate_middle};
