//! Type comparison and mismatch diagnostics for likeness.
//!
//! This crate provides:
//! - [`classify`] - Canonical type tags under each strictness mode
//! - [`compare`] - Target/current type comparison with deferred rendering
//! - [`diagnostic`] - Mismatch descriptors, messages, and structured parts

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classify;
pub mod compare;
pub mod diagnostic;

pub use classify::{
    Classification, canonicalize, class_or_mode, classify_pair, is_frame_like, is_integer_like,
    mode_name, typeof_name,
};
pub use compare::{TypeMatch, compare, type_alike};
pub use diagnostic::{DiagnosticParts, MismatchDescriptor};
