//! Core values, expressions, type tags, and settings for likeness.
//!
//! This crate provides:
//! - [`Value`] - Runtime data whose types are compared
//! - [`Expr`] - Expression trees recorded for diagnostics
//! - [`TypeTag`] and [`StrictnessMode`] - The type lattice vocabulary
//! - [`Settings`] - Immutable configuration, resolved through an [`OptionProvider`]
//! - [`Error`] - Errors for malformed caller input

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod expr;
pub mod settings;
pub mod types;
pub mod value;

pub use error::{Error, ErrorKind};
pub use expr::{Expr, Literal};
pub use settings::{OptionProvider, Settings, SettingsBuilder};
pub use types::{StrictnessMode, TypeTag};
pub use value::{Closure, Value};

/// Result type for likeness operations.
pub type Result<T> = std::result::Result<T, Error>;
