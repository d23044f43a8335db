//! Likeness - Structural type comparison with readable diagnostics
//!
//! This crate re-exports all layers of the likeness system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: likeness_engine     - Classification, comparison, diagnostics
//! Layer 1: likeness_language   - Syntax predicates, deparsing, text layout
//! Layer 0: likeness_foundation - Core types (Value, Expr, Settings, Error)
//! ```

pub use likeness_engine as engine;
pub use likeness_foundation as foundation;
pub use likeness_language as language;
