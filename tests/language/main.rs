//! Integration tests for Layer 1: Language
//!
//! Tests for syntax predicates, text layout, deparsing, and rendering.

mod deparse;
mod syntax;
