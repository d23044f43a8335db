//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Expr, Settings, and Error.
