//! Rendering expressions for inclusion in diagnostics.
//!
//! Short expressions are quoted inline, `` `x + y` `` when every name is
//! syntactic and `{my var + y}` otherwise, so the quote marks are never
//! confused with quoting inside the expression. Anything longer is laid out
//! on its own lines.

use likeness_foundation::{Expr, Settings};

use crate::deparse::{ONE_LINE_CUTOFF, deparse, wrap_column};
use crate::syntax::has_syntactic_names;
use crate::text::{Padding, pad_lines};

/// Whether the names in an expression should be treated as syntactic.
///
/// Only affects expressions short enough to be quoted inline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyntacticMode {
    /// Treat all names as syntactic.
    ForceYes,
    /// Treat some name as non-syntactic.
    ForceNo,
    /// Inspect the expression.
    #[default]
    Auto,
}

/// Renders `expr` for a display `width`.
///
/// Single-line results carry one trailing space so they can be followed
/// directly by the rest of a sentence; multi-line results end with a newline
/// when they span more than one line.
#[tracing::instrument(level = "trace", skip(expr, settings))]
#[must_use]
pub fn render(expr: &Expr, width: usize, mode: SyntacticMode, settings: &Settings) -> String {
    let syntactic = match mode {
        SyntacticMode::ForceYes => true,
        SyntacticMode::ForceNo => false,
        SyntacticMode::Auto => has_syntactic_names(expr),
    };
    let wrap = wrap_column(width);
    let one_line = deparse(expr, ONE_LINE_CUTOFF);

    match one_line.as_slice() {
        [line] if settings.bounded_len(line) <= wrap => {
            let (open, close) = if syntactic { ("`", "` ") } else { ("{", "} ") };
            settings.bound(format!("{open}{line}{close}"))
        }
        _ => pad_lines(&deparse(expr, wrap), Padding::None, None, settings),
    }
}
