//! Deparser: turns an [`Expr`] back into source text.
//!
//! Output is a list of lines. Lines are broken after argument separators and
//! after spaced binary operators once the current line is longer than the
//! cutoff; `{` blocks always span several lines.
//!
//! # Example
//!
//! ```
//! use likeness_foundation::Expr;
//! use likeness_language::deparse::deparse;
//!
//! let expr = Expr::apply("f", [Expr::binary("+", Expr::sym("x"), Expr::num(1.0))]);
//! assert_eq!(deparse(&expr, 60), vec!["f(x + 1)"]);
//! ```

use std::fmt::Write;

use likeness_foundation::settings::DEFAULT_WIDTH;
use likeness_foundation::{Expr, Literal, Settings};

use crate::syntax::{OPERATOR_DELIMITER, is_syntactic_name};
use crate::text::{Padding, pad_lines, truncate_middle};

/// Cutoff used when a single line is wanted.
pub const ONE_LINE_CUTOFF: usize = 500;

/// Precedence of unary `-` and `+`.
const UNARY_SIGN: u8 = 13;
/// Precedence of `$` and `@`; subset targets binding looser need parentheses.
const POSTFIX: u8 = 15;
/// Precedence of anything that is not an operator call.
const ATOM: u8 = u8::MAX;

/// Line-break column for a display width.
///
/// Widths outside `10..=1000` are treated as [`DEFAULT_WIDTH`]. Narrow
/// displays wrap two columns early, wide ones at 60, never below 20.
#[must_use]
pub fn wrap_column(width: usize) -> usize {
    let width = if (10..=1000).contains(&width) {
        width
    } else {
        DEFAULT_WIDTH
    };
    let cutoff = if width < 62 { width - 2 } else { 60 };
    cutoff.max(20)
}

/// Deparses `expr`, breaking lines once they exceed `cutoff` characters.
#[must_use]
pub fn deparse(expr: &Expr, cutoff: usize) -> Vec<String> {
    let mut deparser = Deparser::new(cutoff);
    match expr {
        // A bare top-level name is shown as-is.
        Expr::Symbol(name) => deparser.push(name),
        other => deparser.expr(other),
    }
    deparser.finish()
}

/// Deparses `expr` for a display `width`; see [`wrap_column`].
#[must_use]
pub fn deparse_width(expr: &Expr, width: usize) -> Vec<String> {
    deparse(expr, wrap_column(width))
}

/// First line of the one-line deparse of `expr`, shortened to `max_chars`
/// with [`truncate_middle`] if needed.
///
/// # Panics
///
/// Panics under the same size preconditions as [`truncate_middle`].
#[must_use]
pub fn deparse_one_line(
    expr: &Expr,
    max_chars: usize,
    keep_at_end: usize,
    settings: &Settings,
) -> String {
    let first = deparse(expr, ONE_LINE_CUTOFF)
        .into_iter()
        .next()
        .unwrap_or_default();
    truncate_middle(&settings.bound(first), max_chars, keep_at_end)
}

/// Deparses `expr` at `cutoff` and joins the lines without any prefix.
#[must_use]
pub fn deparse_text(expr: &Expr, cutoff: usize, settings: &Settings) -> String {
    pad_lines(&deparse(expr, cutoff), Padding::None, None, settings)
}

/// Binary operator layout.
#[derive(Clone, Copy)]
struct BinaryOp {
    precedence: u8,
    spaced: bool,
    right_assoc: bool,
}

fn binary_op(name: &str) -> Option<BinaryOp> {
    let (precedence, spaced, right_assoc) = match name {
        "=" => (1, true, true),
        "<-" | "<<-" => (2, true, true),
        "~" => (4, true, false),
        "|" | "||" => (5, true, false),
        "&" | "&&" => (6, true, false),
        "==" | "!=" | "<" | ">" | "<=" | ">=" => (8, true, false),
        "+" | "-" => (9, true, false),
        "*" | "/" => (10, true, false),
        ":" => (12, false, false),
        "^" => (14, false, true),
        "$" | "@" => (POSTFIX, false, false),
        other
            if other.chars().count() >= 2
                && other.starts_with(OPERATOR_DELIMITER)
                && other.ends_with(OPERATOR_DELIMITER) =>
        {
            (11, true, false)
        }
        _ => return None,
    };
    Some(BinaryOp {
        precedence,
        spaced,
        right_assoc,
    })
}

fn unary_precedence(name: &str) -> Option<u8> {
    match name {
        "-" | "+" => Some(UNARY_SIGN),
        "!" => Some(7),
        "~" => Some(4),
        _ => None,
    }
}

fn is_prefix_unary(expr: &Expr) -> bool {
    match (expr.head_symbol(), expr.args().len()) {
        (Some(op), 1) => unary_precedence(op).is_some(),
        _ => false,
    }
}

/// How tightly `expr` binds when printed, for parenthesization.
fn precedence_of(expr: &Expr) -> u8 {
    match (expr.head_symbol(), expr.args().len()) {
        (Some(op), 2) => binary_op(op).map_or(ATOM, |b| b.precedence),
        (Some(op), 1) => unary_precedence(op).unwrap_or(ATOM),
        _ => ATOM,
    }
}

/// Deparser state.
struct Deparser {
    cutoff: usize,
    lines: Vec<String>,
    line: String,
    line_len: usize,
    indent_level: usize,
    start_of_line: bool,
}

impl Deparser {
    fn new(cutoff: usize) -> Self {
        Self {
            cutoff,
            lines: Vec::new(),
            line: String::new(),
            line_len: 0,
            indent_level: 0,
            start_of_line: true,
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.lines.push(self.line);
        self.lines
    }

    fn push(&mut self, text: &str) {
        if self.start_of_line {
            self.start_of_line = false;
            self.write_indent();
        }
        self.line.push_str(text);
        self.line_len += text.chars().count();
    }

    fn write_indent(&mut self) {
        for level in 1..=self.indent_level {
            let tab = if level <= 4 { "    " } else { "  " };
            self.line.push_str(tab);
            self.line_len += tab.len();
        }
    }

    fn new_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.line));
        self.line_len = 0;
        self.start_of_line = true;
    }

    /// Breaks the line if it has run past the cutoff. The first break in a
    /// run indents the continuation; the caller undoes it via `broke`.
    fn line_break(&mut self, broke: &mut bool) {
        if self.line_len > self.cutoff {
            if !*broke {
                *broke = true;
                self.indent_level += 1;
            }
            self.new_line();
        }
    }

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Symbol(name) => self.symbol(name),
            Expr::Literal(literal) => self.literal(literal),
            Expr::Call { head, args } => self.call(head, args),
        }
    }

    fn symbol(&mut self, name: &str) {
        if name.is_empty() || is_syntactic_name(name) {
            self.push(name);
        } else {
            self.push("`");
            self.push(name);
            self.push("`");
        }
    }

    fn operand(&mut self, expr: &Expr, parens: bool) {
        if parens {
            self.push("(");
            self.expr(expr);
            self.push(")");
        } else {
            self.expr(expr);
        }
    }

    fn call(&mut self, head: &Expr, args: &[Expr]) {
        if let Expr::Symbol(name) = head {
            match (&**name, args) {
                ("{", _) => return self.block(args),
                ("(", [inner]) => {
                    self.push("(");
                    self.expr(inner);
                    self.push(")");
                    return;
                }
                ("[" | "[[", [target, rest @ ..]) => {
                    return self.subset(name, target, rest);
                }
                (op, [lhs, rhs]) => {
                    if let Some(binary) = binary_op(op) {
                        return self.binary(op, binary, lhs, rhs);
                    }
                }
                (op, [operand]) => {
                    if let Some(precedence) = unary_precedence(op) {
                        self.push(op);
                        return self.operand(operand, precedence_of(operand) < precedence);
                    }
                }
                _ => {}
            }
        }
        match head {
            Expr::Symbol(name) => self.symbol(name),
            other => self.expr(other),
        }
        self.push("(");
        self.args(args);
        self.push(")");
    }

    fn args(&mut self, args: &[Expr]) {
        let mut broke = false;
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.push(", ");
                self.line_break(&mut broke);
            }
            self.expr(arg);
        }
        if broke {
            self.indent_level -= 1;
        }
    }

    fn binary(&mut self, op: &str, binary: BinaryOp, lhs: &Expr, rhs: &Expr) {
        let (lhs_prec, rhs_prec) = (precedence_of(lhs), precedence_of(rhs));
        let lhs_parens =
            lhs_prec < binary.precedence || (binary.right_assoc && lhs_prec == binary.precedence);
        // A prefix operator on the right already delimits its operand.
        let rhs_parens = !is_prefix_unary(rhs)
            && (rhs_prec < binary.precedence
                || (!binary.right_assoc && rhs_prec == binary.precedence));

        self.operand(lhs, lhs_parens);
        if binary.spaced {
            self.push(" ");
            self.push(op);
            self.push(" ");
            let mut broke = false;
            self.line_break(&mut broke);
            self.operand(rhs, rhs_parens);
            if broke {
                self.indent_level -= 1;
            }
        } else {
            self.push(op);
            self.operand(rhs, rhs_parens);
        }
    }

    fn subset(&mut self, op: &str, target: &Expr, rest: &[Expr]) {
        self.operand(target, precedence_of(target) < POSTFIX);
        self.push(op);
        self.args(rest);
        self.push(if op == "[" { "]" } else { "]]" });
    }

    fn block(&mut self, statements: &[Expr]) {
        self.push("{");
        self.indent_level += 1;
        for statement in statements {
            self.new_line();
            self.expr(statement);
        }
        self.indent_level -= 1;
        self.new_line();
        self.push("}");
    }

    fn literal(&mut self, literal: &Literal) {
        match literal {
            Literal::Null => self.push("NULL"),
            Literal::Bool(true) => self.push("TRUE"),
            Literal::Bool(false) => self.push("FALSE"),
            Literal::Int(n) => {
                let text = format!("{n}L");
                self.push(&text);
            }
            Literal::Num(n) => {
                let text = format_number(*n);
                self.push(&text);
            }
            Literal::Str(s) => {
                let text = quote_string(s);
                self.push(&text);
            }
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e15 || (magnitude != 0.0 && magnitude < 1e-4) {
        let text = format!("{n:e}");
        // Positive exponents carry an explicit sign.
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        n.to_string()
    }
}

fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
