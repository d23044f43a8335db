//! Integration tests for the deparser
//!
//! Tests operator layout, literals, line breaking, and one-line summaries.

use likeness_foundation::{Expr, Literal, Settings};
use likeness_language::deparse::{deparse, deparse_text};
use likeness_language::{deparse_one_line, deparse_width};

fn sym(name: &str) -> Expr {
    Expr::sym(name)
}

fn line(expr: &Expr) -> String {
    deparse(expr, 60).join("\n")
}

// =============================================================================
// Operators
// =============================================================================

#[test]
fn precedence_adds_parentheses() {
    let expr = Expr::binary("*", Expr::binary("+", sym("a"), sym("b")), sym("c"));
    assert_eq!(line(&expr), "(a + b) * c");
}

#[test]
fn left_associative_operators() {
    let left = Expr::binary("-", Expr::binary("-", sym("a"), sym("b")), sym("c"));
    assert_eq!(line(&left), "a - b - c");
    let right = Expr::binary("-", sym("a"), Expr::binary("-", sym("b"), sym("c")));
    assert_eq!(line(&right), "a - (b - c)");
}

#[test]
fn power_is_right_associative() {
    let expr = Expr::binary("^", sym("a"), Expr::binary("^", sym("b"), sym("c")));
    assert_eq!(line(&expr), "a^b^c");
}

#[test]
fn unary_operators() {
    assert_eq!(line(&Expr::apply("-", [sym("x")])), "-x");
    assert_eq!(
        line(&Expr::apply("-", [Expr::binary("+", sym("a"), sym("b"))])),
        "-(a + b)"
    );
    assert_eq!(line(&Expr::apply("!", [sym("ok")])), "!ok");
}

#[test]
fn unary_right_operands_need_no_parentheses() {
    let power = Expr::binary("^", sym("a"), Expr::apply("-", [sym("b")]));
    assert_eq!(line(&power), "a^-b");
    let sum = Expr::binary("+", sym("a"), Expr::apply("!", [sym("b")]));
    assert_eq!(line(&sum), "a + !b");
}

#[test]
fn subsetting() {
    assert_eq!(line(&Expr::apply("[", [sym("x"), Expr::num(1.0)])), "x[1]");
    assert_eq!(line(&Expr::apply("[[", [sym("x"), Expr::string("a")])), "x[[\"a\"]]");

    let sum = Expr::binary("+", sym("a"), sym("b"));
    assert_eq!(line(&Expr::apply("[", [sum, Expr::num(1.0)])), "(a + b)[1]");
}

#[test]
fn dollar_has_no_spaces() {
    assert_eq!(line(&Expr::binary("$", sym("df"), sym("col"))), "df$col");
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn literal_forms() {
    let call = Expr::apply(
        "c",
        [
            Expr::Literal(Literal::Null),
            Expr::Literal(Literal::Bool(false)),
            Expr::int(7),
            Expr::num(0.5),
            Expr::num(1e20),
            Expr::num(f64::NEG_INFINITY),
            Expr::string("say \"hi\""),
        ],
    );
    assert_eq!(
        line(&call),
        "c(NULL, FALSE, 7L, 0.5, 1e+20, -Inf, \"say \\\"hi\\\"\")"
    );
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn blocks_indent_statements() {
    let block = Expr::apply("{", [sym("x"), sym("y")]);
    assert_eq!(deparse(&block, 60), vec!["{", "    x", "    y", "}"]);
}

#[test]
fn deparse_text_joins_lines() {
    let settings = Settings::default();
    let block = Expr::apply("{", [sym("x")]);
    assert_eq!(deparse_text(&block, 60, &settings), "{\n    x\n}\n");
    assert_eq!(deparse_text(&sym("x"), 60, &settings), "x");
}

#[test]
fn width_controls_breaks() {
    let call = Expr::apply("f", (1..=8).map(|i| sym(&format!("argument_{i}"))));
    assert_eq!(deparse_width(&call, 80).len(), 2);
    assert_eq!(deparse_width(&call, 1000).len(), 2);
    assert!(deparse_width(&call, 30).len() > 2);
}

#[test]
fn one_line_summary_is_truncated() {
    let settings = Settings::default();
    let call = Expr::apply("f", (1..=8).map(|i| sym(&format!("argument_{i}"))));
    assert_eq!(
        deparse_one_line(&call, 20, 1, &settings),
        "f(argument_1, arg..)"
    );
    assert_eq!(deparse_one_line(&sym("x"), 20, 1, &settings), "x");
}
