//! Integration tests for syntax predicates
//!
//! Tests name syntax, operator detection, and escape decisions.

use likeness_foundation::Expr;
use likeness_language::syntax::{OPERATORS, RESERVED_WORDS, is_operator_name};
use likeness_language::{
    has_syntactic_names, innermost_is_operator, is_operator_call, is_syntactic_name,
};
use proptest::prelude::*;

fn pair(op: &str) -> Expr {
    Expr::apply(op, [Expr::sym("a"), Expr::sym("b")])
}

// =============================================================================
// Names
// =============================================================================

#[test]
fn reserved_words_are_not_syntactic() {
    for word in RESERVED_WORDS {
        assert!(!is_syntactic_name(word), "{word} is reserved");
    }
}

#[test]
fn operators_are_not_syntactic_names() {
    for op in OPERATORS {
        assert!(!is_syntactic_name(op), "{op} is not a name");
    }
}

#[test]
fn every_fixed_operator_is_an_operator_call() {
    for op in OPERATORS {
        assert!(is_operator_name(op));
        assert!(is_operator_call(&pair(op)));
    }
}

#[test]
fn symbols_are_not_calls() {
    assert!(!is_operator_call(&Expr::sym("+")));
    assert!(!is_operator_call(&Expr::int(1)));
}

// =============================================================================
// Escaping
// =============================================================================

#[test]
fn operator_heads_are_exempt() {
    let expr = Expr::binary("%in%", Expr::sym("x"), Expr::sym("y"));
    assert!(has_syntactic_names(&expr));
}

#[test]
fn backquoted_names_anywhere_disable_syntax() {
    let deep = Expr::apply(
        "f",
        [Expr::apply("g", [Expr::binary("+", Expr::sym("x"), Expr::sym("if"))])],
    );
    assert!(!has_syntactic_names(&deep));
}

#[test]
fn innermost_through_subsets() {
    // x$a[[1]]: the innermost call is `x$a`
    let expr = Expr::apply(
        "[[",
        [Expr::binary("$", Expr::sym("x"), Expr::sym("a")), Expr::int(1)],
    );
    assert!(innermost_is_operator(&expr));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn delimited_symbols_are_operators(body in "[a-z.<>]{0,8}") {
        let op = format!("%{body}%");
        prop_assert!(is_operator_call(&pair(&op)));
    }

    #[test]
    fn identifiers_are_not_operators(name in "[a-zA-Z_][a-zA-Z0-9_]{0,8}") {
        prop_assert!(!is_operator_call(&pair(&name)));
    }

    #[test]
    fn half_delimited_symbols_are_not_operators(body in "[a-z]{1,8}") {
        let leading = format!("%{body}");
        let trailing = format!("{body}%");
        prop_assert!(!is_operator_call(&pair(&leading)));
        prop_assert!(!is_operator_call(&pair(&trailing)));
    }
}
