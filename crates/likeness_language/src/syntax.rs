//! Identifier and operator predicates over expression trees.
//!
//! [`is_syntactic_name`] is the single place that knows the surface
//! identifier grammar; everything else here is structural recursion over
//! [`Expr`].

use likeness_foundation::Expr;

/// Words that look like identifiers but cannot be used as bare names.
pub const RESERVED_WORDS: [&str; 18] = [
    "if",
    "else",
    "repeat",
    "while",
    "function",
    "for",
    "in",
    "next",
    "break",
    "TRUE",
    "FALSE",
    "NULL",
    "Inf",
    "NaN",
    "NA",
    "NA_integer_",
    "NA_real_",
    "NA_character_",
];

/// Call heads that are always treated as operators.
pub const OPERATORS: [&str; 20] = [
    "+", "-", "*", "/", "^", "|", "||", "&", "&&", "~", ":", "$", "[", "[[", "!", "==", "<", "<=",
    ">", ">=",
];

/// Delimiter that marks user-defined infix operators such as `%in%`.
pub const OPERATOR_DELIMITER: char = '%';

/// Returns true if `name` can appear as a bare identifier without quoting.
///
/// A syntactic name starts with an ASCII letter or `_`, continues with ASCII
/// alphanumerics or `_`, and is not a reserved word.
#[must_use]
pub fn is_syntactic_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RESERVED_WORDS.contains(&name)
}

/// Returns true if `name` is a fixed operator or a delimited infix operator.
#[must_use]
pub fn is_operator_name(name: &str) -> bool {
    OPERATORS.contains(&name)
        || (name.chars().count() >= 2
            && name.starts_with(OPERATOR_DELIMITER)
            && name.ends_with(OPERATOR_DELIMITER))
}

/// Returns true if `expr` is a call whose head symbol is an operator.
#[must_use]
pub fn is_operator_call(expr: &Expr) -> bool {
    expr.head_symbol().is_some_and(is_operator_name)
}

/// Returns true if `expr` is a call whose head may stay unquoted even though
/// it is not a syntactic name: operators and the `(` and `{` grouping forms.
#[must_use]
pub fn needs_no_escape(expr: &Expr) -> bool {
    matches!(expr.head_symbol(), Some("(" | "{")) || is_operator_call(expr)
}

/// Returns true if every name used in `expr` is syntactic.
///
/// Call heads covered by [`needs_no_escape`] are exempt. Literals are not
/// inspected.
#[must_use]
pub fn has_syntactic_names(expr: &Expr) -> bool {
    match expr {
        Expr::Symbol(name) => is_syntactic_name(name),
        Expr::Call { head, args } => {
            (needs_no_escape(expr) || has_syntactic_names(head))
                && args.iter().all(has_syntactic_names)
        }
        Expr::Literal(_) => true,
    }
}

/// Follows first arguments while they are calls and reports whether the
/// innermost call reached is an operator call.
///
/// Used to decide whether a value substituted at that position needs
/// parentheses.
#[must_use]
pub fn innermost_is_operator(expr: &Expr) -> bool {
    let mut current = expr;
    while let Some(next @ Expr::Call { .. }) = current.args().first() {
        current = next;
    }
    is_operator_call(current)
}
