//! Expression trees used for diagnostics.
//!
//! An [`Expr`] records the code that produced a value so that a mismatch can
//! point back at it. Expressions are only ever displayed, never evaluated.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::value::Value;

/// An expression node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A bare name like `x` or `+`.
    Symbol(Arc<str>),
    /// A call like `f(x, y)` or `x + y`.
    Call {
        /// The called expression, usually a symbol.
        head: Box<Expr>,
        /// Positional arguments.
        args: Vec<Expr>,
    },
    /// A constant embedded in the tree.
    Literal(Literal),
}

/// A constant inside an expression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// `NULL`
    Null,
    /// `TRUE` or `FALSE`
    Bool(bool),
    /// Integer constant like `1L`
    Int(i64),
    /// Double constant like `1.5`
    Num(f64),
    /// String constant like `"a"`
    Str(Arc<str>),
}

impl Expr {
    /// Creates a symbol.
    #[must_use]
    pub fn sym(name: impl Into<Arc<str>>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates a call with an arbitrary head.
    #[must_use]
    pub fn call(head: Expr, args: impl IntoIterator<Item = Expr>) -> Self {
        Self::Call {
            head: Box::new(head),
            args: args.into_iter().collect(),
        }
    }

    /// Creates a call whose head is the symbol `name`.
    #[must_use]
    pub fn apply(name: impl Into<Arc<str>>, args: impl IntoIterator<Item = Expr>) -> Self {
        Self::call(Self::sym(name), args)
    }

    /// Creates a binary operator call like `lhs + rhs`.
    #[must_use]
    pub fn binary(op: impl Into<Arc<str>>, lhs: Expr, rhs: Expr) -> Self {
        Self::apply(op, [lhs, rhs])
    }

    /// Creates a double constant.
    #[must_use]
    pub fn num(n: f64) -> Self {
        Self::Literal(Literal::Num(n))
    }

    /// Creates an integer constant.
    #[must_use]
    pub fn int(n: i64) -> Self {
        Self::Literal(Literal::Int(n))
    }

    /// Creates a string constant.
    #[must_use]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Self::Literal(Literal::Str(s.into()))
    }

    /// Returns the symbol name if this is a symbol.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the head symbol name if this is a call with a symbol head.
    #[must_use]
    pub fn head_symbol(&self) -> Option<&str> {
        match self {
            Self::Call { head, .. } => head.as_symbol(),
            _ => None,
        }
    }

    /// Returns the call arguments, or an empty slice for non-calls.
    #[must_use]
    pub fn args(&self) -> &[Expr] {
        match self {
            Self::Call { args, .. } => args,
            _ => &[],
        }
    }

    /// Returns true if this is a call.
    #[must_use]
    pub const fn is_call(&self) -> bool {
        matches!(self, Self::Call { .. })
    }
}

impl TryFrom<&Value> for Expr {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Symbol(name) => Ok(Self::Symbol(name.clone())),
            Value::Call(expr) => Ok(expr.clone()),
            other => Err(Error::not_an_expression(other.type_tag())),
        }
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Self::sym(name)
    }
}
