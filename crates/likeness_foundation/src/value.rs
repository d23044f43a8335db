//! Runtime values that take part in type comparison.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::expr::Expr;
use crate::types::TypeTag;

/// A runtime datum.
///
/// Values are immutable and cheaply cloneable: vectors are shared slices and
/// lists use a persistent vector with structural sharing.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// The null value.
    Null,
    /// A bare name.
    Symbol(Arc<str>),
    /// User-defined function.
    Closure(Closure),
    /// Built-in function that evaluates its arguments.
    Builtin(Arc<str>),
    /// Built-in function that receives its arguments unevaluated.
    Special(Arc<str>),
    /// Unevaluated call.
    Call(Expr),
    /// Double precision vector.
    Numeric(Arc<[f64]>),
    /// Integer vector.
    Integer(Arc<[i64]>),
    /// Character vector.
    Character(Arc<[Arc<str>]>),
    /// Generic list.
    List(im::Vector<Value>),
    /// Variable scope.
    Environment,
    /// Anything without a dedicated tag, labelled for debugging.
    Other(Arc<str>),
}

/// A user-defined function.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Closure {
    /// Formal parameter names.
    pub formals: Vec<Arc<str>>,
    /// Function body.
    pub body: Expr,
}

impl Value {
    /// Returns the raw type tag of this value.
    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Null => TypeTag::Null,
            Self::Symbol(_) => TypeTag::Symbol,
            Self::Closure(_) => TypeTag::Closure,
            Self::Builtin(_) => TypeTag::Builtin,
            Self::Special(_) => TypeTag::Special,
            Self::Call(_) => TypeTag::Call,
            Self::Numeric(_) => TypeTag::Numeric,
            Self::Integer(_) => TypeTag::Integer,
            Self::Character(_) => TypeTag::Character,
            Self::List(_) => TypeTag::List,
            Self::Environment => TypeTag::Environment,
            Self::Other(_) => TypeTag::Other,
        }
    }

    /// Number of elements.
    ///
    /// Null has length zero, vectors and lists their element count, a call
    /// its head plus arguments, and every other value one.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Null => 0,
            Self::Numeric(v) => v.len(),
            Self::Integer(v) => v.len(),
            Self::Character(v) => v.len(),
            Self::List(v) => v.len(),
            Self::Call(expr) => 1 + expr.args().len(),
            Self::Symbol(_)
            | Self::Closure(_)
            | Self::Builtin(_)
            | Self::Special(_)
            | Self::Environment
            | Self::Other(_) => 1,
        }
    }

    /// Returns true if [`len`](Self::len) is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates a symbol value.
    #[must_use]
    pub fn symbol(name: impl Into<Arc<str>>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates a double vector.
    #[must_use]
    pub fn numeric(values: impl IntoIterator<Item = f64>) -> Self {
        Self::Numeric(values.into_iter().collect())
    }

    /// Creates an integer vector.
    #[must_use]
    pub fn integer(values: impl IntoIterator<Item = i64>) -> Self {
        Self::Integer(values.into_iter().collect())
    }

    /// Creates a character vector.
    #[must_use]
    pub fn character<S: Into<Arc<str>>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::Character(values.into_iter().map(Into::into).collect())
    }

    /// Creates a list.
    #[must_use]
    pub fn list(values: impl IntoIterator<Item = Value>) -> Self {
        Self::List(values.into_iter().collect())
    }

    /// Creates a closure value.
    #[must_use]
    pub fn closure<S: Into<Arc<str>>>(formals: impl IntoIterator<Item = S>, body: Expr) -> Self {
        Self::Closure(Closure {
            formals: formals.into_iter().map(Into::into).collect(),
            body,
        })
    }

    /// Attempts to view the value as a double slice.
    #[must_use]
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Self::Numeric(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to view the value as an integer slice.
    #[must_use]
    pub fn as_integer(&self) -> Option<&[i64]> {
        match self {
            Self::Integer(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the single string of a length-one character vector.
    #[must_use]
    pub fn as_scalar_str(&self) -> Option<&str> {
        match self {
            Self::Character(v) if v.len() == 1 => Some(&v[0]),
            _ => None,
        }
    }

    /// Returns the single integer of a length-one integer vector.
    #[must_use]
    pub fn as_scalar_int(&self) -> Option<i64> {
        match self {
            Self::Integer(v) if v.len() == 1 => Some(v[0]),
            _ => None,
        }
    }

    /// Attempts to view the value as a list.
    #[must_use]
    pub const fn as_list(&self) -> Option<&im::Vector<Value>> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Symbol(name) => write!(f, "Symbol({name})"),
            Self::Closure(c) => write!(f, "<closure({})>", c.formals.join(", ")),
            Self::Builtin(name) => write!(f, "<builtin {name}>"),
            Self::Special(name) => write!(f, "<special {name}>"),
            Self::Call(expr) => write!(f, "Call({expr:?})"),
            Self::Numeric(v) => write!(f, "{v:?}"),
            Self::Integer(v) => write!(f, "{v:?}L"),
            Self::Character(v) => write!(f, "{v:?}"),
            Self::List(v) => f.debug_list().entries(v.iter()).finish(),
            Self::Environment => write!(f, "<environment>"),
            Self::Other(label) => write!(f, "<{label}>"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::numeric([n])
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::integer([n])
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::character([s])
    }
}
