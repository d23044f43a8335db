//! Type tags and strictness levels for type comparison.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Runtime type tag of a [`Value`](crate::Value).
///
/// The same closed set doubles as the canonical comparison tags: when
/// function-like tags collapse they become [`TypeTag::Closure`], and an
/// integer-like numeric becomes [`TypeTag::Integer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeTag {
    /// The null value.
    Null,
    /// A bare name.
    Symbol,
    /// A user-defined function.
    Closure,
    /// A built-in function that evaluates its arguments.
    Builtin,
    /// A built-in function that receives its arguments unevaluated.
    Special,
    /// An unevaluated call.
    Call,
    /// Double precision vector.
    Numeric,
    /// Integer vector.
    Integer,
    /// Character vector.
    Character,
    /// Generic list.
    List,
    /// Variable scope.
    Environment,
    /// Anything without a dedicated tag.
    Other,
}

impl TypeTag {
    /// All tags, in declaration order.
    pub const ALL: [TypeTag; 12] = [
        Self::Null,
        Self::Symbol,
        Self::Closure,
        Self::Builtin,
        Self::Special,
        Self::Call,
        Self::Numeric,
        Self::Integer,
        Self::Character,
        Self::List,
        Self::Environment,
        Self::Other,
    ];

    /// The name used for this tag in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Symbol => "symbol",
            Self::Closure => "closure",
            Self::Builtin => "builtin",
            Self::Special => "special",
            Self::Call => "language",
            Self::Numeric => "double",
            Self::Integer => "integer",
            Self::Character => "character",
            Self::List => "list",
            Self::Environment => "environment",
            Self::Other => "other",
        }
    }

    /// Returns true for the three function-like tags.
    #[must_use]
    pub const fn is_function(self) -> bool {
        matches!(self, Self::Closure | Self::Builtin | Self::Special)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How aggressively raw type distinctions collapse before comparison.
///
/// Ordered from most to least lenient, so `mode < StrictnessMode::Strict`
/// reads as "some collapsing applies".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StrictnessMode {
    /// Integer-like numerics count as integers, all functions are alike.
    #[default]
    Fuzzy,
    /// All functions are alike, numerics are compared by raw tag.
    Medium,
    /// Raw tags only.
    Strict,
}

impl StrictnessMode {
    /// Converts a numeric level (0 = fuzzy, 1 = medium, 2 = strict).
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidSettings`](crate::ErrorKind::InvalidSettings)
    /// for any other level.
    pub fn from_level(level: i64) -> crate::Result<Self> {
        match level {
            0 => Ok(Self::Fuzzy),
            1 => Ok(Self::Medium),
            2 => Ok(Self::Strict),
            other => Err(Error::invalid_settings(
                "strictness",
                format!("level must be 0, 1, or 2, got {other}"),
            )),
        }
    }

    /// The numeric level of this mode.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Fuzzy => 0,
            Self::Medium => 1,
            Self::Strict => 2,
        }
    }
}

impl FromStr for StrictnessMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fuzzy" => Ok(Self::Fuzzy),
            "medium" => Ok(Self::Medium),
            "strict" => Ok(Self::Strict),
            _ => Err(Error::invalid_settings(
                "strictness",
                format!("unknown mode `{s}`"),
            )),
        }
    }
}

impl fmt::Display for StrictnessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fuzzy => write!(f, "fuzzy"),
            Self::Medium => write!(f, "medium"),
            Self::Strict => write!(f, "strict"),
        }
    }
}
