//! Type comparison between a target value and the value being validated.
//!
//! A comparison runs through cheap tag checks first and only renders the
//! expression once it knows the values disagree.

use likeness_foundation::{Expr, Settings, StrictnessMode, TypeTag, Value};
use likeness_language::{SyntacticMode, render};

use crate::classify::{Classification, classify_pair};
use crate::diagnostic::MismatchDescriptor;

/// Result of comparing two values' types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeMatch {
    /// The types are alike.
    Match,
    /// The types differ.
    Mismatch(MismatchDescriptor),
}

impl TypeMatch {
    /// Returns true for [`TypeMatch::Match`].
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }

    /// The mismatch descriptor, or the success sentinel for a match.
    #[must_use]
    pub fn into_descriptor(self) -> MismatchDescriptor {
        match self {
            Self::Match => MismatchDescriptor::success(),
            Self::Mismatch(descriptor) => descriptor,
        }
    }
}

/// Compares the type of `current` against the type of `target`.
///
/// `expr` is the expression that produced `current`; it is rendered into the
/// descriptor when the types differ.
#[tracing::instrument(level = "trace", skip_all)]
#[must_use]
pub fn compare(target: &Value, current: &Value, expr: &Expr, settings: &Settings) -> TypeMatch {
    let target_raw = target.type_tag();
    let current_raw = current.type_tag();
    if target_raw == current_raw {
        return TypeMatch::Match;
    }

    let classes = classify_pair(target, current, settings);
    if classes.target == classes.current {
        return TypeMatch::Match;
    }

    // Integers satisfy numeric targets. The reverse is never true.
    if current_raw == TypeTag::Integer
        && settings.strictness() != StrictnessMode::Strict
        && matches!(classes.target, TypeTag::Integer | TypeTag::Numeric)
    {
        return TypeMatch::Match;
    }

    let descriptor = MismatchDescriptor::new(
        render(expr, settings.display_width(), SyntacticMode::Auto, settings),
        settings.bound(target_description(classes, settings.strictness())),
        settings.bound(format!("\"{}\"", current_raw.name())),
    );
    tracing::debug!(
        target = %target_raw,
        current = %current_raw,
        mode = %settings.strictness(),
        "type mismatch"
    );
    TypeMatch::Mismatch(descriptor)
}

fn target_description(classes: Classification, mode: StrictnessMode) -> String {
    let what = if classes.integer_like {
        "integer-like"
    } else if mode < StrictnessMode::Strict && classes.target == TypeTag::Numeric {
        "numeric"
    } else if mode == StrictnessMode::Fuzzy && classes.target == TypeTag::Closure {
        "function"
    } else {
        classes.target.name()
    };
    format!("type \"{what}\"")
}

/// Checks that `current` has the type of `target`, returning the finished
/// message on mismatch.
///
/// # Errors
///
/// Returns the assembled diagnostic when the types differ.
pub fn type_alike(
    target: &Value,
    current: &Value,
    expr: &Expr,
    settings: &Settings,
) -> Result<(), String> {
    match compare(target, current, expr, settings)
        .into_descriptor()
        .to_message(settings)
    {
        None => Ok(()),
        Some(message) => Err(message),
    }
}
