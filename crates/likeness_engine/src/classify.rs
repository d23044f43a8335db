//! Canonical type classification.
//!
//! Raw type tags are coarsened before comparison according to the
//! [`StrictnessMode`]:
//!
//! | raw tag                       | Fuzzy                         | Medium   | Strict |
//! |-------------------------------|-------------------------------|----------|--------|
//! | `Numeric`                     | `Integer` if integer-like     | `Numeric`| raw    |
//! | `Closure`/`Builtin`/`Special` | `Closure`                     | `Closure`| raw    |
//! | anything else                 | raw                           | raw      | raw    |

use std::sync::Arc;

use likeness_foundation::{Settings, StrictnessMode, TypeTag, Value};

/// Canonical comparison tag of `value` under `mode`.
#[must_use]
pub fn canonicalize(value: &Value, mode: StrictnessMode) -> TypeTag {
    let raw = value.type_tag();
    match (raw, mode) {
        (TypeTag::Numeric, StrictnessMode::Fuzzy) => {
            if value.as_numeric().is_some_and(is_integer_like) {
                TypeTag::Integer
            } else {
                TypeTag::Numeric
            }
        }
        (raw, StrictnessMode::Fuzzy | StrictnessMode::Medium) if raw.is_function() => {
            TypeTag::Closure
        }
        _ => raw,
    }
}

/// Returns true if every finite element is a whole number.
///
/// `NaN` and infinities never disqualify. Stops at the first fractional
/// element.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_integer_like(values: &[f64]) -> bool {
    values.iter().all(|v| !v.is_finite() || *v == v.trunc())
}

/// Tags of a target/current pair, after the collapses that apply to this
/// comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Tag used for the target.
    pub target: TypeTag,
    /// Tag used for the current value.
    pub current: TypeTag,
    /// Whether the integer-like collapse was in effect.
    pub integer_like: bool,
}

/// Classifies a target/current pair for comparison.
///
/// The integer-like collapse is considered only under
/// [`StrictnessMode::Fuzzy`] with an integer target, and only when both
/// values fit the configured length cap. The function collapse applies
/// whenever the target is function-like and the mode is not strict. If
/// neither applies the raw tags are returned.
#[must_use]
pub fn classify_pair(target: &Value, current: &Value, settings: &Settings) -> Classification {
    let mode = settings.strictness();
    let target_raw = target.type_tag();

    let integer_like = mode == StrictnessMode::Fuzzy
        && target_raw == TypeTag::Integer
        && settings
            .fuzzy_int_max_len()
            .is_none_or(|cap| target.len() <= cap && current.len() <= cap);
    let function_like = mode < StrictnessMode::Strict && target_raw.is_function();

    if integer_like || function_like {
        Classification {
            target: canonicalize(target, mode),
            current: canonicalize(current, mode),
            integer_like,
        }
    } else {
        Classification {
            target: target_raw,
            current: current.type_tag(),
            integer_like: false,
        }
    }
}

/// Display name of the fuzzy canonical tag of `value`.
#[must_use]
pub fn typeof_name(value: &Value) -> &'static str {
    canonicalize(value, StrictnessMode::Fuzzy).name()
}

/// Coarse "mode" name of `value`: functions share one name, symbols are
/// `name`, calls are `call`, doubles are `numeric`.
#[must_use]
pub fn mode_name(value: &Value) -> &'static str {
    match value.type_tag() {
        TypeTag::Null => "NULL",
        TypeTag::Symbol => "name",
        TypeTag::Closure | TypeTag::Builtin | TypeTag::Special => "function",
        TypeTag::Call => "call",
        TypeTag::Numeric => "numeric",
        other => other.name(),
    }
}

/// The explicit class of a value if it has one, otherwise its implicit
/// class, [`mode_name`].
#[must_use]
pub fn class_or_mode(value: &Value, class: Option<&[Arc<str>]>) -> Vec<Arc<str>> {
    match class {
        Some(class) => class.to_vec(),
        None => vec![Arc::from(mode_name(value))],
    }
}

/// Returns true if `value` is a list whose elements all have the same
/// length, the shape of a data frame. Does not look at classes.
#[must_use]
pub fn is_frame_like(value: &Value) -> bool {
    let Some(columns) = value.as_list() else {
        return false;
    };
    let mut lengths = columns.iter().map(Value::len);
    match lengths.next() {
        Some(first) => lengths.all(|len| len == first),
        None => true,
    }
}
