//! Mismatch descriptors and the messages built from them.

use std::fmt;

use likeness_foundation::Settings;

/// Verb used before the target description.
pub const TARGET_VERB: &str = "be";
/// Verb used before the actual description.
pub const ACTUAL_VERB: &str = "is";

/// What went wrong in a comparison, in pieces that can be merged with other
/// diagnostics.
///
/// An empty `target_description` means success.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MismatchDescriptor {
    /// The rendered expression, including any trailing space or newline.
    pub rendered_call: String,
    /// What the value should have been, e.g. `type "integer"`.
    pub target_description: String,
    /// Verb preceding the target description.
    pub target_verb: String,
    /// What the value was, e.g. `"character"`.
    pub actual_description: String,
    /// Verb preceding the actual description.
    pub actual_verb: String,
}

/// The five message parts, in merge order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticParts {
    /// The rendered expression.
    pub rendered_call: String,
    /// Verb preceding the target description.
    pub target_verb: String,
    /// What the value should have been.
    pub target_description: String,
    /// Verb preceding the actual description.
    pub actual_verb: String,
    /// What the value was.
    pub actual_description: String,
}

impl DiagnosticParts {
    /// Returns the parts as a tuple.
    #[must_use]
    pub fn into_tuple(self) -> (String, String, String, String, String) {
        (
            self.rendered_call,
            self.target_verb,
            self.target_description,
            self.actual_verb,
            self.actual_description,
        )
    }
}

impl MismatchDescriptor {
    /// Creates a descriptor with the default verbs.
    #[must_use]
    pub fn new(
        rendered_call: impl Into<String>,
        target_description: impl Into<String>,
        actual_description: impl Into<String>,
    ) -> Self {
        Self {
            rendered_call: rendered_call.into(),
            target_description: target_description.into(),
            target_verb: TARGET_VERB.to_string(),
            actual_description: actual_description.into(),
            actual_verb: ACTUAL_VERB.to_string(),
        }
    }

    /// The success sentinel.
    #[must_use]
    pub fn success() -> Self {
        Self::new("", "", "")
    }

    /// Returns true if this descriptor is the success sentinel.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.target_description.is_empty()
    }

    /// Assembles the final message, or `None` for success.
    ///
    /// The message is bounded by the settings' maximum string length.
    #[must_use]
    pub fn to_message(&self, settings: &Settings) -> Option<String> {
        if self.is_success() {
            return None;
        }
        Some(settings.bound(self.to_string()))
    }

    /// Splits the descriptor into message parts for merging into larger
    /// diagnostics, or `None` for success.
    #[must_use]
    pub fn to_structured(&self) -> Option<DiagnosticParts> {
        if self.is_success() {
            return None;
        }
        Some(DiagnosticParts {
            rendered_call: self.rendered_call.clone(),
            target_verb: self.target_verb.clone(),
            target_description: self.target_description.clone(),
            actual_verb: self.actual_verb.clone(),
            actual_description: self.actual_description.clone(),
        })
    }
}

impl fmt::Display for MismatchDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}should {} {}",
            self.rendered_call, self.target_verb, self.target_description
        )?;
        if !self.actual_description.is_empty() {
            write!(f, " ({} {})", self.actual_verb, self.actual_description)?;
        }
        Ok(())
    }
}
