//! Settings threaded through classification, comparison, and rendering.
//!
//! A [`Settings`] value is built once per top-level validation and then only
//! read. Options that would otherwise come from the host environment (display
//! width, prompt strings) are resolved up front through an [`OptionProvider`].

use std::collections::HashMap;
use std::hash::BuildHasher;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::Error;
use crate::types::StrictnessMode;
use crate::value::Value;

/// Display width used when none is configured or the configured one is unusable.
pub const DEFAULT_WIDTH: usize = 80;
/// Prompt used when none is configured.
pub const DEFAULT_PROMPT: &str = "> ";
/// Continuation prompt used when none is configured.
pub const DEFAULT_CONTINUATION: &str = "+ ";
/// Upper bound on the length of any produced string.
pub const DEFAULT_MAX_STRING_LEN: usize = 65_000;
/// Longest numeric vector still eligible for the integer-like collapse.
pub const DEFAULT_FUZZY_INT_MAX_LEN: usize = 100;

/// Source of host configuration values.
///
/// Looked up once per option while building [`Settings`]; a missing or
/// malformed answer falls back to a fixed default.
pub trait OptionProvider {
    /// Returns the value of the named option, if set.
    fn get_option(&self, name: &str) -> Option<Value>;
}

impl<S: BuildHasher> OptionProvider for HashMap<String, Value, S> {
    fn get_option(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Immutable configuration for the comparison core.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "SettingsRecord", into = "SettingsRecord")
)]
pub struct Settings {
    strictness: StrictnessMode,
    fuzzy_int_max_len: Option<usize>,
    display_width: usize,
    max_string_len: usize,
    prompt: String,
    continuation: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strictness: StrictnessMode::Fuzzy,
            fuzzy_int_max_len: Some(DEFAULT_FUZZY_INT_MAX_LEN),
            display_width: DEFAULT_WIDTH,
            max_string_len: DEFAULT_MAX_STRING_LEN,
            prompt: DEFAULT_PROMPT.to_string(),
            continuation: DEFAULT_CONTINUATION.to_string(),
        }
    }
}

impl Settings {
    /// Starts a builder with every field unset.
    #[must_use]
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Default settings with medium strictness.
    #[must_use]
    pub fn medium() -> Self {
        Self {
            strictness: StrictnessMode::Medium,
            ..Self::default()
        }
    }

    /// Default settings with strict comparison.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strictness: StrictnessMode::Strict,
            ..Self::default()
        }
    }

    /// How aggressively type distinctions collapse.
    #[must_use]
    pub const fn strictness(&self) -> StrictnessMode {
        self.strictness
    }

    /// Length cap for the integer-like collapse; `None` means unbounded.
    #[must_use]
    pub const fn fuzzy_int_max_len(&self) -> Option<usize> {
        self.fuzzy_int_max_len
    }

    /// Display width in characters.
    #[must_use]
    pub const fn display_width(&self) -> usize {
        self.display_width
    }

    /// Maximum length of any produced string, in characters.
    #[must_use]
    pub const fn max_string_len(&self) -> usize {
        self.max_string_len
    }

    /// Prefix for the first line of a transcript-style block.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Prefix for the following lines of a transcript-style block.
    #[must_use]
    pub fn continuation(&self) -> &str {
        &self.continuation
    }

    /// Cuts `text` down to [`max_string_len`](Self::max_string_len) characters.
    #[must_use]
    pub fn bound(&self, mut text: String) -> String {
        if let Some((idx, _)) = text.char_indices().nth(self.max_string_len) {
            text.truncate(idx);
        }
        text
    }

    /// Character length of `text`, counting no further than
    /// [`max_string_len`](Self::max_string_len).
    #[must_use]
    pub fn bounded_len(&self, text: &str) -> usize {
        text.chars().take(self.max_string_len).count()
    }
}

/// Serialized form of [`Settings`].
///
/// Deserialized records go through [`SettingsBuilder::build`], so they are
/// validated like any other settings.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SettingsRecord {
    /// See [`Settings::strictness`].
    pub strictness: StrictnessMode,
    /// See [`Settings::fuzzy_int_max_len`].
    pub fuzzy_int_max_len: Option<usize>,
    /// See [`Settings::display_width`].
    pub display_width: usize,
    /// See [`Settings::max_string_len`].
    pub max_string_len: usize,
    /// See [`Settings::prompt`].
    pub prompt: String,
    /// See [`Settings::continuation`].
    pub continuation: String,
}

#[cfg(feature = "serde")]
impl TryFrom<SettingsRecord> for Settings {
    type Error = Error;

    fn try_from(record: SettingsRecord) -> Result<Self> {
        Settings::builder()
            .with_strictness(record.strictness)
            .with_fuzzy_int_max_len(record.fuzzy_int_max_len)
            .with_display_width(record.display_width)
            .with_max_string_len(record.max_string_len)
            .with_prompt(record.prompt)
            .with_continuation(record.continuation)
            .build()
    }
}

#[cfg(feature = "serde")]
impl From<Settings> for SettingsRecord {
    fn from(settings: Settings) -> Self {
        Self {
            strictness: settings.strictness,
            fuzzy_int_max_len: settings.fuzzy_int_max_len,
            display_width: settings.display_width,
            max_string_len: settings.max_string_len,
            prompt: settings.prompt,
            continuation: settings.continuation,
        }
    }
}

/// Builder for [`Settings`].
///
/// Fields left unset take their defaults in [`build`](Self::build), or are
/// looked up through [`resolve_with`](Self::resolve_with).
#[derive(Clone, Debug, Default)]
pub struct SettingsBuilder {
    strictness: Option<StrictnessMode>,
    fuzzy_int_max_len: Option<Option<usize>>,
    display_width: Option<usize>,
    max_string_len: Option<usize>,
    prompt: Option<String>,
    continuation: Option<String>,
}

impl SettingsBuilder {
    /// Sets the strictness mode.
    #[must_use]
    pub fn with_strictness(mut self, mode: StrictnessMode) -> Self {
        self.strictness = Some(mode);
        self
    }

    /// Sets the integer-like length cap; `None` removes the cap.
    #[must_use]
    pub fn with_fuzzy_int_max_len(mut self, cap: Option<usize>) -> Self {
        self.fuzzy_int_max_len = Some(cap);
        self
    }

    /// Sets the display width.
    #[must_use]
    pub fn with_display_width(mut self, width: usize) -> Self {
        self.display_width = Some(width);
        self
    }

    /// Sets the maximum produced string length.
    #[must_use]
    pub fn with_max_string_len(mut self, len: usize) -> Self {
        self.max_string_len = Some(len);
        self
    }

    /// Sets the first-line prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Sets the continuation prompt.
    #[must_use]
    pub fn with_continuation(mut self, continuation: impl Into<String>) -> Self {
        self.continuation = Some(continuation.into());
        self
    }

    /// Fills the display width and prompt strings from `provider` when they
    /// were not set explicitly.
    ///
    /// Reads the `width`, `prompt`, and `continue` options. A missing or
    /// malformed option falls back to [`DEFAULT_WIDTH`], [`DEFAULT_PROMPT`],
    /// or [`DEFAULT_CONTINUATION`].
    #[must_use]
    pub fn resolve_with(mut self, provider: &dyn OptionProvider) -> Self {
        if self.display_width.is_none() {
            let width = provider
                .get_option("width")
                .and_then(|v| v.as_scalar_int())
                .and_then(|n| usize::try_from(n).ok())
                .filter(|&n| n > 0);
            if width.is_none() {
                tracing::debug!(default = DEFAULT_WIDTH, "option `width` unusable, using default");
            }
            self.display_width = Some(width.unwrap_or(DEFAULT_WIDTH));
        }
        if self.prompt.is_none() {
            self.prompt = Some(string_option(provider, "prompt", DEFAULT_PROMPT));
        }
        if self.continuation.is_none() {
            self.continuation = Some(string_option(provider, "continue", DEFAULT_CONTINUATION));
        }
        self
    }

    /// Validates and builds the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidSettings`](crate::ErrorKind::InvalidSettings)
    /// if the display width or maximum string length is zero.
    pub fn build(self) -> Result<Settings> {
        let defaults = Settings::default();
        let display_width = self.display_width.unwrap_or(defaults.display_width);
        if display_width == 0 {
            return Err(Error::invalid_settings("display_width", "must be positive"));
        }
        let max_string_len = self.max_string_len.unwrap_or(defaults.max_string_len);
        if max_string_len == 0 {
            return Err(Error::invalid_settings("max_string_len", "must be positive"));
        }
        Ok(Settings {
            strictness: self.strictness.unwrap_or(defaults.strictness),
            fuzzy_int_max_len: self.fuzzy_int_max_len.unwrap_or(defaults.fuzzy_int_max_len),
            display_width,
            max_string_len,
            prompt: self.prompt.unwrap_or(defaults.prompt),
            continuation: self.continuation.unwrap_or(defaults.continuation),
        })
    }
}

fn string_option(provider: &dyn OptionProvider, name: &str, default: &str) -> String {
    match provider.get_option(name) {
        Some(value) => match value.as_scalar_str() {
            Some(s) => s.to_string(),
            None => {
                tracing::debug!(option = name, default, "option is not a single string, using default");
                default.to_string()
            }
        },
        None => default.to_string(),
    }
}
