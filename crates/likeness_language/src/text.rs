//! Text layout helpers for diagnostics: middle truncation and line padding.

use likeness_foundation::Settings;

/// Marker inserted by [`truncate_middle`] where text was removed.
pub const ELLIPSIS: &str = "..";

/// Marker appended by [`pad_lines`] when lines were dropped.
pub const MORE_LINES: &str = "...";

/// How [`pad_lines`] prefixes each line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Padding {
    /// First line gets the configured prompt, later lines the continuation
    /// prompt, like an interactive transcript.
    Prompt,
    /// Every line gets this many spaces.
    Spaces(usize),
    /// No prefix.
    None,
}

/// Shortens `text` to exactly `max_chars` characters by replacing its middle
/// with [`ELLIPSIS`], keeping the last `keep_at_end` characters.
///
/// Text that already fits is returned unchanged.
///
/// # Panics
///
/// Panics if `max_chars < 8` or `keep_at_end > max_chars - 2`. These are
/// caller defects, not user errors.
#[must_use]
pub fn truncate_middle(text: &str, max_chars: usize, keep_at_end: usize) -> String {
    assert!(max_chars >= 8, "`max_chars` must be at least 8, got {max_chars}");
    assert!(
        keep_at_end <= max_chars - 2,
        "`keep_at_end` ({keep_at_end}) must not exceed `max_chars - 2` ({})",
        max_chars - 2
    );

    let len = text.chars().count();
    if len <= max_chars {
        return text.to_string();
    }
    let mut out = String::with_capacity(max_chars);
    out.extend(text.chars().take(max_chars - keep_at_end - ELLIPSIS.len()));
    out.push_str(ELLIPSIS);
    out.extend(text.chars().skip(len - keep_at_end));
    out
}

/// Prefixes and joins `lines`.
///
/// Only the first `line_limit` lines are emitted (all of them when `None`);
/// if some were dropped, [`MORE_LINES`] is appended to the last emitted one.
/// When more than one line is emitted from a multi-line source, every emitted
/// line is terminated by a newline, so the block can be followed directly by
/// more text. The result is bounded by the settings' maximum string length.
#[must_use]
pub fn pad_lines<S: AsRef<str>>(
    lines: &[S],
    padding: Padding,
    line_limit: Option<usize>,
    settings: &Settings,
) -> String {
    let total = lines.len();
    let emitted = line_limit.map_or(total, |limit| limit.min(total));
    let spaces;
    let (first, rest) = match padding {
        Padding::Prompt => (settings.prompt(), settings.continuation()),
        Padding::Spaces(n) => {
            spaces = " ".repeat(n);
            (spaces.as_str(), spaces.as_str())
        }
        Padding::None => ("", ""),
    };
    let terminate = emitted > 1 && total > 1;

    let mut out = String::new();
    for (i, line) in lines[..emitted].iter().enumerate() {
        out.push_str(if i == 0 { first } else { rest });
        out.push_str(line.as_ref());
        if i + 1 == emitted && emitted < total {
            out.push_str(MORE_LINES);
        }
        if terminate {
            out.push('\n');
        }
    }
    settings.bound(out)
}

/// [`pad_lines`] for input that may carry absent lines.
///
/// # Panics
///
/// Panics if any line is `None`.
#[must_use]
pub fn pad_optional_lines<S: AsRef<str>>(
    lines: &[Option<S>],
    padding: Padding,
    line_limit: Option<usize>,
    settings: &Settings,
) -> String {
    let present: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| match line {
            Some(line) => line.as_ref(),
            None => panic!("line {i} is absent; lines to pad must all be present"),
        })
        .collect();
    pad_lines(&present, padding, line_limit, settings)
}
