//! Cutting text into width-limited fragments.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    error::{ErrorContext, WrapError},
    measure::{split_at_width, width},
};

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    lazy_regex!(r"\s+", "whitespace run regex should compile");

/// Cut the head off `text` at a whitespace boundary within `max` columns.
///
/// Returns the trimmed head and the remainder with its leading whitespace
/// removed, or `None` when the first `max` columns hold no usable boundary.
/// `text` must not start with whitespace.
pub(crate) fn cut_at_boundary(text: &str, max: usize) -> Option<(&str, &str)> {
    if max == 0 {
        return None;
    }
    let (head, tail) = split_at_width(text, max);
    let cut = if tail.starts_with(char::is_whitespace) {
        head.len()
    } else {
        WHITESPACE_RUN_RE
            .find_iter(head)
            .last()
            .map(|m| m.start())
            .filter(|&start| start > 0)?
    };
    Some((text[..cut].trim_end(), text[cut..].trim_start()))
}

/// Cut the head off `text` at a whitespace boundary if one exists within
/// `max` columns, otherwise at exactly `max` columns.
pub(crate) fn cut_fragment(text: &str, max: usize) -> (&str, &str) {
    cut_at_boundary(text, max).unwrap_or_else(|| {
        let (head, tail) = split_at_width(text, max);
        (head, tail.trim_start())
    })
}

/// Split `text` into fragments no wider than `fragment_max` columns.
///
/// Occurrences of `break_marker` already present in `text` are replaced by a
/// space before splitting, so they neither survive into a fragment nor count
/// towards its width. Fragments break at the last whitespace boundary that
/// fits and fall back to a hard cut for words wider than `fragment_max`.
/// Whitespace at each boundary is trimmed away.
///
/// # Errors
/// Returns [`WrapError::InvalidFragmentLength`] when `fragment_max` is zero
/// and [`WrapError::EmptySplitInput`] when `text` is empty.
///
/// # Examples
///
/// ```
/// use marginwrap::{ErrorContext, split_text};
///
/// let ctx = ErrorContext::root("doc");
/// let parts = split_text("alpha beta\ngamma", 10, "\n", &ctx).unwrap();
/// assert_eq!(parts, vec!["alpha beta", "gamma"]);
/// ```
pub fn split_text(
    text: &str,
    fragment_max: usize,
    break_marker: &str,
    context: &ErrorContext,
) -> Result<Vec<String>, WrapError> {
    let context = context.child("split_text");
    if fragment_max < 1 {
        return Err(WrapError::InvalidFragmentLength {
            context,
            length: fragment_max,
        });
    }
    if text.is_empty() {
        return Err(WrapError::EmptySplitInput { context });
    }

    let cleaned = if break_marker.is_empty() {
        text.to_string()
    } else {
        text.replace(break_marker, " ")
    };

    let mut fragments = Vec::new();
    let mut rest = cleaned.trim();
    while !rest.is_empty() {
        if width(rest) <= fragment_max {
            fragments.push(rest.to_string());
            break;
        }
        let (head, tail) = cut_fragment(rest, fragment_max);
        fragments.push(head.to_string());
        rest = tail;
    }
    Ok(fragments)
}
