//! Error types for line construction.
//!
//! Every error carries an [`ErrorContext`] naming the chain of calls that
//! produced it, so a failure deep inside the splitter still reports which
//! line build it belonged to.

use std::fmt;

use thiserror::Error;

/// Chain of location tags attached to every [`WrapError`].
///
/// # Examples
///
/// ```
/// use marginwrap::ErrorContext;
///
/// let ctx = ErrorContext::root("report").child("build_line");
/// assert_eq!(ctx.to_string(), "report -> build_line");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext(Vec<String>);

impl ErrorContext {
    /// Start a new chain with a single tag.
    #[must_use]
    pub fn root(tag: impl Into<String>) -> Self { Self(vec![tag.into()]) }

    /// Extend the chain with `tag`, leaving `self` untouched.
    #[must_use]
    pub fn child(&self, tag: impl Into<String>) -> Self {
        let mut tags = self.0.clone();
        tags.push(tag.into());
        Self(tags)
    }

    /// Innermost tag, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> { self.0.last().map(String::as_str) }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" -> "))
    }
}

/// Errors produced while configuring or building lines.
#[derive(Debug, Error)]
pub enum WrapError {
    #[error("{context}: maximum line length must be at least 1 when auto-wrap is on (got {max_line_length})")]
    InvalidMaxLineLength {
        context: ErrorContext,
        max_line_length: usize,
    },

    #[error(
        "{context}: margins and terminator leave {available} columns of a {max_line_length}-column \
         line for text; at least {minimum} are required"
    )]
    MarginsTooWide {
        context: ErrorContext,
        max_line_length: usize,
        /// Columns left for text; negative when the margins alone overflow the line.
        available: i64,
        minimum: usize,
    },

    #[error("{context}: fragment length must be at least 1 (got {length})")]
    InvalidFragmentLength { context: ErrorContext, length: usize },

    #[error("{context}: cannot split empty text")]
    EmptySplitInput { context: ErrorContext },

    #[error("{context}: filler characters are empty")]
    EmptyFiller { context: ErrorContext },

    #[error("{context}: repeat count {count} is outside 1..={max}")]
    InvalidRepeatCount {
        context: ErrorContext,
        count: usize,
        max: usize,
    },

    #[error("{context}: field length {length} is outside 1..={max}")]
    InvalidFieldLength {
        context: ErrorContext,
        length: usize,
        max: usize,
    },

    #[error("{context}: blank line count {count} is outside 1..={max}")]
    InvalidBlankLineCount {
        context: ErrorContext,
        count: usize,
        max: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WrapError {
    /// Context chain of the failing call, if the error carries one.
    #[must_use]
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::InvalidMaxLineLength { context, .. }
            | Self::MarginsTooWide { context, .. }
            | Self::InvalidFragmentLength { context, .. }
            | Self::EmptySplitInput { context }
            | Self::EmptyFiller { context }
            | Self::InvalidRepeatCount { context, .. }
            | Self::InvalidFieldLength { context, .. }
            | Self::InvalidBlankLineCount { context, .. } => Some(context),
            Self::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_does_not_mutate_parent() {
        let root = ErrorContext::root("a");
        let child = root.child("b");
        assert_eq!(root.to_string(), "a");
        assert_eq!(child.to_string(), "a -> b");
        assert_eq!(child.location(), Some("b"));
    }

    #[test]
    fn message_leads_with_context() {
        let err = WrapError::EmptySplitInput {
            context: ErrorContext::root("x").child("split_text"),
        };
        assert_eq!(err.to_string(), "x -> split_text: cannot split empty text");
    }

    #[test]
    fn io_errors_have_no_context() {
        let err = WrapError::from(std::io::Error::other("boom"));
        assert!(err.context().is_none());
    }
}
