//! Line construction with margins and automatic wrapping.
//!
//! A [`LineConfig`] describes how lines look: the left, continuation and
//! right margins, the terminator and the maximum line length. It is validated
//! once by [`LineConfigBuilder::build`]. [`LineConfig::build_line`] then
//! writes one logical line at a time into a caller-owned `String`, threading a
//! [`LineState`] between calls so that several logical lines can share one
//! continuous output stream.
//!
//! Each logical line is written as left margin, body text, right margin and a
//! closing terminator. Widths are display columns as measured by
//! [`crate::measure`].
//!
//! Builds are synchronous and hold the only mutable borrow of the output
//! buffer for their duration; callers sharing a buffer across threads must
//! serialise the calls themselves.

use tracing::debug;

mod body;
mod line_buffer;
mod margin;
mod splitter;

pub use body::{BodyEnd, BodyMargins, write_text};
pub use line_buffer::{LineBuffer, LineState};
pub use margin::{write_margin, write_right_margin};
pub use splitter::split_text;

use crate::{
    error::{ErrorContext, WrapError},
    measure::width,
};

/// Default maximum line length in columns.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 80;

/// Terminator used when none is configured and line termination is on.
pub const DEFAULT_TERMINATOR: &str = "\n";

/// Smallest number of columns the margins and terminator must leave for text.
pub const MIN_TEXT_WIDTH: usize = 5;

/// Line length used when auto-wrap is off; large enough to never wrap.
pub const UNBOUNDED_LINE_LENGTH: usize = 1_000_000_000;

const CAPACITY_SLACK: usize = 16;

/// Builder for [`LineConfig`].
///
/// # Examples
///
/// ```
/// use marginwrap::{LineConfigBuilder, LineState};
///
/// let config = LineConfigBuilder::new()
///     .max_line_length(20)
///     .left_margin("> ")
///     .build()
///     .unwrap();
/// let mut out = String::new();
/// let mut state = LineState::new();
/// config.build_line(&mut out, "hello world", &mut state).unwrap();
/// assert_eq!(out, "> hello world\n");
/// ```
#[derive(Debug, Clone)]
pub struct LineConfigBuilder {
    left_margin: String,
    continuation_margin: Option<String>,
    right_margin: String,
    terminator: Option<String>,
    line_termination: bool,
    max_line_length: usize,
    auto_wrap: bool,
    error_prefix: String,
}

impl Default for LineConfigBuilder {
    fn default() -> Self {
        Self {
            left_margin: String::new(),
            continuation_margin: None,
            right_margin: String::new(),
            terminator: None,
            line_termination: true,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            auto_wrap: true,
            error_prefix: "LineConfig".to_string(),
        }
    }
}

impl LineConfigBuilder {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Margin written at the start of every logical line.
    #[must_use]
    pub fn left_margin(mut self, margin: impl Into<String>) -> Self {
        self.left_margin = margin.into();
        self
    }

    /// Margin written at the start of lines created by wrapping. Defaults to
    /// the left margin.
    #[must_use]
    pub fn continuation_margin(mut self, margin: impl Into<String>) -> Self {
        self.continuation_margin = Some(margin.into());
        self
    }

    /// Margin written at the end of every line.
    #[must_use]
    pub fn right_margin(mut self, margin: impl Into<String>) -> Self {
        self.right_margin = margin.into();
        self
    }

    /// Line terminator. A non-empty terminator always closes lines, even when
    /// [`Self::line_termination`] is turned off.
    #[must_use]
    pub fn terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = Some(terminator.into());
        self
    }

    /// Whether lines are closed with [`DEFAULT_TERMINATOR`] when no
    /// terminator is configured.
    #[must_use]
    pub fn line_termination(mut self, on: bool) -> Self {
        self.line_termination = on;
        self
    }

    #[must_use]
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.max_line_length = length;
        self
    }

    /// Whether long lines are broken automatically.
    #[must_use]
    pub fn auto_wrap(mut self, on: bool) -> Self {
        self.auto_wrap = on;
        self
    }

    /// Root tag of the context chain carried by errors from this config.
    #[must_use]
    pub fn error_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.error_prefix = prefix.into();
        self
    }

    /// Validate the settings.
    ///
    /// # Errors
    /// With auto-wrap on, returns [`WrapError::InvalidMaxLineLength`] for a
    /// zero maximum and [`WrapError::MarginsTooWide`] when the margins and
    /// terminator leave fewer than [`MIN_TEXT_WIDTH`] columns for text.
    pub fn build(self) -> Result<LineConfig, WrapError> {
        let root = ErrorContext::root(self.error_prefix);
        let context = root.child("build");

        let terminator = match self.terminator {
            Some(t) if !t.is_empty() => t,
            _ if self.line_termination => DEFAULT_TERMINATOR.to_string(),
            _ => String::new(),
        };
        let continuation_margin = self
            .continuation_margin
            .unwrap_or_else(|| self.left_margin.clone());

        let max_line_length = if self.auto_wrap {
            if self.max_line_length < 1 {
                return Err(WrapError::InvalidMaxLineLength {
                    context,
                    max_line_length: self.max_line_length,
                });
            }
            let reserved = width(&self.left_margin).max(width(&continuation_margin))
                + width(&self.right_margin)
                + width(&terminator);
            let available = to_signed(self.max_line_length) - to_signed(reserved);
            if available < to_signed(MIN_TEXT_WIDTH) {
                return Err(WrapError::MarginsTooWide {
                    context,
                    max_line_length: self.max_line_length,
                    available,
                    minimum: MIN_TEXT_WIDTH,
                });
            }
            self.max_line_length
        } else {
            UNBOUNDED_LINE_LENGTH
        };

        Ok(LineConfig {
            left_margin: self.left_margin,
            continuation_margin,
            right_margin: self.right_margin,
            terminator,
            max_line_length,
            auto_wrap: self.auto_wrap,
            context: root,
        })
    }
}

fn to_signed(n: usize) -> i64 { i64::try_from(n).unwrap_or(i64::MAX) }

/// Validated line layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineConfig {
    left_margin: String,
    continuation_margin: String,
    right_margin: String,
    terminator: String,
    max_line_length: usize,
    auto_wrap: bool,
    context: ErrorContext,
}

impl LineConfig {
    #[must_use]
    pub fn builder() -> LineConfigBuilder { LineConfigBuilder::new() }

    #[must_use]
    pub fn left_margin(&self) -> &str { &self.left_margin }

    #[must_use]
    pub fn continuation_margin(&self) -> &str { &self.continuation_margin }

    #[must_use]
    pub fn right_margin(&self) -> &str { &self.right_margin }

    /// Effective terminator; empty when line termination is off.
    #[must_use]
    pub fn terminator(&self) -> &str { &self.terminator }

    /// Effective maximum, [`UNBOUNDED_LINE_LENGTH`] when auto-wrap is off.
    #[must_use]
    pub fn max_line_length(&self) -> usize { self.max_line_length }

    #[must_use]
    pub fn auto_wrap(&self) -> bool { self.auto_wrap }

    /// Columns left for text on a line carrying both margins.
    #[must_use]
    pub fn adjusted_max_line_length(&self) -> usize {
        self.max_line_length.saturating_sub(
            width(&self.left_margin).max(width(&self.continuation_margin))
                + width(&self.right_margin)
                + width(&self.terminator),
        )
    }

    /// Write one logical line of `text` to `out`.
    ///
    /// The line is written as left margin, text and right margin, then
    /// closed with the terminator unless the last write already was one.
    /// `state` must be the state returned by the previous call on the same
    /// buffer (or [`LineState::new`] for a fresh one) and is updated in place.
    ///
    /// # Errors
    /// Returns an error if the body text cannot be re-split. On error `out`
    /// may hold a partially written line.
    pub fn build_line(
        &self,
        out: &mut String,
        text: &str,
        state: &mut LineState,
    ) -> Result<(), WrapError> {
        let context = self.context.child("build_line");
        out.reserve(self.estimate_capacity(text));

        let mut line = LineBuffer::new(
            out,
            &self.terminator,
            self.max_line_length,
            self.auto_wrap,
            *state,
        );
        write_margin(&mut line, &self.left_margin);
        let margins = BodyMargins {
            left: &self.left_margin,
            continuation: &self.continuation_margin,
            right: &self.right_margin,
        };
        let end = write_text(&mut line, margins, text, &context)?;
        if end == BodyEnd::Open {
            write_right_margin(&mut line, &self.right_margin);
        }
        if !line.last_write_was_terminator() && !self.terminator.is_empty() {
            line.terminate();
        }
        *state = line.state();
        debug!(
            current_line_length = state.current_line_length,
            "built line"
        );
        Ok(())
    }

    /// Bytes `build_line` is expected to append for `text`.
    fn estimate_capacity(&self, text: &str) -> usize {
        let decoration = self.left_margin.len().max(self.continuation_margin.len())
            + self.right_margin.len()
            + self.terminator.len();
        let wraps = if self.auto_wrap {
            text.len() / self.adjusted_max_line_length().max(1)
        } else {
            0
        };
        text.len() + decoration * (wraps + 1) + CAPACITY_SLACK
    }
}
