//! Filler, spacer and blank-line fields.
//!
//! Fillers and spacers are plain strings built here and then laid out by the
//! line engine like any other body text. Blank lines bypass the engine: they
//! are the one place where terminators are written back to back.

use crate::{
    error::{ErrorContext, WrapError},
    wrap::{LineConfig, LineState},
};

/// Upper bound for repeat counts, field lengths and blank line counts.
pub const MAX_FIELD_REPEAT: usize = 1_000_000;

/// Repeat `chars` `repeat` times.
///
/// # Errors
/// Returns [`WrapError::EmptyFiller`] for empty `chars` and
/// [`WrapError::InvalidRepeatCount`] when `repeat` is outside
/// `1..=MAX_FIELD_REPEAT`.
///
/// # Examples
///
/// ```
/// assert_eq!(marginwrap::filler_field("-=", 3).unwrap(), "-=-=-=");
/// ```
pub fn filler_field(chars: &str, repeat: usize) -> Result<String, WrapError> {
    let context = ErrorContext::root("filler_field");
    if chars.is_empty() {
        return Err(WrapError::EmptyFiller { context });
    }
    if !(1..=MAX_FIELD_REPEAT).contains(&repeat) {
        return Err(WrapError::InvalidRepeatCount {
            context,
            count: repeat,
            max: MAX_FIELD_REPEAT,
        });
    }
    Ok(chars.repeat(repeat))
}

/// A run of `length` spaces.
///
/// # Errors
/// Returns [`WrapError::InvalidFieldLength`] when `length` is outside
/// `1..=MAX_FIELD_REPEAT`.
pub fn spacer_field(length: usize) -> Result<String, WrapError> {
    if !(1..=MAX_FIELD_REPEAT).contains(&length) {
        return Err(WrapError::InvalidFieldLength {
            context: ErrorContext::root("spacer_field"),
            length,
            max: MAX_FIELD_REPEAT,
        });
    }
    Ok(" ".repeat(length))
}

/// Write `count` terminators to `out` and return the state of a fresh line.
///
/// # Errors
/// Returns [`WrapError::InvalidBlankLineCount`] when `count` is outside
/// `1..=MAX_FIELD_REPEAT`.
pub fn blank_lines(out: &mut String, count: usize, terminator: &str) -> Result<LineState, WrapError> {
    if !(1..=MAX_FIELD_REPEAT).contains(&count) {
        return Err(WrapError::InvalidBlankLineCount {
            context: ErrorContext::root("blank_lines"),
            count,
            max: MAX_FIELD_REPEAT,
        });
    }
    out.reserve(terminator.len() * count);
    for _ in 0..count {
        out.push_str(terminator);
    }
    Ok(LineState {
        current_line_length: 0,
        last_write_was_terminator: !terminator.is_empty(),
    })
}

impl LineConfig {
    /// Build a line whose body is `chars` repeated `repeat` times.
    ///
    /// # Errors
    /// Returns an error if the filler is invalid or the line cannot be built.
    pub fn build_filler_line(
        &self,
        out: &mut String,
        chars: &str,
        repeat: usize,
        state: &mut LineState,
    ) -> Result<(), WrapError> {
        let filler = filler_field(chars, repeat)?;
        self.build_line(out, &filler, state)
    }

    /// Build a line whose body is `length` spaces.
    ///
    /// # Errors
    /// Returns an error if the length is invalid or the line cannot be built.
    pub fn build_spacer_line(
        &self,
        out: &mut String,
        length: usize,
        state: &mut LineState,
    ) -> Result<(), WrapError> {
        let spacer = spacer_field(length)?;
        self.build_line(out, &spacer, state)
    }
}
