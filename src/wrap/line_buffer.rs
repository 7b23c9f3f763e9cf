//! Running line state for the emitters.
//!
//! [`LineBuffer`] borrows the caller's output `String` for the duration of one
//! build and tracks how many columns the current output line holds and
//! whether the last thing written was the terminator. Holding the only
//! mutable borrow of the buffer is what serialises builds against it.

use crate::measure::width;

/// Position state carried from one build call to the next on the same buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    /// Columns already written to the current, possibly partial, output line.
    pub current_line_length: usize,
    /// Whether the most recent write ended with the line terminator.
    pub last_write_was_terminator: bool,
}

impl LineState {
    /// State for a buffer positioned at the start of a line.
    #[must_use]
    pub fn new() -> Self { Self::default() }
}

/// Write cursor shared by the margin and body emitters.
#[derive(Debug)]
pub struct LineBuffer<'a> {
    out: &'a mut String,
    terminator: &'a str,
    terminator_width: usize,
    max_line_length: usize,
    auto_wrap: bool,
    state: LineState,
    /// Byte offset in `out` where the part of the current line written
    /// through this cursor begins.
    line_start: usize,
}

impl<'a> LineBuffer<'a> {
    /// Wrap `out`, resuming from `state`.
    pub fn new(
        out: &'a mut String,
        terminator: &'a str,
        max_line_length: usize,
        auto_wrap: bool,
        state: LineState,
    ) -> Self {
        let line_start = out.len();
        Self {
            out,
            terminator,
            terminator_width: width(terminator),
            max_line_length,
            auto_wrap,
            state,
            line_start,
        }
    }

    #[must_use]
    pub fn state(&self) -> LineState { self.state }

    #[must_use]
    pub fn current_line_length(&self) -> usize { self.state.current_line_length }

    #[must_use]
    pub fn last_write_was_terminator(&self) -> bool { self.state.last_write_was_terminator }

    #[must_use]
    pub fn auto_wrap(&self) -> bool { self.auto_wrap }

    #[must_use]
    pub fn terminator(&self) -> &str { self.terminator }

    #[must_use]
    pub fn max_line_length(&self) -> usize { self.max_line_length }

    /// Columns left on the current line once the terminator is reserved, or
    /// `None` if the line has already overflowed.
    #[must_use]
    pub fn current_room(&self) -> Option<usize> {
        self.max_line_length
            .checked_sub(self.state.current_line_length)?
            .checked_sub(self.terminator_width)
    }

    /// Columns available on a fresh line once the terminator is reserved.
    #[must_use]
    pub fn fresh_room(&self) -> Option<usize> {
        self.max_line_length.checked_sub(self.terminator_width)
    }

    /// Returns `true` when the current line holds exactly `s`, written
    /// through this cursor.
    #[must_use]
    pub fn line_is_only(&self, s: &str) -> bool {
        &self.out[self.line_start..] == s && self.state.current_line_length == width(s)
    }

    /// Append `s`, updating the position state.
    ///
    /// Terminators embedded in `s` restart the column count after the last
    /// one, so verbatim writes keep the state accurate.
    pub fn push(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let before = self.out.len();
        self.out.push_str(s);
        let last_break = if self.terminator.is_empty() {
            None
        } else {
            s.rfind(self.terminator)
        };
        match last_break {
            Some(idx) => {
                let after = idx + self.terminator.len();
                self.state.current_line_length = width(&s[after..]);
                self.state.last_write_was_terminator = after == s.len();
                self.line_start = before + after;
            }
            None => {
                self.state.current_line_length += width(s);
                self.state.last_write_was_terminator = false;
            }
        }
    }

    /// Close the current line.
    ///
    /// The terminator is skipped when it was the last thing written, so two
    /// terminators never appear back to back. The column count resets either
    /// way.
    pub fn terminate(&mut self) {
        if !self.terminator.is_empty() && !self.state.last_write_was_terminator {
            self.out.push_str(self.terminator);
            self.state.last_write_was_terminator = true;
        }
        self.state.current_line_length = 0;
        self.line_start = self.out.len();
    }

    /// Close the current line only if it holds anything.
    pub fn break_line(&mut self) {
        if self.state.current_line_length > 0 {
            self.terminate();
        }
    }
}
