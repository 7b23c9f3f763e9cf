//! Writing body text between the margins.
//!
//! Text is written one terminator-delimited segment at a time, so line breaks
//! already present in the text survive. Each segment then takes the first
//! layout that applies:
//!
//! 1. too long for the rest of the current line plus one fresh line: re-split
//!    into a margined block, every fragment carrying both margins;
//! 2. fits before the right margin: written in place;
//! 3. fills the line exactly: written, and the line closed if no right margin
//!    is pending;
//! 4. whitespace only: written verbatim with the right margin, never wrapped;
//! 5. fits on a fresh margined line: the current line is closed first;
//! 6. otherwise hard-wrapped across lines, re-applying the margins.

use tracing::{debug, warn};

use super::{line_buffer::LineBuffer, splitter};
use crate::{
    error::{ErrorContext, WrapError},
    measure::{is_blank, split_at_width, width},
};

/// How the body left the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEnd {
    /// The line is still open and the right margin has yet to be written.
    Open,
    /// The right margin has already been written; at most the terminator
    /// is still missing.
    Closed,
}

/// Margins applied to lines the body starts or closes itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyMargins<'a> {
    /// Margin the caller wrote at the start of the first line.
    pub left: &'a str,
    /// Margin for every further line the body starts.
    pub continuation: &'a str,
    pub right: &'a str,
}

impl<'a> BodyMargins<'a> {
    /// Use `left` for continuation lines as well.
    #[must_use]
    pub fn new(left: &'a str, right: &'a str) -> Self {
        Self {
            left,
            continuation: left,
            right,
        }
    }

    fn long_line_room(&self, line: &LineBuffer<'_>) -> usize {
        let left = width(self.left).max(width(self.continuation));
        line.fresh_room()
            .unwrap_or(0)
            .saturating_sub(left + width(self.right))
    }
}

/// Write `text` to `line`.
///
/// # Errors
/// Returns an error if re-splitting an over-long segment fails.
pub fn write_text(
    line: &mut LineBuffer<'_>,
    margins: BodyMargins<'_>,
    text: &str,
    context: &ErrorContext,
) -> Result<BodyEnd, WrapError> {
    if text.is_empty() {
        return Ok(BodyEnd::Open);
    }
    if !line.auto_wrap() {
        line.push(text);
        return Ok(BodyEnd::Open);
    }

    let context = context.child("write_text");
    let terminator = line.terminator().to_owned();
    if terminator.is_empty() || !text.contains(terminator.as_str()) {
        return write_segment(line, margins, margins.left, text, &context);
    }

    // A trailing terminator is left for the caller to write when it closes the line.
    let body = text.strip_suffix(terminator.as_str()).unwrap_or(text);
    let mut end = BodyEnd::Open;
    let mut opening = margins.left;
    for (idx, segment) in body.split(terminator.as_str()).enumerate() {
        if idx > 0 {
            if end == BodyEnd::Open && !line.last_write_was_terminator() {
                line.push(margins.right);
            }
            line.terminate();
            line.push(margins.continuation);
            opening = margins.continuation;
            end = BodyEnd::Open;
        }
        if segment.is_empty() {
            continue;
        }
        end = write_segment(line, margins, opening, segment, &context)?;
    }
    Ok(end)
}

/// Lay out one segment. `opening` is the margin that started the current line.
fn write_segment(
    line: &mut LineBuffer<'_>,
    margins: BodyMargins<'_>,
    opening: &str,
    text: &str,
    context: &ErrorContext,
) -> Result<BodyEnd, WrapError> {
    let text_width = width(text);
    let Some(current_room) = line.current_room() else {
        warn!(
            current_line_length = line.current_line_length(),
            max_line_length = line.max_line_length(),
            "line overflowed before body text; closing it after the text"
        );
        line.push(text);
        line.terminate();
        return Ok(BodyEnd::Open);
    };
    let fresh_room = line.fresh_room().unwrap_or(0);
    let long_room = margins.long_line_room(line);
    let blank = is_blank(text);

    if !blank && long_room > 0 && text_width > current_room + fresh_room {
        write_block(line, margins, opening, text, long_room, context)?;
        return Ok(BodyEnd::Closed);
    }

    let text_room = current_room.saturating_sub(width(margins.right));
    if text_width < text_room {
        line.push(text);
        return Ok(BodyEnd::Open);
    }
    if text_width == text_room {
        line.push(text);
        if margins.right.is_empty() {
            line.terminate();
        }
        return Ok(BodyEnd::Open);
    }
    if blank {
        // Whitespace may overflow the line; the right margin follows unchecked.
        line.push(text);
        line.push(margins.right);
        return Ok(BodyEnd::Closed);
    }
    if text_width <= long_room {
        line.break_line();
        line.push(margins.continuation);
        line.push(text);
        return Ok(BodyEnd::Open);
    }
    Ok(hard_wrap(line, margins, opening, text, text_room, long_room))
}

/// Re-split `text` to `long_room` columns and write every fragment as a
/// complete line carrying both margins.
fn write_block(
    line: &mut LineBuffer<'_>,
    margins: BodyMargins<'_>,
    opening: &str,
    text: &str,
    long_room: usize,
    context: &ErrorContext,
) -> Result<(), WrapError> {
    let fragments = splitter::split_text(text, long_room, line.terminator(), context)?;
    debug!(
        fragments = fragments.len(),
        width = long_room,
        "writing body text as a margined block"
    );

    // A line holding only its opening margin takes the first fragment.
    let mut left = if line.line_is_only(opening) {
        ""
    } else {
        line.break_line();
        margins.continuation
    };
    for fragment in &fragments {
        line.push(left);
        line.push(fragment);
        line.push(margins.right);
        line.terminate();
        left = margins.continuation;
    }
    Ok(())
}

fn hard_wrap(
    line: &mut LineBuffer<'_>,
    margins: BodyMargins<'_>,
    opening: &str,
    text: &str,
    first_room: usize,
    long_room: usize,
) -> BodyEnd {
    if long_room == 0 {
        warn!(
            max_line_length = line.max_line_length(),
            "margins leave no room for body text; writing it unwrapped"
        );
        line.push(text);
        return BodyEnd::Open;
    }
    debug!(width = long_room, "hard-wrapping body text");

    let mut rest = text.trim_start();
    let mut room = first_room;
    let mut line_margin = opening;
    loop {
        let rest_width = width(rest);
        if rest_width < room {
            line.push(rest);
            return BodyEnd::Open;
        }
        if rest_width == room {
            line.push(rest);
            if margins.right.is_empty() {
                line.terminate();
            }
            return BodyEnd::Open;
        }

        let (head, tail) = match splitter::cut_at_boundary(rest, room) {
            Some(cut) => cut,
            None if !line.line_is_only(line_margin) => {
                // Start the word on a fresh line rather than splitting it.
                line.break_line();
                line.push(margins.continuation);
                line_margin = margins.continuation;
                room = long_room;
                continue;
            }
            None => {
                let (head, tail) = split_at_width(rest, room);
                (head, tail.trim_start())
            }
        };
        line.push(head);
        line.push(margins.right);
        line.terminate();
        if tail.is_empty() {
            return BodyEnd::Closed;
        }
        line.push(margins.continuation);
        line_margin = margins.continuation;
        rest = tail;
        room = long_room;
    }
}
