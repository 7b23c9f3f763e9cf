//! Writing left and right margins.
//!
//! A margin normally lands on the current line as-is. When auto-wrap is on and
//! the margin is wider than the room left on the line, it is itself cut
//! across lines: every full fragment is closed with the terminator and the
//! remainder is left open for the next write.

use std::cmp::Ordering;

use tracing::warn;

use super::line_buffer::LineBuffer;
use crate::measure::{split_at_width, width};

/// Write `margin` to `line`.
///
/// Returns the column count of the current line after the write. An empty
/// margin is a no-op.
pub fn write_margin(line: &mut LineBuffer<'_>, margin: &str) -> usize {
    if margin.is_empty() {
        return line.current_line_length();
    }
    if !line.auto_wrap() {
        line.push(margin);
        return line.current_line_length();
    }

    let Some(mut room) = line.current_room() else {
        warn!(
            current_line_length = line.current_line_length(),
            max_line_length = line.max_line_length(),
            "line overflowed before margin; closing it after the margin"
        );
        line.push(margin);
        line.terminate();
        return line.current_line_length();
    };

    let mut rest = margin;
    loop {
        match width(rest).cmp(&room) {
            Ordering::Less => {
                line.push(rest);
                break;
            }
            Ordering::Equal => {
                line.push(rest);
                line.terminate();
                break;
            }
            Ordering::Greater => {
                let fresh = line.fresh_room().unwrap_or(0);
                if fresh == 0 {
                    warn!(
                        max_line_length = line.max_line_length(),
                        "no room for margin text on any line; writing it unwrapped"
                    );
                    line.push(rest);
                    break;
                }
                if room == 0 {
                    line.terminate();
                    room = fresh;
                    continue;
                }
                let (head, tail) = split_at_width(rest, room);
                line.push(head);
                line.terminate();
                rest = tail;
                room = fresh;
            }
        }
    }
    line.current_line_length()
}

/// Write a right margin, reporting whether the write ended with the
/// terminator so the caller can avoid closing the line twice.
pub fn write_right_margin(line: &mut LineBuffer<'_>, margin: &str) -> (usize, bool) {
    let length = write_margin(line, margin);
    (length, line.last_write_was_terminator())
}
