//! Library for building margin-decorated, width-limited lines of text.
//!
//! The engine in [`wrap`] writes one logical line at a time (left margin,
//! body text, right margin, terminator) into a caller-owned `String`. Long
//! text is wrapped at word boundaries, every wrapped fragment keeps its
//! margins and no two terminators are ever written back to back.
//!
//! - [`wrap`]: line configuration and the margin and body emitters.
//! - [`fields`]: filler, spacer and blank-line fields.
//! - [`process`]: building whole documents line by line.
//! - [`io`]: rewriting files in place.

#[macro_use]
mod macros;

pub mod error;
pub mod fields;
pub mod io;
pub mod measure;
pub mod process;
mod terminator;
pub mod wrap;

#[doc(hidden)]
pub mod test_utils;

pub use error::{ErrorContext, WrapError};
pub use fields::{blank_lines, filler_field, spacer_field};
pub use io::{rewrite, wrap_file};
pub use process::{wrap_lines, wrap_str};
pub use terminator::unescape_terminator;
pub use wrap::{LineConfig, LineConfigBuilder, LineState, split_text};
