//! Parsing terminators given on the command line.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

static ESCAPE_RE: LazyLock<Regex> =
    lazy_regex!(r"\\([nrt0\\])", "terminator escape regex should compile");

/// Expand `\n`, `\r`, `\t`, `\0` and `\\` escapes in `raw`.
///
/// # Examples
///
/// ```
/// use marginwrap::unescape_terminator;
///
/// assert_eq!(unescape_terminator(r"\r\n"), "\r\n");
/// assert_eq!(unescape_terminator("<br>"), "<br>");
/// ```
#[must_use]
pub fn unescape_terminator(raw: &str) -> Cow<'_, str> {
    ESCAPE_RE.replace_all(raw, |caps: &Captures<'_>| match &caps[1] {
        "n" => "\n",
        "r" => "\r",
        "t" => "\t",
        "0" => "\0",
        _ => "\\",
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(r"\n", "\n")]
    #[case(r"\r\n", "\r\n")]
    #[case(r"a\tb", "a\tb")]
    #[case(r"\\n", "\\n")]
    #[case("plain", "plain")]
    fn expands_escapes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(unescape_terminator(raw), expected);
    }

    #[test]
    fn plain_input_is_borrowed() {
        assert!(matches!(unescape_terminator("|"), Cow::Borrowed("|")));
    }
}
