//! Column measurement for line construction.
//!
//! Widths follow `unicode-width`, with control characters (which it leaves
//! unmeasured) counted as a single column so terminators such as `"\r\n"`
//! occupy as many columns as they have characters.

use unicode_width::UnicodeWidthChar;

#[inline]
fn char_width(c: char) -> usize { UnicodeWidthChar::width(c).unwrap_or(1) }

/// Display width of `s` in columns.
///
/// # Examples
///
/// ```
/// assert_eq!(marginwrap::measure::width("abc"), 3);
/// assert_eq!(marginwrap::measure::width("\r\n"), 2);
/// ```
#[must_use]
pub fn width(s: &str) -> usize { s.chars().map(char_width).sum() }

/// Returns `true` when `s` is non-empty and contains only whitespace.
#[must_use]
pub fn is_blank(s: &str) -> bool { !s.is_empty() && s.chars().all(char::is_whitespace) }

/// Split `s` after the widest prefix that fits in `max` columns.
///
/// When `max` is at least one and `s` is non-empty the prefix always holds at
/// least one character, even if that character is wider than `max`, so
/// callers looping over the remainder always make progress.
#[must_use]
pub fn split_at_width(s: &str, max: usize) -> (&str, &str) {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = char_width(c);
        if used + w > max {
            if idx == 0 && max > 0 {
                let end = c.len_utf8();
                return s.split_at(end);
            }
            return s.split_at(idx);
        }
        used += w;
    }
    (s, "")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", 0)]
    #[case("hello", 5)]
    #[case("日本", 4)]
    #[case("\n", 1)]
    #[case("a\tb", 3)]
    fn measures_columns(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(width(input), expected);
    }

    #[rstest]
    #[case("abcdef", 4, "abcd", "ef")]
    #[case("abc", 10, "abc", "")]
    #[case("日本語", 3, "日", "本語")]
    #[case("日本語", 1, "日", "本語")]
    #[case("abc", 0, "", "abc")]
    fn splits_on_char_boundaries(
        #[case] input: &str,
        #[case] max: usize,
        #[case] head: &str,
        #[case] tail: &str,
    ) {
        assert_eq!(split_at_width(input, max), (head, tail));
    }

    #[test]
    fn blank_requires_content() {
        assert!(!is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank(" x "));
    }
}
