//! Stream processing of whole documents.

use crate::{
    error::WrapError,
    fields::blank_lines,
    wrap::{LineConfig, LineState},
};

/// Build every line of `lines` as one logical line into a single buffer.
///
/// State is threaded from line to line. Empty input lines are kept as bare
/// blank output lines rather than being folded into their neighbours.
/// Whitespace-only lines are written with their margins like any other text.
///
/// # Errors
/// Returns the first error raised while building a line.
///
/// # Examples
///
/// ```
/// use marginwrap::{LineConfig, wrap_lines};
///
/// let config = LineConfig::builder().left_margin("# ").build().unwrap();
/// let out = wrap_lines(&["a".to_string(), String::new(), "b".to_string()], &config).unwrap();
/// assert_eq!(out, "# a\n\n# b\n");
/// ```
pub fn wrap_lines(lines: &[String], config: &LineConfig) -> Result<String, WrapError> {
    let mut out = String::new();
    let mut state = LineState::new();
    for line in lines {
        if line.is_empty() && !config.terminator().is_empty() {
            state = blank_lines(&mut out, 1, config.terminator())?;
            continue;
        }
        config.build_line(&mut out, line, &mut state)?;
    }
    Ok(out)
}

/// Split `text` into lines and run [`wrap_lines`] over them.
///
/// # Errors
/// Returns the first error raised while building a line.
pub fn wrap_str(text: &str, config: &LineConfig) -> Result<String, WrapError> {
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    wrap_lines(&lines, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::string_vec;

    #[test]
    fn threads_state_between_lines() {
        let config = LineConfig::builder().max_line_length(12).build().unwrap();
        let out = wrap_lines(&string_vec!["one two three four", "five"], &config).unwrap();
        assert_eq!(out, "one two\nthree four\nfive\n");
    }

    #[test]
    fn keeps_blank_lines() {
        let config = LineConfig::builder().build().unwrap();
        let out = wrap_lines(&string_vec!["a", "", "", "b"], &config).unwrap();
        assert_eq!(out, "a\n\n\nb\n");
    }

    #[test]
    fn whitespace_lines_keep_margins() {
        let config = LineConfig::builder()
            .left_margin("# ")
            .right_margin(" |")
            .build()
            .unwrap();
        let out = wrap_lines(&string_vec!["a", "   ", "", "b"], &config).unwrap();
        assert_eq!(out, "# a |\n#     |\n\n# b |\n");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let config = LineConfig::builder().build().unwrap();
        assert_eq!(wrap_str("", &config).unwrap(), "");
    }
}
