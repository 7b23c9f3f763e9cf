//! File helpers for rewriting text documents.

use std::{fs, path::Path};

use crate::{error::WrapError, process::wrap_str, wrap::LineConfig};

/// Read `path` and return its lines built with `config`.
///
/// # Errors
/// Returns an error if reading the file or building a line fails.
pub fn wrap_file(path: &Path, config: &LineConfig) -> Result<String, WrapError> {
    let text = fs::read_to_string(path)?;
    wrap_str(&text, config)
}

/// Rewrite a file in place with its lines built with `config`.
///
/// # Errors
/// Returns an error if reading or writing the file fails or a line cannot be
/// built.
pub fn rewrite(path: &Path, config: &LineConfig) -> Result<(), WrapError> {
    let fixed = wrap_file(path, config)?;
    fs::write(path, fixed)?;
    Ok(())
}
