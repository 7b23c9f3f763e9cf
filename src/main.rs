use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use marginwrap::{LineConfig, rewrite, unescape_terminator, wrap_file, wrap_str};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Wrap text to a fixed width with left and right margins")]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    #[command(flatten)]
    layout: LayoutOpts,
    /// Text files to wrap
    files: Vec<PathBuf>,
}

#[derive(clap::Args)]
struct LayoutOpts {
    /// Maximum line length, terminator included
    #[arg(long = "width", default_value_t = marginwrap::wrap::DEFAULT_MAX_LINE_LENGTH)]
    width: usize,
    /// Margin written before every line
    #[arg(long = "left", default_value = "")]
    left: String,
    /// Margin written after every line
    #[arg(long = "right", default_value = "")]
    right: String,
    /// Margin for wrapped continuation lines (defaults to --left)
    #[arg(long = "continuation")]
    continuation: Option<String>,
    /// Line terminator, `\n` by default; accepts \n, \r and \t escapes
    #[arg(long = "terminator")]
    terminator: Option<String>,
    /// Do not break long lines
    #[arg(long = "no-wrap")]
    no_wrap: bool,
    /// Do not close lines unless --terminator is given explicitly
    #[arg(long = "no-termination")]
    no_termination: bool,
}

impl LayoutOpts {
    fn config(&self) -> anyhow::Result<LineConfig> {
        let mut builder = LineConfig::builder()
            .max_line_length(self.width)
            .left_margin(self.left.as_str())
            .right_margin(self.right.as_str())
            .auto_wrap(!self.no_wrap)
            .line_termination(!self.no_termination)
            .error_prefix("marginwrap");
        if let Some(terminator) = &self.terminator {
            builder = builder.terminator(unescape_terminator(terminator));
        }
        if let Some(continuation) = &self.continuation {
            builder = builder.continuation_margin(continuation.as_str());
        }
        builder.build().context("invalid line layout")
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Entry point for the command-line tool that wraps text with margins.
///
/// Reads standard input when no files are given, otherwise wraps each file
/// (in parallel) and prints the results in argument order, or rewrites them
/// in place with `--in-place`.
///
/// # Examples
///
/// ```sh
/// # Quote a file at 60 columns
/// marginwrap --width 60 --left "> " notes.txt
///
/// # Wrap standard input with CRLF line endings
/// cat notes.txt | marginwrap --terminator '\r\n'
/// ```
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.layout.config()?;

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        print!("{}", wrap_str(&input, &config)?);
        return Ok(());
    }

    if cli.in_place {
        cli.files.par_iter().try_for_each(|path| {
            rewrite(path, &config).with_context(|| format!("failed to rewrite {}", path.display()))
        })?;
        return Ok(());
    }

    let outputs = cli
        .files
        .par_iter()
        .map(|path| {
            wrap_file(path, &config).with_context(|| format!("failed to wrap {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    for out in outputs {
        print!("{out}");
    }
    Ok(())
}
