//! Command-line argument capture.
//!
//! `clap` only collects the raw tokens here. Its built-in help and version
//! flags are disabled and hyphen values are allowed, so `-h`, `-n` or an
//! unknown `-x` all reach [`cat_core::arguments::classify`] untouched.
//! [`Args::parse_tokens`] puts its own `--` in front of the user's tokens so
//! that clap never consumes a `--` the user typed.

use std::ffi::OsString;

use clap::Parser;

/// Command-line arguments for the `cat` binary.
///
/// # Examples
///
/// ```rust
/// use cat_cli::cli_args::Args;
///
/// let args = Args::parse_tokens(["-n", "--", "notes.txt"]);
/// assert_eq!(args.arguments, vec!["-n", "--", "notes.txt"]);
/// ```
#[derive(Parser, Debug)]
#[command(
    name = "cat",
    term_width = 0,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Options and files, in any order.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub arguments: Vec<String>,
}

impl Args {
    /// Parses the user's tokens, program name excluded.
    ///
    /// Every token ends up in [`Args::arguments`] in its original position,
    /// including any `--`.
    pub fn parse_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let escaped = [OsString::from("cat"), OsString::from("--")]
            .into_iter()
            .chain(tokens.into_iter().map(Into::into));
        Self::parse_from(escaped)
    }
}
