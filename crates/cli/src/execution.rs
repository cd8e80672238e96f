//! Runs the classify, validate and render stages in order.

use std::io::Write;

use cat_core::arguments::classify;
use cat_core::config::HELP_TEXT;
use cat_core::error::Result;
use cat_core::render::render_files;
use cat_core::validation::{validate, Validated};
use log::debug;

/// Classifies `raw`, validates every file and option, then either prints the
/// help text or renders the files to `out`.
///
/// Nothing is written to `out` unless validation succeeds.
///
/// # Errors
///
/// Returns the first validation failure, or the first I/O failure while
/// rendering. Files after a failing one are not rendered.
pub fn execute<I, S, W>(raw: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    W: Write,
{
    let arguments = classify(raw);

    match validate(&arguments)? {
        Validated::Help => {
            writeln!(out, "{HELP_TEXT}")?;
            out.flush()?;
            Ok(())
        }
        Validated::Render => {
            debug!("Validation passed for {} file(s)", arguments.files.len());
            render_files(&arguments.files, &arguments.options, out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cat_core::error::Error;
    use tempfile::NamedTempFile;

    fn sample_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "foo\n\nbar").unwrap();
        file
    }

    #[test]
    fn test_execute_renders_numbered_file() {
        let file = sample_file();
        let mut out = Vec::new();

        execute(["-n", file.path().to_str().unwrap()], &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0 foo\n1 \n2 bar\n");
    }

    #[test]
    fn test_execute_help_prints_only_help() {
        let file = sample_file();
        let mut out = Vec::new();

        execute([file.path().to_str().unwrap(), "-b", "-h"], &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), format!("{HELP_TEXT}\n"));
    }

    #[test]
    fn test_execute_missing_file_writes_nothing() {
        let mut out = Vec::new();

        let result = execute(["--help", "/definitely/not/here"], &mut out);

        assert!(matches!(result, Err(Error::FileNotFound { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_execute_no_arguments_writes_nothing() {
        let mut out = Vec::new();
        execute(Vec::<String>::new(), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
