//! Streams files to an output sink, applying the line numbering policy.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use log::{debug, info};

use crate::config::FIRST_LINE_NUMBER;
use crate::error::{Error, Result};
use crate::options::CatOption;

/// How lines of a file are labelled during one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberingMode {
    /// Lines pass through unmodified.
    #[default]
    None,
    /// Every line is labelled.
    Number,
    /// Only non-empty lines are labelled, and only they advance the counter.
    NumberNonBlank,
}

impl NumberingMode {
    /// Derives the mode from the option tokens. Number-nonblank takes
    /// precedence over number regardless of order; unknown tokens are ignored.
    #[must_use]
    pub fn from_options(options: &[String]) -> Self {
        let mut number = false;
        let mut number_non_blank = false;

        for option in options.iter().filter_map(|token| CatOption::parse(token)) {
            match option {
                CatOption::Number => number = true,
                CatOption::NumberNonBlank => number_non_blank = true,
                CatOption::Help => {}
            }
        }

        if number_non_blank {
            NumberingMode::NumberNonBlank
        } else if number {
            NumberingMode::Number
        } else {
            NumberingMode::None
        }
    }
}

/// Per-file counter. A fresh one is created for every file.
#[derive(Debug)]
struct LineNumbering {
    mode: NumberingMode,
    next: usize,
}

impl LineNumbering {
    fn new(mode: NumberingMode) -> Self {
        Self {
            mode,
            next: FIRST_LINE_NUMBER,
        }
    }

    /// Returns the label for `line`, advancing the counter when one is given.
    fn label(&mut self, line: &[u8]) -> Option<usize> {
        let labelled = match self.mode {
            NumberingMode::None => false,
            NumberingMode::Number => true,
            NumberingMode::NumberNonBlank => !line.is_empty(),
        };

        if !labelled {
            return None;
        }

        let label = self.next;
        self.next += 1;
        Some(label)
    }
}

/// Strips the line terminator (`\n`, and a `\r` before it or at end of file).
fn trim_line_ending(mut line: &[u8]) -> &[u8] {
    if let Some(rest) = line.strip_suffix(b"\n") {
        line = rest;
    }
    if let Some(rest) = line.strip_suffix(b"\r") {
        line = rest;
    }
    line
}

/// Renders one file to `out`, flushing once after its last line.
///
/// The file handle is owned by this call and closed on every return path.
/// Every written line is terminated with `\n` whatever the source used.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened, [`Error::Read`] if
/// reading fails part way, and [`Error::Stdio`] if writing to `out` fails.
pub fn render_file<W: Write + ?Sized>(
    path: &str,
    mode: NumberingMode,
    out: &mut W,
) -> Result<()> {
    let file = File::open(path)
        .map_err(|e| Error::io_error("opening".to_string(), path.to_string(), e))?;
    let mut reader = BufReader::new(file);
    let mut writer = BufWriter::new(out);
    let mut numbering = LineNumbering::new(mode);

    let mut buffer = Vec::new();
    let mut line_index = 0;
    loop {
        buffer.clear();
        let read = reader
            .read_until(b'\n', &mut buffer)
            .map_err(|e| Error::read_error(path.to_string(), line_index + 1, e))?;
        if read == 0 {
            break;
        }
        line_index += 1;

        let line = trim_line_ending(&buffer);
        if let Some(label) = numbering.label(line) {
            write!(writer, "{label} ")?;
        }
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    debug!("Rendered {line_index} lines from `{path}` with {mode:?}");

    Ok(())
}

/// Renders each file in order, stopping at the first error.
///
/// The numbering mode is derived from `options` for each file and the counter
/// restarts for every file.
///
/// # Errors
///
/// Returns the first error from [`render_file`]. Files after the failing one
/// are never opened.
pub fn render_files<W: Write + ?Sized>(
    files: &[String],
    options: &[String],
    out: &mut W,
) -> Result<()> {
    info!("Rendering {} file(s)", files.len());

    for file in files {
        let mode = NumberingMode::from_options(options);
        render_file(file, mode, &mut *out)?;
    }

    Ok(())
}
