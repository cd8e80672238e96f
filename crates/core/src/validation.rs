//! Existence checks for files and vocabulary checks for options.
//!
//! Files are always checked before options, so a run with both a missing file
//! and an unknown option reports the file.

use std::fs;
use std::io::ErrorKind;

use log::{debug, info};

use crate::arguments::Arguments;
use crate::error::{Error, Result};
use crate::options::CatOption;

/// What the caller should do once validation succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validated {
    /// Render every file.
    Render,
    /// Print the help text and stop without rendering.
    Help,
}

/// Returns `false` only when the filesystem reports that nothing exists at
/// `path`. Any other stat failure counts as existing and surfaces later as an
/// open error.
#[must_use]
pub fn file_exists(path: &str) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() != ErrorKind::NotFound,
    }
}

/// Fails on the first file that does not exist. Files after it are not checked.
pub fn validate_files(files: &[String]) -> Result<()> {
    for file in files {
        if !file_exists(file) {
            return Err(Error::file_not_found(file.clone()));
        }
        debug!("File `{file}` exists");
    }

    Ok(())
}

/// Checks options in order. The first unrecognized token is an error; the
/// first help option ends validation, so options after it are not inspected.
pub fn validate_options(options: &[String]) -> Result<Validated> {
    for token in options {
        let Some(option) = CatOption::parse(token) else {
            return Err(Error::InvalidOption(token.clone()));
        };

        debug!("Option `{token}` recognized as {option}");

        if option == CatOption::Help {
            info!("Help requested, nothing will be rendered");
            return Ok(Validated::Help);
        }
    }

    Ok(Validated::Render)
}

/// Validates files first, then options.
pub fn validate(arguments: &Arguments) -> Result<Validated> {
    validate_files(&arguments.files)?;
    validate_options(&arguments.options)
}
