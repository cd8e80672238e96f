//! Cat Core Library
//!
//! This crate provides the core of a minimal `cat` utility: it splits command-line
//! tokens into options and files, validates both, and streams files to an output
//! sink with optional line numbering.
//!
//! # Key Features
//!
//! - **Argument Classification**: Tokens starting with `-` are options, everything else is a file
//! - **Validation**: Files must exist and options must belong to a fixed vocabulary
//! - **Line Numbering**: `-n` labels every line, `-b` labels only non-empty lines and wins over `-n`
//! - **Error Handling**: A single error type naming the offending file, option or line
//!
//! # Examples
//!
//! ```no_run
//! use cat_core::arguments::classify;
//! use cat_core::render::render_files;
//! use cat_core::validation::{validate, Validated};
//!
//! let arguments = classify(["-n", "notes.txt"]);
//! if validate(&arguments)? == Validated::Render {
//!     render_files(&arguments.files, &arguments.options, &mut std::io::stdout().lock())?;
//! }
//! # Ok::<(), cat_core::error::Error>(())
//! ```

pub mod arguments;
pub mod config;
pub mod error;
pub mod options;
pub mod render;
pub mod validation;
