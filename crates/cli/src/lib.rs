//! Cat CLI Library
//!
//! This crate provides the command-line front end for the `cat` utility. It
//! captures raw arguments and drives the classify, validate and render stages
//! from [`cat_core`].
//!
//! # Architecture
//!
//! - [`cli_args`]: Raw argument capture via `clap`
//! - [`execution`]: The pipeline run by the binary
//!
//! # Examples
//!
//! ```bash
//! # Print a file
//! cat notes.txt
//!
//! # Number every line
//! cat -n notes.txt
//!
//! # Number only non-empty lines, across two files
//! cat --number-nonblank notes.txt todo.txt
//! ```

pub mod cli_args;
pub mod execution;
