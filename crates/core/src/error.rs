use log::error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File '{}' does not exist", .path)]
    FileNotFound { path: String },

    #[error("{} is not a valid option.", .0)]
    InvalidOption(String),

    #[error("IO error {} file at path `{}`: {}", .action, .path, .original)]
    Io {
        action: String,
        path: String,
        original: std::io::Error,
    },

    #[error("IO error reading file at path `{}` on line {}: {}", .path, .line, .original)]
    Read {
        path: String,
        line: usize,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn file_not_found(path: String) -> Self {
        Self::FileNotFound { path }
    }

    pub fn io_error(action: String, path: String, original: std::io::Error) -> Self {
        error!("Failed {action} `{path}`: {original}");
        Self::Io {
            action,
            path,
            original,
        }
    }

    pub fn read_error(path: String, line: usize, original: std::io::Error) -> Self {
        error!("Failed reading `{path}` at line {line}: {original}");
        Self::Read {
            path,
            line,
            original,
        }
    }
}
