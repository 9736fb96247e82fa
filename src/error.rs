//! Shell Errors
//!
//! Every predictable failure of a command is a variant of [`ShellError`] and is
//! reported back to the user as text. Only [`ShellError::Io`] is treated as a
//! fault: it carries a host I/O failure that none of the reported categories
//! describe.

use std::io;
use thiserror::Error;

/// Errors raised while resolving paths or running commands.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Unknown device '{device}'")]
    UnknownDevice { device: String },

    #[error("Object '{path}' not found")]
    PathNotFound { path: String },

    #[error("Access denied to '{path}'")]
    AccessDenied { path: String },

    #[error("Cannot decode '{path}'")]
    DecodeError { path: String },

    #[error("'{path}' already exists")]
    AlreadyExists { path: String },

    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("Command '{verb}' not found. Type 'help' for available commands.")]
    UnrecognizedCommand { verb: String },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ShellError {
    pub fn not_found(path: impl ToString) -> Self {
        ShellError::PathNotFound { path: path.to_string() }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ShellError::InvalidArgument { message: message.into() }
    }

    pub fn unknown_device(device: impl Into<String>) -> Self {
        ShellError::UnknownDevice { device: device.into() }
    }

    /// Map a host I/O error for `path` onto the reported categories.
    ///
    /// Kinds without a reported counterpart become [`ShellError::Io`].
    pub fn from_io(err: io::Error, path: impl ToString) -> Self {
        let path = path.to_string();
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => {
                ShellError::PathNotFound { path }
            }
            io::ErrorKind::PermissionDenied => ShellError::AccessDenied { path },
            io::ErrorKind::InvalidData => ShellError::DecodeError { path },
            io::ErrorKind::AlreadyExists => ShellError::AlreadyExists { path },
            _ => ShellError::Io { path, source: err },
        }
    }

    /// True for outcomes that are rendered as command output rather than
    /// escaping the interpreter as faults.
    pub fn is_reported(&self) -> bool {
        !matches!(self, ShellError::Io { .. })
    }
}
