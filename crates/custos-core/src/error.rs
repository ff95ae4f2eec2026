//! Error types for custos.

use std::path::{Path, PathBuf};

/// Errors that can occur while building or configuring an access list.
///
/// Lookups never produce errors: a missing subject or resource is reported
/// as `false` or `None` by the container. Errors are reserved for malformed
/// input at construction time and for configuration problems.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An access level token was neither `allowed` nor `forbidden`.
    #[error("Invalid access level specifier: {token}")]
    InvalidAccessSpecifier {
        /// The rejected token
        token: String,
    },

    /// A subject id was requested before one was assigned.
    #[error("Invalid subject: no id has been assigned")]
    InvalidSubject,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A file could not be read or written.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience `Result` type alias for custos operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an invalid access specifier error for the given token.
    pub fn invalid_access<S: Into<String>>(token: S) -> Self {
        Error::InvalidAccessSpecifier {
            token: token.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error together with the path it happened on.
    pub fn io_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns whether this error was caused by malformed caller input.
    ///
    /// Client errors will fail again on retry with the same input; the
    /// remaining variants depend on the environment (files, configuration).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::InvalidAccessSpecifier { .. } => true,
            Error::InvalidSubject => true,
            Error::Config { .. } => false,
            Error::Io { .. } => false,
        }
    }
}
