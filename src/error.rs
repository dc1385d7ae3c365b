//! Error type shared by the harness, the exporters and the labs.

use std::path::PathBuf;

/// Crate-wide error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Chart rendering failed for {path}: {message}")]
    Chart { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown lab '{0}'")]
    UnknownLab(String),

    #[error("No pre-generated input for size {0}")]
    MissingInput(usize),

    #[error("Verification failed: {0}")]
    Verification(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn chart(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Chart {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
