//! Error types for the build-number pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using our custom Error
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Output directory is missing; nothing may be read or written.
    #[error("output directory {path} does not exist")]
    MissingOutputDir { path: PathBuf },

    /// The `-t` token is not one of the supported dialects.
    #[error("unsupported output type `{0}` (expected C, C++ or C#)")]
    UnsupportedType(String),

    /// Counter file exists but could not be read.
    #[error("failed to read counter file {path}")]
    CounterRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Counter file could not be written back.
    #[error("failed to update counter file {path}")]
    CounterWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Generated source artifact could not be created or written.
    #[error("failed to write artifact {path}")]
    Emit {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Process exit status for this failure.
    ///
    /// Usage errors never reach the taxonomy; clap terminates with its own
    /// status (2) first. Success is 0.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingOutputDir { .. } | Self::UnsupportedType(_) => 3,
            Self::CounterRead { .. } | Self::CounterWrite { .. } => 4,
            Self::Emit { .. } => 5,
        }
    }
}
