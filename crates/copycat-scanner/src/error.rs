//! Error types for the copycat scanner

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur during scanning
#[derive(Error, Debug)]
pub enum ScanError {
    /// IO error while reading an extensions directory
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse an extension manifest
    #[error("Failed to parse manifest {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest is missing a field needed to build the extension id
    #[error("Missing required field '{field}' in {path}")]
    MissingField { path: PathBuf, field: &'static str },

    /// Home directory not found
    #[error("Home directory not found")]
    HomeNotFound,
}

impl ScanError {
    /// Get the error code for CLI responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IO_ERROR",
            Self::ManifestParse { .. } => "PARSE_ERROR",
            Self::MissingField { .. } => "VALIDATION_ERROR",
            Self::HomeNotFound => "HOME_NOT_FOUND",
        }
    }
}
