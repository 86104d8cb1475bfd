//! Error types for identity validation, duplication and the duplicate flow

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for duplication operations
pub type DuplicateResult<T> = Result<T, DuplicateError>;

/// The identity component a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    AuthorId,
    PackageId,
    Version,
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthorId => write!(f, "author ID"),
            Self::PackageId => write!(f, "package ID"),
            Self::Version => write!(f, "version"),
        }
    }
}

/// A rejected identity input. Recoverable: the operator is asked again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The {0} cannot be empty.")]
    Empty(IdentityField),

    #[error("Invalid version slug: '{0}'.")]
    InvalidVersion(String),

    #[error("The {field} cannot contain {found:?}.")]
    UnsafeCharacter { field: IdentityField, found: char },

    #[error("The {field} cannot be '{value}'.")]
    ReservedName { field: IdentityField, value: String },
}

impl ValidationError {
    /// The field that failed validation
    #[must_use]
    pub fn field(&self) -> IdentityField {
        match self {
            Self::Empty(field)
            | Self::UnsafeCharacter { field, .. }
            | Self::ReservedName { field, .. } => *field,
            Self::InvalidVersion(_) => IdentityField::Version,
        }
    }
}

/// Errors that abort a copy job
#[derive(Debug, Error)]
pub enum DuplicateError {
    /// A path the copy needs does not exist
    #[error("Not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Insufficient permissions to read or write a path
    #[error("Permission denied: {path}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other filesystem failure
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source root, or an existing destination, is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The destination folder name is not a single plain path component
    #[error("Invalid target folder name: '{0}'")]
    InvalidTargetName(String),

    /// The destination would be created inside the tree being copied
    #[error("Destination {destination} is inside the source {origin}")]
    DestinationInsideSource { origin: PathBuf, destination: PathBuf },
}

impl DuplicateError {
    /// Classify an I/O failure at `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source: err },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source: err },
            _ => Self::Io { path, source: err },
        }
    }

    /// Get the error code for CLI responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::PermissionDenied { .. } => "PERMISSION_DENIED",
            Self::Io { .. } => "IO_ERROR",
            Self::NotADirectory(_) => "NOT_A_DIRECTORY",
            Self::InvalidTargetName(_) => "VALIDATION_ERROR",
            Self::DestinationInsideSource { .. } => "CONFLICT",
        }
    }
}

/// Closure adapter for `map_err` that records the failing path
pub(crate) fn at(path: &Path) -> impl FnOnce(io::Error) -> DuplicateError + '_ {
    move |err| DuplicateError::from_io(path, err)
}

/// Fatal errors from the interactive duplicate flow
#[derive(Debug, Error)]
pub enum FlowError {
    /// The copy itself failed
    #[error(transparent)]
    Duplicate(#[from] DuplicateError),

    /// The copy succeeded but the folder could not be opened
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FlowError {
    /// Get the error code for CLI responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Duplicate(e) => e.code(),
            Self::Open { .. } => "OPEN_FAILED",
        }
    }
}
