//! Error types for the titlematch library
//!
//! Only failures that prevent a verdict from being produced live here: I/O,
//! YAML decoding, and file resolution. A heading that does not match its title
//! is not an error; see [`crate::core::Violation`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum TitleMatchError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File not found or invalid path
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Front matter decoded into something other than a string-keyed mapping
    #[error("Front matter is not a mapping: {reason}")]
    FrontMatterShape { reason: String },

    /// Front matter in a specific file could not be used
    #[error("Invalid front matter in {path}: {reason}")]
    InvalidFrontMatter { path: PathBuf, reason: String },

    /// Permission errors
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// File exceeds the configured size limit
    #[error("File too large: {path} ({size} bytes, limit: {limit} bytes)")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TitleMatchError>;

impl TitleMatchError {
    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new not-a-file error
    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::NotAFile { path: path.into() }
    }

    /// Create a new invalid front matter error
    pub fn invalid_front_matter(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidFrontMatter {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new front matter shape error
    pub fn front_matter_shape(reason: impl Into<String>) -> Self {
        Self::FrontMatterShape {
            reason: reason.into(),
        }
    }

    /// Create a new permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Create a new file too large error
    pub fn file_too_large(path: impl Into<PathBuf>, size: u64, limit: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            size,
            limit,
        }
    }

    /// Attach a file path to an error raised while handling that file's content.
    ///
    /// YAML errors coming out of the core carry no path; the checker uses this
    /// to turn them into [`TitleMatchError::InvalidFrontMatter`].
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Yaml(err) => Self::invalid_front_matter(path, err.to_string()),
            Self::FrontMatterShape { reason } | Self::InvalidFrontMatter { reason, .. } => {
                Self::invalid_front_matter(path, reason)
            }
            other => other,
        }
    }

    /// Whether this error concerns a single file's content rather than the environment
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Self::Yaml(_)
                | Self::FrontMatterShape { .. }
                | Self::InvalidFrontMatter { .. }
                | Self::FileTooLarge { .. }
        )
    }
}
