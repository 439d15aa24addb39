//! Application layer errors.
//!
//! These errors represent failures in I/O orchestration, not generation
//! logic. Generation logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A stub file was missing or unreadable at its fixed path.
    /// Fatal: the command aborts before any artifact is written.
    #[error("Failed to read stub {path}: {reason}")]
    StubRead { path: PathBuf, reason: String },

    /// An artifact write failed (missing directory, permissions, disk).
    /// Fatal: earlier successful writes in the same invocation stay in place.
    #[error("Failed to write {path}: {reason}")]
    ArtifactWrite { path: PathBuf, reason: String },

    /// Adapter-internal lock was poisoned.
    #[error("Filesystem adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StubRead { path, .. } => vec![
                format!("Stub not readable: {}", path.display()),
                "Run 'stubgen init' to create the default stub files".into(),
                "Or check --app-root points at your application directory".into(),
            ],
            Self::ArtifactWrite { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Ensure the destination directory exists (stubgen init creates it)".into(),
                "Check that you have write permissions".into(),
            ],
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StubRead { .. } => ErrorCategory::NotFound,
            Self::ArtifactWrite { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
