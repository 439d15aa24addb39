//! Domain-level errors.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Entity name cannot be empty")]
    EmptyName,

    #[error("Invalid entity name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec![
                "Provide an entity name, e.g. stubgen make:repository User".into(),
            ],
            Self::InvalidName { name, reason } => vec![
                format!("Entity name '{}' is invalid: {}", name, reason),
                "Use a PascalCase identifier: a letter followed by letters, digits or underscores"
                    .into(),
                "Examples: User, Payment, OrderItem".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName | Self::InvalidName { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
