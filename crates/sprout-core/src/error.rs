//! Unified error handling for Sprout Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Sprout Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SproutError {
    /// Errors from the domain layer (naming rules, plan invariants).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (rendering, prompting, writing).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SproutError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in sprout".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` when the user chose to stop, as opposed to something failing.
    pub fn is_cancellation(&self) -> bool {
        self.category() == ErrorCategory::Cancelled
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Cancelled,
    Internal,
}

/// Convenient result type alias.
pub type SproutResult<T> = Result<T, SproutError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn declined_overwrite_is_cancellation() {
        let err: SproutError = ApplicationError::OverwriteDeclined {
            paths: vec![PathBuf::from("src/collections/items.ts")],
        }
        .into();
        assert!(err.is_cancellation());
    }

    #[test]
    fn filesystem_failure_is_not_cancellation() {
        let err: SproutError = ApplicationError::FilesystemError {
            path: PathBuf::from("src"),
            reason: "denied".into(),
        }
        .into();
        assert!(!err.is_cancellation());
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn empty_name_is_validation() {
        let err: SproutError = DomainError::EmptyName.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
