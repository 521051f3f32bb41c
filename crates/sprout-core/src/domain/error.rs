// ============================================================================
// domain/error.rs - NAMING DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (prompt drivers keep the last message for display)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Shown inline by prompters, next to the cursor.
    #[error("can't be empty")]
    EmptyName,

    #[error("'{input}' must contain at least one letter or digit")]
    NoWordCharacters { input: String },

    // ========================================================================
    // Plan Invariants
    // ========================================================================
    #[error("Generation plan has no files")]
    EmptyPlan,

    #[error("Duplicate output path: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path leaves the project root: {path}")]
    PathEscapesProject { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec!["Type a name, for example: blog-post".into()],
            Self::NoWordCharacters { input } => vec![
                format!("'{}' only contains separators", input),
                "Names are split into words on spaces, '-', '_' and case changes".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' is absolute", path),
                "Output directories in the [layout] config section must be relative".into(),
            ],
            Self::PathEscapesProject { path } => vec![
                format!("'{}' contains '..'", path),
                "Output directories in the [layout] config section must stay inside the project"
                    .into(),
            ],
            _ => vec!["This is a bug in the generator, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName | Self::NoWordCharacters { .. } => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. } | Self::PathEscapesProject { .. } => {
                ErrorCategory::Validation
            }
            Self::EmptyPlan | Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
