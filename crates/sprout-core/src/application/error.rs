//! Application layer errors.
//!
//! These errors represent failures in orchestration, not naming rules.
//! Naming errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while rendering, prompting or writing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The template bundle does not contain the requested template.
    #[error("Template not found: {template}")]
    TemplateNotFound { template: String },

    /// Template parsing or rendering failed.
    #[error("Template rendering failed for {template}: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The interactive prompt could not be shown or read.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// The user declined to overwrite existing files.
    #[error("Overwrite declined for {}", display_paths(.paths))]
    OverwriteDeclined { paths: Vec<PathBuf> },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { template } => vec![
                format!("'{}' is missing from the bundled templates", template),
                "This build is incomplete; reinstall sprout".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("The bundled template '{}' is broken", template),
                "Please report this issue with the output of -vv".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Run sprout from the project root, or pass --project-dir".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "sprout generate is interactive and needs a terminal".into(),
                "Run it directly in a shell rather than through a pipe".into(),
            ],
            Self::OverwriteDeclined { .. } => vec!["No changes were made".into()],
            Self::RollbackFailed { path, .. } => vec![
                format!("'{}' may be left in a partially written state", path.display()),
                "Inspect it with your version control tool and restore it".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::OverwriteDeclined { .. } => ErrorCategory::Cancelled,
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::PromptFailed { .. }
            | Self::RollbackFailed { .. } => ErrorCategory::Internal,
        }
    }
}
