//! Application layer for Sprout.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Naming and planning rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerateService, GenerationOutcome};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, InputValidator, Prompter, TemplateRenderer};

pub use error::ApplicationError;
