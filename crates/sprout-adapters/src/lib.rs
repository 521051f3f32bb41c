//! Infrastructure adapters for Sprout.
//!
//! This crate implements the ports defined in `sprout-core::application::ports`.
//! It contains the bundled templates and all filesystem I/O.

pub mod filesystem;
pub mod renderer;
pub mod template_catalog;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::HandlebarsRenderer;
pub use template_catalog::TemplateCatalog;
