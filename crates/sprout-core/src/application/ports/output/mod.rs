//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sprout-adapters` crate provides the filesystem and renderer
//! implementations; the CLI provides the terminal prompter.

use std::path::Path;

use crate::domain::{TemplateData, TemplateId};
use crate::error::SproutResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sprout_adapters::filesystem::LocalFilesystem` (production)
/// - `sprout_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Every method takes a path already joined onto the project root.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories. No-op if present.
    fn create_dir_all(&self, path: &Path) -> SproutResult<()>;

    /// Read a whole file. The bytes need not be UTF-8.
    fn read_file(&self, path: &Path) -> SproutResult<Vec<u8>>;

    /// Create or truncate a file and write `content` to it.
    fn write_file(&self, path: &Path, content: &[u8]) -> SproutResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> SproutResult<()>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `sprout_adapters::renderer::HandlebarsRenderer` (bundled templates)
pub trait TemplateRenderer: Send + Sync {
    /// Render one bundled template against a flat field record.
    ///
    /// # Errors
    /// - `TemplateNotFound`: the bundle has no template for `template`
    /// - `RenderingFailed`: parse error, or a field the data does not define
    fn render(&self, template: TemplateId, data: &TemplateData) -> SproutResult<String>;
}

/// Validator handed to [`Prompter::input`]; `Err` carries the inline message.
pub type InputValidator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// Port for the interactive conversation with the user.
///
/// Implemented by:
/// - `sprout_cli::prompt::DialoguerPrompter` (terminal)
/// - scripted prompters in tests
///
/// Implementations must re-ask `input` until `validate` accepts the answer;
/// only I/O failures (closed stream, no terminal) are returned as errors.
pub trait Prompter {
    /// Single-select menu. Returns the index of the chosen item.
    fn select(&self, prompt: &str, items: &[&str]) -> SproutResult<usize>;

    /// Free-text input, optionally pre-filled with an editable default.
    fn input(
        &self,
        prompt: &str,
        default: Option<&str>,
        validate: InputValidator<'_>,
    ) -> SproutResult<String>;

    /// Yes/no question. Defaults to "no".
    fn confirm(&self, prompt: &str) -> SproutResult<bool>;
}
