//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the resulting
//! [`OutputLayout`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--no-color`, handled at the call-site, not here)
//! 2. The file given with `--config` (must exist)
//! 3. `.sprout.toml` in the project root (optional)
//! 4. Built-in defaults (always present)
//!
//! ```toml
//! [layout]
//! source_root = "src"
//! collections_dir = "collections"
//! globals_dir = "globals"
//! extension = "ts"
//!
//! [output]
//! no_color = false
//! ```

use std::path::{Component, Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use sprout_core::domain::OutputLayout;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Project-local config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = ".sprout.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Where generated files go.
    pub layout: LayoutConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub source_root: PathBuf,
    pub collections_dir: PathBuf,
    pub globals_dir: PathBuf,
    pub extension: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let layout = OutputLayout::default();
        Self {
            source_root: layout.source_root,
            collections_dir: layout.collections_dir,
            globals_dir: layout.globals_dir,
            extension: layout.extension,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration for `project_root`, layering an explicit file last.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(|e| CliError::ConfigError {
            message: "Failed to build default configuration".into(),
            source: Some(Box::new(e)),
        })?;

        let project_file = project_root.join(PROJECT_CONFIG_FILE);
        debug!(path = %project_file.display(), exists = project_file.is_file(), "Project config");

        let mut builder = Config::builder()
            .add_source(defaults)
            .add_source(file_source(&project_file).required(false));

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(CliError::ConfigError {
                    message: format!("Config file not found: {}", path.display()),
                    source: None,
                });
            }
            debug!(path = %path.display(), "Explicit config");
            builder = builder.add_source(file_source(path).required(true));
        }

        let config: Self = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// The layout handed to the generator.
    pub fn output_layout(&self) -> OutputLayout {
        OutputLayout {
            source_root: self.layout.source_root.clone(),
            collections_dir: self.layout.collections_dir.clone(),
            globals_dir: self.layout.globals_dir.clone(),
            extension: String::new(),
        }
        .with_extension(&self.layout.extension)
    }

    fn validate(&self) -> CliResult<()> {
        let dirs = [
            ("layout.source_root", &self.layout.source_root),
            ("layout.collections_dir", &self.layout.collections_dir),
            ("layout.globals_dir", &self.layout.globals_dir),
        ];

        for (key, dir) in dirs {
            if dir.is_absolute() {
                return Err(CliError::ConfigError {
                    message: format!("{key} must be relative, got {}", dir.display()),
                    source: None,
                });
            }
            if dir.components().any(|c| c == Component::ParentDir) {
                return Err(CliError::ConfigError {
                    message: format!(
                        "{key} must stay inside the project, got {}",
                        dir.display()
                    ),
                    source: None,
                });
            }
        }

        if self.layout.extension.contains(['/', '\\']) {
            return Err(CliError::ConfigError {
                message: format!(
                    "layout.extension must not contain a path separator, got '{}'",
                    self.layout.extension
                ),
                source: None,
            });
        }

        Ok(())
    }
}

fn file_source(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}
