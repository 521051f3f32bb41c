//! `sprout generate` — the interactive generator menu.

use tracing::{info, instrument};

use sprout_adapters::{HandlebarsRenderer, LocalFilesystem};
use sprout_core::application::{GenerateService, GenerationOutcome, Prompter};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Run one generator chosen from the menu.
///
/// Dispatch sequence:
/// 1. Build the adapters (bundled templates, local filesystem, terminal prompter)
/// 2. Let `GenerateService` drive the menu, name prompts and writes
/// 3. Report each created file
#[instrument(skip_all, fields(root = %global.project_dir.display()))]
pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let prompter = build_prompter(&global, &config)?;
    let layout = config.output_layout();

    let service = GenerateService::new(
        Box::new(HandlebarsRenderer::builtin()),
        Box::new(LocalFilesystem::new()),
        prompter,
    )
    .with_layout(layout)
    .with_project_root(&global.project_dir);

    match service.run().map_err(CliError::from)? {
        GenerationOutcome::Exited => {
            info!("Exit selected");
        }
        GenerationOutcome::Created { files } => {
            for file in &files {
                output.created(file)?;
            }
            info!(files = files.len(), "Generation completed");
        }
    }

    Ok(())
}

#[cfg(feature = "interactive")]
fn build_prompter(global: &GlobalArgs, config: &AppConfig) -> CliResult<Box<dyn Prompter>> {
    let no_color = global.no_color || config.output.no_color;
    Ok(Box::new(crate::prompt::DialoguerPrompter::new(no_color)))
}

#[cfg(not(feature = "interactive"))]
fn build_prompter(_global: &GlobalArgs, _config: &AppConfig) -> CliResult<Box<dyn Prompter>> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

