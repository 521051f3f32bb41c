//! Generate Service - main application orchestrator.
//!
//! This service coordinates one interactive generator run:
//! 1. Ask which generator to run
//! 2. Ask for the name(s) and derive case variants
//! 3. Render every template of the plan
//! 4. Confirm overwrites, then write with rollback on failure

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Prompter, TemplateRenderer},
    },
    domain::{
        CollectionAccess, DomainValidator as validator, GenerationPlan, GeneratorKind, Name,
        NameInput, OutputLayout, pluralize,
    },
    error::{SproutError, SproutResult},
};

const MENU_PROMPT: &str = "Choose an option";
const SINGULAR_PROMPT: &str = "Name (singular)";
const PLURAL_PROMPT: &str = "Name (plural)";
const GLOBAL_PROMPT: &str = "Name";

/// How a generator run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The user picked `Exit` from the menu.
    Exited,
    /// Files were written. Paths are relative to the project root.
    Created { files: Vec<PathBuf> },
}

/// A file as it was before this run touched it.
struct Written {
    path: PathBuf,
    previous: Option<Vec<u8>>,
}

/// Main generator service.
pub struct GenerateService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    prompter: Box<dyn Prompter>,
    layout: OutputLayout,
    project_root: PathBuf,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use sprout_core::application::GenerateService;
    /// use sprout_core::domain::OutputLayout;
    ///
    /// let service = GenerateService::new(
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    ///     prompter,   // impl Prompter
    /// )
    /// .with_layout(OutputLayout::default())
    /// .with_project_root("./my-app");
    /// ```
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            prompter,
            layout: OutputLayout::default(),
            project_root: PathBuf::from("."),
        }
    }

    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Directory the layout is resolved against.
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Show the generator menu and run whatever the user picks.
    #[instrument(skip_all, fields(root = %self.project_root.display()))]
    pub fn run(&self) -> SproutResult<GenerationOutcome> {
        let kind = self.select_kind()?;
        info!(%kind, "Generator selected");

        match kind {
            GeneratorKind::Exit => Ok(GenerationOutcome::Exited),
            GeneratorKind::PublicCollection => self.generate_collection(CollectionAccess::Public),
            GeneratorKind::PrivateCollection => {
                self.generate_collection(CollectionAccess::Private)
            }
            GeneratorKind::Global => self.generate_global(),
        }
    }

    /// Prompt for singular and plural names, then write one collection file.
    pub fn generate_collection(&self, access: CollectionAccess) -> SproutResult<GenerationOutcome> {
        let names = self.prompt_collection_names()?;
        debug!(singular = %names.singular, plural = %names.plural, "Collection names");

        let plan = GenerationPlan::collection(access, &names.plural, &self.layout);
        self.execute(&plan)
    }

    /// Prompt for one name, then write the config and api files of a global.
    pub fn generate_global(&self) -> SproutResult<GenerationOutcome> {
        let name = self.prompt_name(GLOBAL_PROMPT, None)?;
        let plan = GenerationPlan::global(&name, &self.layout);
        self.execute(&plan)
    }

    /// Render, confirm and write a plan.
    ///
    /// Nothing is written unless every template renders and every overwrite
    /// is confirmed. A failed write undoes the writes before it.
    #[instrument(skip_all, fields(kind = %plan.kind()))]
    pub fn execute(&self, plan: &GenerationPlan) -> SproutResult<GenerationOutcome> {
        validator::validate_plan(plan).map_err(SproutError::Domain)?;

        let mut rendered = Vec::with_capacity(plan.jobs().len());
        for job in plan.jobs() {
            let content = self.renderer.render(job.template, &job.data)?;
            debug!(template = %job.template, output = %job.output.display(), "Rendered");
            rendered.push((job.output.as_path(), content));
        }

        let existing: Vec<PathBuf> = plan
            .outputs()
            .filter(|p| self.filesystem.exists(&self.resolve(p)))
            .map(Path::to_path_buf)
            .collect();

        if !existing.is_empty() && !self.prompter.confirm(&overwrite_prompt(&existing))? {
            info!(files = existing.len(), "Overwrite declined");
            return Err(ApplicationError::OverwriteDeclined { paths: existing }.into());
        }

        for dir in plan.directories() {
            self.filesystem.create_dir_all(&self.resolve(dir))?;
        }

        self.write_files(&rendered)?;

        Ok(GenerationOutcome::Created {
            files: rendered.iter().map(|(p, _)| p.to_path_buf()).collect(),
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn select_kind(&self) -> SproutResult<GeneratorKind> {
        let labels = GeneratorKind::menu_labels();
        let index = self.prompter.select(MENU_PROMPT, &labels)?;

        GeneratorKind::from_menu_index(index).ok_or_else(|| SproutError::Internal {
            message: format!("menu returned index {index} for {} items", labels.len()),
        })
    }

    fn prompt_collection_names(&self) -> SproutResult<NameInput> {
        let singular = self.prompt_name(SINGULAR_PROMPT, None)?;
        let default_plural = pluralize(singular.as_str());
        let plural = self.prompt_name(PLURAL_PROMPT, Some(&default_plural))?;

        Ok(NameInput { singular, plural })
    }

    fn prompt_name(&self, prompt: &str, default: Option<&str>) -> SproutResult<Name> {
        let raw = self
            .prompter
            .input(prompt, default, &validator::validate_name)?;
        Name::parse(&raw).map_err(SproutError::Domain)
    }

    fn resolve(&self, relative: &Path) -> PathBuf {
        self.project_root.join(relative)
    }

    fn write_files(&self, rendered: &[(&Path, String)]) -> SproutResult<()> {
        let mut written = Vec::with_capacity(rendered.len());

        for (relative, content) in rendered {
            let path = self.resolve(relative);
            let result = self.snapshot(&path).and_then(|previous| {
                self.filesystem.write_file(&path, content.as_bytes())?;
                Ok(previous)
            });

            match result {
                Ok(previous) => {
                    info!(path = %relative.display(), "Wrote file");
                    written.push(Written { path, previous });
                }
                Err(e) => {
                    warn!(error = %e, path = %relative.display(), "Write failed, attempting rollback");
                    self.rollback(&written);
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    fn snapshot(&self, path: &Path) -> SproutResult<Option<Vec<u8>>> {
        if self.filesystem.exists(path) {
            self.filesystem.read_file(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Best-effort rollback, newest write first.
    fn rollback(&self, written: &[Written]) {
        for file in written.iter().rev() {
            let result = match &file.previous {
                Some(content) => self.filesystem.write_file(&file.path, content),
                None => self.filesystem.remove_file(&file.path),
            };

            match result {
                Ok(()) => info!(path = %file.path.display(), "Rolled back"),
                Err(e) => {
                    let err = ApplicationError::RollbackFailed {
                        path: file.path.clone(),
                        reason: e.to_string(),
                    };
                    warn!(error = %err, "Rollback failed");
                }
            }
        }
    }
}

fn overwrite_prompt(existing: &[PathBuf]) -> String {
    match existing {
        [_] => "File already exists! Do you want to override it?".to_string(),
        many => format!(
            "{} files already exist ({}). Do you want to override them?",
            many.len(),
            many.iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
