use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::domain::{
    entities::template::{TemplateData, TemplateId},
    error::DomainError,
    name::Name,
    value_objects::{CollectionAccess, GeneratorKind},
};

/// Where generated files go, relative to the project root.
///
/// Defaults reproduce the conventional TypeScript layout:
/// `src/collections/<kebab>.ts` and `src/globals/<kebab>/<kebab>-config.ts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub source_root: PathBuf,
    pub collections_dir: PathBuf,
    pub globals_dir: PathBuf,
    /// File extension without the leading dot. Empty means no extension.
    pub extension: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("src"),
            collections_dir: PathBuf::from("collections"),
            globals_dir: PathBuf::from("globals"),
            extension: "ts".into(),
        }
    }
}

impl OutputLayout {
    /// Set the extension, ignoring a leading dot (`.tsx` and `tsx` are the same).
    pub fn with_extension(mut self, extension: impl AsRef<str>) -> Self {
        self.extension = extension.as_ref().trim_start_matches('.').to_string();
        self
    }

    pub fn collections_path(&self) -> PathBuf {
        self.source_root.join(&self.collections_dir)
    }

    pub fn globals_path(&self) -> PathBuf {
        self.source_root.join(&self.globals_dir)
    }

    fn file_name(&self, stem: &str) -> String {
        if self.extension.is_empty() {
            stem.to_string()
        } else {
            format!("{stem}.{}", self.extension)
        }
    }
}

/// One file to render: which template, where to, with what data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateJob {
    pub template: TemplateId,
    pub output: PathBuf,
    pub data: TemplateData,
}

/// Everything a single generator run will produce.
///
/// This is the output of planning and the input of rendering/writing. It
/// contains no I/O, only data. Paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub(crate) kind: GeneratorKind,
    pub(crate) directories: Vec<PathBuf>,
    pub(crate) jobs: Vec<TemplateJob>,
}

impl GenerationPlan {
    /// Plan a public or private collection: one file named after the plural.
    pub fn collection(access: CollectionAccess, plural: &Name, layout: &OutputLayout) -> Self {
        let variants = plural.variants();
        let dir = layout.collections_path();
        let output = dir.join(layout.file_name(&variants.kebab));

        let kind = match access {
            CollectionAccess::Public => GeneratorKind::PublicCollection,
            CollectionAccess::Private => GeneratorKind::PrivateCollection,
        };

        Self {
            kind,
            directories: vec![dir],
            jobs: vec![TemplateJob {
                template: TemplateId::for_collection(access),
                output,
                data: TemplateData::collection(&variants),
            }],
        }
    }

    /// Plan a global: a config file and an api file sharing one directory
    /// and one set of case variants.
    pub fn global(name: &Name, layout: &OutputLayout) -> Self {
        let variants = name.variants();
        let dir = layout.globals_path().join(&variants.kebab);
        let data = TemplateData::global(&variants);

        let config = TemplateJob {
            template: TemplateId::GlobalConfig,
            output: dir.join(layout.file_name(&format!("{}-config", variants.kebab))),
            data: data.clone(),
        };
        let api = TemplateJob {
            template: TemplateId::GlobalApi,
            output: dir.join(layout.file_name(&format!("{}-api", variants.kebab))),
            data,
        };

        Self {
            kind: GeneratorKind::Global,
            directories: vec![dir],
            jobs: vec![config, api],
        }
    }

    pub fn kind(&self) -> GeneratorKind {
        self.kind
    }

    pub fn jobs(&self) -> &[TemplateJob] {
        &self.jobs
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn outputs(&self) -> impl Iterator<Item = &Path> {
        self.jobs.iter().map(|j| j.output.as_path())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.jobs.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::new();
        for path in self.directories.iter().chain(self.jobs.iter().map(|j| &j.output)) {
            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
            if path.components().any(|c| c == Component::ParentDir) {
                return Err(DomainError::PathEscapesProject {
                    path: path.display().to_string(),
                });
            }
        }
        for job in &self.jobs {
            if !seen.insert(job.output.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: job.output.display().to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Name {
        Name::parse(s).unwrap()
    }

    #[test]
    fn collection_path_uses_plural_kebab() {
        let plan = GenerationPlan::collection(
            CollectionAccess::Public,
            &name("BlogPosts"),
            &OutputLayout::default(),
        );
        assert_eq!(plan.jobs().len(), 1);
        assert_eq!(
            plan.jobs()[0].output,
            PathBuf::from("src/collections/blog-posts.ts")
        );
        assert_eq!(plan.jobs()[0].template, TemplateId::PublicCollection);
        assert_eq!(plan.directories(), [PathBuf::from("src/collections")]);
        assert_eq!(plan.kind(), GeneratorKind::PublicCollection);
    }

    #[test]
    fn private_collection_differs_only_in_template() {
        let layout = OutputLayout::default();
        let public = GenerationPlan::collection(CollectionAccess::Public, &name("items"), &layout);
        let private =
            GenerationPlan::collection(CollectionAccess::Private, &name("items"), &layout);

        assert_eq!(private.jobs()[0].template, TemplateId::PrivateCollection);
        assert_eq!(public.jobs()[0].output, private.jobs()[0].output);
        assert_eq!(public.jobs()[0].data, private.jobs()[0].data);
    }

    #[test]
    fn global_produces_config_then_api() {
        let plan = GenerationPlan::global(&name("blog-post"), &OutputLayout::default());
        let outputs: Vec<_> = plan.outputs().collect();
        assert_eq!(
            outputs,
            [
                Path::new("src/globals/blog-post/blog-post-config.ts"),
                Path::new("src/globals/blog-post/blog-post-api.ts"),
            ]
        );
        assert_eq!(plan.jobs()[0].template, TemplateId::GlobalConfig);
        assert_eq!(plan.jobs()[1].template, TemplateId::GlobalApi);
        assert_eq!(plan.jobs()[0].data, plan.jobs()[1].data);
        assert_eq!(plan.directories(), [PathBuf::from("src/globals/blog-post")]);
    }

    #[test]
    fn custom_layout_and_extension() {
        let layout = OutputLayout {
            source_root: PathBuf::from("app"),
            collections_dir: PathBuf::from("models"),
            ..OutputLayout::default()
        }
        .with_extension(".tsx");

        let plan = GenerationPlan::collection(CollectionAccess::Public, &name("items"), &layout);
        assert_eq!(plan.jobs()[0].output, PathBuf::from("app/models/items.tsx"));
    }

    #[test]
    fn empty_extension_means_bare_stem() {
        let layout = OutputLayout::default().with_extension("");
        let plan = GenerationPlan::global(&name("site"), &layout);
        assert_eq!(
            plan.jobs()[1].output,
            PathBuf::from("src/globals/site/site-api")
        );
    }

    #[test]
    fn planned_paths_validate() {
        let layout = OutputLayout::default();
        assert!(GenerationPlan::global(&name("x"), &layout).validate().is_ok());
    }

    #[test]
    fn absolute_source_root_is_rejected() {
        let layout = OutputLayout {
            source_root: std::env::temp_dir(),
            ..OutputLayout::default()
        };
        let plan = GenerationPlan::collection(CollectionAccess::Public, &name("items"), &layout);
        assert!(matches!(
            plan.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn parent_directory_in_layout_is_rejected() {
        let layout = OutputLayout {
            source_root: PathBuf::from("../other"),
            ..OutputLayout::default()
        };
        let plan = GenerationPlan::global(&name("site"), &layout);
        assert_eq!(
            plan.validate(),
            Err(DomainError::PathEscapesProject {
                path: "../other/globals/site".into()
            })
        );
    }
}
