//! Integration tests for sprout-core.
//!
//! Each test drives `GenerateService` end to end with a scripted prompter,
//! the bundled Handlebars templates and an in-memory filesystem.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::TempDir;

use sprout_adapters::{HandlebarsRenderer, LocalFilesystem, MemoryFilesystem, TemplateCatalog};
use sprout_core::{
    application::ApplicationError,
    prelude::*,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Asked {
    Select(String),
    Input {
        prompt: String,
        default: Option<String>,
    },
    Confirm(String),
}

/// Answers prompts from a queue and records what was asked.
#[derive(Clone, Default)]
struct ScriptedPrompter {
    answers: Rc<RefCell<VecDeque<String>>>,
    asked: Rc<RefCell<Vec<Asked>>>,
}

impl ScriptedPrompter {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: Rc::new(RefCell::new(
                answers.iter().map(|s| s.to_string()).collect(),
            )),
            asked: Rc::default(),
        }
    }

    fn next(&self) -> String {
        self.answers
            .borrow_mut()
            .pop_front()
            .expect("prompter ran out of answers")
    }

    fn asked(&self) -> Vec<Asked> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, items: &[&str]) -> SproutResult<usize> {
        self.asked.borrow_mut().push(Asked::Select(prompt.into()));
        let answer = self.next();
        Ok(items
            .iter()
            .position(|item| *item == answer)
            .expect("answer is not a menu item"))
    }

    fn input(
        &self,
        prompt: &str,
        default: Option<&str>,
        validate: InputValidator<'_>,
    ) -> SproutResult<String> {
        self.asked.borrow_mut().push(Asked::Input {
            prompt: prompt.into(),
            default: default.map(String::from),
        });

        // Re-ask on rejection, like a terminal prompter.
        loop {
            let answer = self.next();
            let answer = if answer == "<accept>" {
                default.unwrap_or_default().to_string()
            } else {
                answer
            };
            if validate(&answer).is_ok() {
                return Ok(answer);
            }
        }
    }

    fn confirm(&self, prompt: &str) -> SproutResult<bool> {
        self.asked.borrow_mut().push(Asked::Confirm(prompt.into()));
        Ok(self.next() == "y")
    }
}

fn service(fs: &MemoryFilesystem, prompter: &ScriptedPrompter) -> GenerateService {
    service_with(fs, prompter, HandlebarsRenderer::builtin())
}

fn service_with(
    fs: &MemoryFilesystem,
    prompter: &ScriptedPrompter,
    renderer: HandlebarsRenderer,
) -> GenerateService {
    GenerateService::new(
        Box::new(renderer),
        Box::new(fs.clone()),
        Box::new(prompter.clone()),
    )
    .with_project_root("/app")
}

#[test]
fn test_public_collection_with_default_plural() {
    let fs = MemoryFilesystem::new();
    let prompter = ScriptedPrompter::new(&["Public Collection", "item", "<accept>"]);

    let outcome = service(&fs, &prompter).run().unwrap();

    assert_eq!(
        outcome,
        GenerationOutcome::Created {
            files: vec![PathBuf::from("src/collections/items.ts")]
        }
    );
    assert_eq!(
        prompter.asked()[2],
        Asked::Input {
            prompt: "Name (plural)".into(),
            default: Some("items".into()),
        }
    );

    let content = fs.contents("/app/src/collections/items.ts").unwrap();
    assert!(content.contains("export const items: CollectionConfig"));
    assert!(content.contains("slug: 'items'"));
    assert!(content.contains("read: () => true"));
}

#[test]
fn test_private_collection_uses_private_template() {
    let fs = MemoryFilesystem::new();
    let prompter = ScriptedPrompter::new(&["Private Collection", "item", "<accept>"]);

    service(&fs, &prompter).run().unwrap();

    let content = fs.contents("/app/src/collections/items.ts").unwrap();
    assert!(content.contains("Boolean(req.user)"));
}

#[test]
fn test_edited_plural_overrides_default() {
    let fs = MemoryFilesystem::new();
    let prompter = ScriptedPrompter::new(&["Public Collection", "person", "team-members"]);

    service(&fs, &prompter).run().unwrap();

    assert_eq!(
        fs.list_files(),
        [PathBuf::from("/app/src/collections/team-members.ts")]
    );
    let content = fs.contents("/app/src/collections/team-members.ts").unwrap();
    assert!(content.contains("export const teamMembers"));
    assert!(!content.contains("people"));
}

#[test]
fn test_empty_name_is_asked_again() {
    let fs = MemoryFilesystem::new();
    let prompter = ScriptedPrompter::new(&["Global", "", "   ", "site"]);

    service(&fs, &prompter).run().unwrap();

    assert!(fs.exists(Path::new("/app/src/globals/site/site-config.ts")));
}

#[test]
fn test_global_writes_config_and_api() {
    let fs = MemoryFilesystem::new();
    let prompter = ScriptedPrompter::new(&["Global", "blog-post"]);

    let outcome = service(&fs, &prompter).run().unwrap();

    assert_eq!(
        outcome,
        GenerationOutcome::Created {
            files: vec![
                PathBuf::from("src/globals/blog-post/blog-post-config.ts"),
                PathBuf::from("src/globals/blog-post/blog-post-api.ts"),
            ]
        }
    );

    let config = fs
        .contents("/app/src/globals/blog-post/blog-post-config.ts")
        .unwrap();
    assert!(config.contains("export const BlogPost: GlobalConfig"));
    assert!(config.contains("slug: 'blog-post'"));

    let api = fs
        .contents("/app/src/globals/blog-post/blog-post-api.ts")
        .unwrap();
    assert!(api.contains("BLOG_POST_SLUG"));
    assert!(api.contains("getBlogPost"));
}

#[test]
fn test_exit_asks_nothing_else() {
    let fs = MemoryFilesystem::new();
    let prompter = ScriptedPrompter::new(&["Exit"]);

    let outcome = service(&fs, &prompter).run().unwrap();

    assert_eq!(outcome, GenerationOutcome::Exited);
    assert_eq!(prompter.asked().len(), 1);
    assert!(fs.list_files().is_empty());
}

#[test]
fn test_declined_overwrite_leaves_file_untouched() {
    let fs = MemoryFilesystem::new().with_file("/app/src/collections/items.ts", "hand written\n");
    let prompter = ScriptedPrompter::new(&["Public Collection", "item", "<accept>", "n"]);

    let err = service(&fs, &prompter).run().unwrap_err();

    assert_eq!(
        err,
        SproutError::Application(ApplicationError::OverwriteDeclined {
            paths: vec![PathBuf::from("src/collections/items.ts")]
        })
    );
    assert!(err.is_cancellation());
    assert_eq!(
        prompter.asked().last(),
        Some(&Asked::Confirm(
            "File already exists! Do you want to override it?".into()
        ))
    );
    assert_eq!(
        fs.contents("/app/src/collections/items.ts").as_deref(),
        Some("hand written\n")
    );
}

#[test]
fn test_accepted_overwrite_replaces_file() {
    let fs = MemoryFilesystem::new().with_file("/app/src/collections/items.ts", "old");
    let prompter = ScriptedPrompter::new(&["Public Collection", "item", "<accept>", "y"]);

    service(&fs, &prompter).run().unwrap();

    let content = fs.contents("/app/src/collections/items.ts").unwrap();
    assert!(content.contains("slug: 'items'"));
}

#[test]
fn test_global_overwrite_is_confirmed_once_for_both_files() {
    let fs = MemoryFilesystem::new()
        .with_file("/app/src/globals/site/site-config.ts", "a")
        .with_file("/app/src/globals/site/site-api.ts", "b");
    let prompter = ScriptedPrompter::new(&["Global", "site", "n"]);

    let err = service(&fs, &prompter).run().unwrap_err();

    assert!(err.is_cancellation());
    let confirms: Vec<_> = prompter
        .asked()
        .into_iter()
        .filter(|a| matches!(a, Asked::Confirm(_)))
        .collect();
    assert_eq!(confirms.len(), 1);
    assert_eq!(fs.contents("/app/src/globals/site/site-config.ts").as_deref(), Some("a"));
    assert_eq!(fs.contents("/app/src/globals/site/site-api.ts").as_deref(), Some("b"));
}

#[test]
fn test_broken_api_template_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let prompter = ScriptedPrompter::new(&["Global", "blog-post"]);
    let catalog = TemplateCatalog::builtin().with_template(TemplateId::GlobalApi, "{{#each}}");

    let err = service_with(&fs, &prompter, HandlebarsRenderer::new(catalog))
        .run()
        .unwrap_err();

    assert!(matches!(
        err,
        SproutError::Application(ApplicationError::RenderingFailed { .. })
    ));
    assert!(fs.list_files().is_empty());
    assert!(!fs.exists(Path::new("/app/src/globals/blog-post")));
}

#[test]
fn test_missing_template_is_reported_by_path() {
    let fs = MemoryFilesystem::new();
    let prompter = ScriptedPrompter::new(&["Global", "site"]);
    let catalog = TemplateCatalog::builtin().without_template(TemplateId::GlobalConfig);

    let err = service_with(&fs, &prompter, HandlebarsRenderer::new(catalog))
        .run()
        .unwrap_err();

    assert_eq!(
        err,
        SproutError::Application(ApplicationError::TemplateNotFound {
            template: "templates/global.config.ts.hbs".into()
        })
    );
}

#[test]
fn test_failed_api_write_rolls_back_config() {
    let fs = MemoryFilesystem::new().deny_writes("/app/src/globals/site/site-api.ts");
    let prompter = ScriptedPrompter::new(&["Global", "site"]);

    let err = service(&fs, &prompter).run().unwrap_err();

    assert!(matches!(
        err,
        SproutError::Application(ApplicationError::FilesystemError { .. })
    ));
    assert!(fs.list_files().is_empty());
}

#[test]
fn test_failed_api_write_restores_overwritten_config() {
    let fs = MemoryFilesystem::new()
        .with_file("/app/src/globals/site/site-config.ts", "original")
        .deny_writes("/app/src/globals/site/site-api.ts");
    let prompter = ScriptedPrompter::new(&["Global", "site", "y"]);

    assert!(service(&fs, &prompter).run().is_err());
    assert_eq!(
        fs.contents("/app/src/globals/site/site-config.ts").as_deref(),
        Some("original")
    );
}

#[test]
fn test_custom_layout() {
    let fs = MemoryFilesystem::new();
    let prompter = ScriptedPrompter::new(&["Public Collection", "category", "<accept>"]);
    let layout = OutputLayout {
        source_root: PathBuf::from("app"),
        collections_dir: PathBuf::from("models"),
        ..OutputLayout::default()
    }
    .with_extension("tsx");

    service(&fs, &prompter).with_layout(layout).run().unwrap();

    assert_eq!(
        fs.list_files(),
        [PathBuf::from("/app/app/models/categories.tsx")]
    );
}

#[test]
fn test_confirmed_overwrite_replaces_non_utf8_file_on_disk() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("src/collections/items.ts");
    std::fs::create_dir_all(target.parent().unwrap()).unwrap();
    std::fs::write(&target, [0xff, 0xfe, b'x']).unwrap();

    let prompter = ScriptedPrompter::new(&["Public Collection", "item", "<accept>", "y"]);
    let outcome = GenerateService::new(
        Box::new(HandlebarsRenderer::builtin()),
        Box::new(LocalFilesystem::new()),
        Box::new(prompter),
    )
    .with_project_root(dir.path())
    .run()
    .unwrap();

    assert_eq!(
        outcome,
        GenerationOutcome::Created {
            files: vec![PathBuf::from("src/collections/items.ts")]
        }
    );
    let content = std::fs::read_to_string(&target).unwrap();
    assert!(content.contains("slug: 'items'"));
}

#[test]
fn test_failed_api_write_restores_non_utf8_config_bytes() {
    let original = [0xff, 0xfe, b'x'];
    let fs = MemoryFilesystem::new()
        .with_bytes("/app/src/globals/site/site-config.ts", &original)
        .deny_writes("/app/src/globals/site/site-api.ts");
    let prompter = ScriptedPrompter::new(&["Global", "site", "y"]);

    assert!(service(&fs, &prompter).run().is_err());
    assert_eq!(
        fs.bytes("/app/src/globals/site/site-config.ts").as_deref(),
        Some(&original[..])
    );
}
