//! Bundled template sources.
//!
//! Templates are embedded into the binary at compile time, so the generator
//! never reads template files from disk at runtime.

use std::borrow::Cow;
use std::collections::HashMap;

use sprout_core::{application::ApplicationError, domain::TemplateId, error::SproutResult};

const PUBLIC_COLLECTION: &str = include_str!("../templates/public.collection.ts.hbs");
const PRIVATE_COLLECTION: &str = include_str!("../templates/private.collection.ts.hbs");
const GLOBAL_CONFIG: &str = include_str!("../templates/global.config.ts.hbs");
const GLOBAL_API: &str = include_str!("../templates/global.api.ts.hbs");

/// Template sources keyed by [`TemplateId`].
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    sources: HashMap<TemplateId, Cow<'static, str>>,
}

impl TemplateCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding every bundled template.
    pub fn builtin() -> Self {
        TemplateId::ALL
            .into_iter()
            .fold(Self::new(), |catalog, id| catalog.with_template(id, builtin_source(id)))
    }

    /// Add or replace the source for `id`.
    pub fn with_template(mut self, id: TemplateId, source: impl Into<Cow<'static, str>>) -> Self {
        self.sources.insert(id, source.into());
        self
    }

    /// Remove the source for `id`, if any.
    pub fn without_template(mut self, id: TemplateId) -> Self {
        self.sources.remove(&id);
        self
    }

    /// Look up a template source.
    ///
    /// # Errors
    /// `TemplateNotFound` with the logical path when `id` is missing.
    pub fn get(&self, id: TemplateId) -> SproutResult<&str> {
        self.sources.get(&id).map(|s| s.as_ref()).ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                template: id.logical_path(),
            }
            .into()
        })
    }

    pub fn contains(&self, id: TemplateId) -> bool {
        self.sources.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

fn builtin_source(id: TemplateId) -> &'static str {
    match id {
        TemplateId::PublicCollection => PUBLIC_COLLECTION,
        TemplateId::PrivateCollection => PRIVATE_COLLECTION,
        TemplateId::GlobalConfig => GLOBAL_CONFIG,
        TemplateId::GlobalApi => GLOBAL_API,
    }
}
