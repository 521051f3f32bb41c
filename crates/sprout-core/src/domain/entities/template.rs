//! Template identity and the data handed to renderers.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ TemplateId ── logical path in the bundle     │
//! │ TemplateData ── flat field → string record   │
//! │     PluralCamelCase = "blogPosts"            │
//! │     NameAllCaps     = "BLOG_POST"            │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Field names are a contract with the bundled templates: renderers run in
//! strict mode, so a template referencing a field that is not in its
//! [`TemplateData`] fails to render.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::domain::{name::CaseVariants, value_objects::CollectionAccess};

/// Identifier of one bundled template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    PublicCollection,
    PrivateCollection,
    GlobalConfig,
    GlobalApi,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        Self::PublicCollection,
        Self::PrivateCollection,
        Self::GlobalConfig,
        Self::GlobalApi,
    ];

    /// Short logical name, e.g. `public.collection`.
    pub fn name(self) -> &'static str {
        match self {
            Self::PublicCollection => "public.collection",
            Self::PrivateCollection => "private.collection",
            Self::GlobalConfig => "global.config",
            Self::GlobalApi => "global.api",
        }
    }

    /// Path of the template inside the bundle, e.g.
    /// `templates/public.collection.ts.hbs`.
    pub fn logical_path(self) -> String {
        format!("templates/{}.ts.hbs", self.name())
    }

    pub fn for_collection(access: CollectionAccess) -> Self {
        match access {
            CollectionAccess::Public => Self::PublicCollection,
            CollectionAccess::Private => Self::PrivateCollection,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flat record of named string fields substituted into a template.
///
/// A `BTreeMap` keeps field order stable in debug output and logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateData {
    fields: BTreeMap<String, String>,
}

impl TemplateData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields for collection templates, derived from the plural name.
    ///
    /// | Field | Example |
    /// |-------|---------|
    /// | `PluralCamelCase` | "blogPosts" |
    /// | `PluralPascalCase` | "BlogPosts" |
    /// | `PluralKebabCase` | "blog-posts" |
    /// | `PluralAllCaps` | "BLOG_POSTS" |
    pub fn collection(plural: &CaseVariants) -> Self {
        Self::with_prefix("Plural", plural)
    }

    /// Fields for the global config/api templates.
    ///
    /// | Field | Example |
    /// |-------|---------|
    /// | `NameCamelCase` | "blogPost" |
    /// | `NamePascalCase` | "BlogPost" |
    /// | `NameKebabCase` | "blog-post" |
    /// | `NameAllCaps` | "BLOG_POST" |
    pub fn global(name: &CaseVariants) -> Self {
        Self::with_prefix("Name", name)
    }

    fn with_prefix(prefix: &str, v: &CaseVariants) -> Self {
        Self::new()
            .with_field(format!("{prefix}CamelCase"), &v.camel)
            .with_field(format!("{prefix}PascalCase"), &v.pascal)
            .with_field(format!("{prefix}KebabCase"), &v.kebab)
            .with_field(format!("{prefix}AllCaps"), &v.upper_snake)
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
