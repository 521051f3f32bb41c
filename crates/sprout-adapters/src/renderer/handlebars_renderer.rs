//! Handlebars-backed template renderer.

use handlebars::Handlebars;
use tracing::{debug, instrument};

use sprout_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{TemplateData, TemplateId},
    error::SproutResult,
};

use crate::template_catalog::TemplateCatalog;

/// Renders catalog templates with Handlebars.
///
/// Strict mode is on, so a reference to a field missing from the
/// [`TemplateData`] is an error rather than an empty string. Output is not
/// HTML-escaped: the templates produce source code.
pub struct HandlebarsRenderer {
    hbs: Handlebars<'static>,
    catalog: TemplateCatalog,
}

impl HandlebarsRenderer {
    pub fn new(catalog: TemplateCatalog) -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);

        Self { hbs, catalog }
    }

    /// Renderer over the bundled templates.
    pub fn builtin() -> Self {
        Self::new(TemplateCatalog::builtin())
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    #[instrument(skip_all, fields(template = %template))]
    fn render(&self, template: TemplateId, data: &TemplateData) -> SproutResult<String> {
        let source = self.catalog.get(template)?;
        debug!(fields = data.len(), "Rendering template");

        // Templates are parsed on every call so a malformed one fails here,
        // before any file is written.
        self.hbs.render_template(source, data).map_err(|e| {
            ApplicationError::RenderingFailed {
                template: template.logical_path(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
