//! Template resolution
//!
//! Fetches the template listing, narrows it to the service instance prefix and
//! looks templates up by exact name. Nothing is cached; every resolution
//! re-fetches.

use std::sync::Arc;

use tracing::debug;

use crate::content::{ContentSource, Template};
use crate::error::MessageError;
use crate::naming::{TemplateKind, template_name};

/// Find a template whose `friendly_name` equals `name` exactly
pub fn find_template<'a>(templates: &'a [Template], name: &str) -> Option<&'a Template> {
    templates.iter().find(|t| t.friendly_name == name)
}

/// Like [`find_template`], failing with [`MessageError::TemplateNotFound`] on a miss
pub fn require_template<'a>(templates: &'a [Template], name: &str) -> Result<&'a Template, MessageError> {
    find_template(templates, name).ok_or_else(|| {
        debug!(%name, candidates = templates.len(), "require_template: no match");
        MessageError::TemplateNotFound { name: name.to_string() }
    })
}

/// Resolves message kinds to remote templates for one service instance
#[derive(Clone)]
pub struct TemplateResolver {
    source: Arc<dyn ContentSource>,
    /// Lower-cased service instance prefix
    prefix: String,
}

impl TemplateResolver {
    pub fn new(source: Arc<dyn ContentSource>, prefix: &str) -> Self {
        Self {
            source,
            prefix: prefix.to_lowercase(),
        }
    }

    /// The lower-cased prefix this resolver filters and names by
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Fetch all templates whose name starts with the prefix
    pub async fn fetch_templates(&self) -> Result<Vec<Template>, MessageError> {
        debug!(prefix = %self.prefix, "fetch_templates: called");
        let templates: Vec<Template> = self
            .source
            .list_templates()
            .await?
            .into_iter()
            .filter(|t| t.friendly_name.starts_with(&self.prefix))
            .collect();
        debug!(count = templates.len(), "fetch_templates: filtered");
        Ok(templates)
    }

    /// Build the lookup key for a kind and option count
    pub fn template_name(&self, kind: TemplateKind, count: usize) -> String {
        template_name(&self.prefix, kind, count)
    }

    /// Fetch the listing and return the template for `kind` with `count` options
    pub async fn resolve(&self, kind: TemplateKind, count: usize) -> Result<Template, MessageError> {
        let templates = self.fetch_templates().await?;
        let name = self.template_name(kind, count);
        require_template(&templates, &name).cloned()
    }
}
