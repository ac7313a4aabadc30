//! Placeholder substitution renderer.

use brewrel_core::{
    application::ports::TemplateRenderer,
    domain::{DomainValidator as validator, FieldSet, RenderedOutput, Template},
    error::{BrewrelError, BrewrelResult},
};
use tracing::{debug, instrument};

/// Renderer that replaces `{{NAME}}` tokens of the template's vocabulary
/// with literal values, in one pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    /// Create a new placeholder renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    #[instrument(skip_all, fields(template = %template.name()))]
    fn render(&self, template: &Template, fields: &FieldSet) -> BrewrelResult<RenderedOutput> {
        validator::validate_template(template).map_err(BrewrelError::Domain)?;

        let ignored = fields
            .iter()
            .filter(|(name, _)| !template.vocabulary().contains(name))
            .count();
        if ignored > 0 {
            debug!(ignored, "Field set has entries outside the vocabulary");
        }

        template.render(fields).map_err(BrewrelError::Domain)
    }
}
