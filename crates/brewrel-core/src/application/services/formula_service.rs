//! Formula Service - main application orchestrator.
//!
//! This service coordinates the render-and-write workflow:
//! 1. Render the template with the field set (in memory)
//! 2. Write the complete result atomically
//!
//! Step 2 only runs once step 1 has produced the whole document.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateRenderer},
    domain::{DomainValidator as validator, FieldSet, RenderedOutput, Template},
    error::BrewrelResult,
};

/// Summary of a completed render-and-write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub destination: PathBuf,
    pub bytes: usize,
    pub substitutions: usize,
}

/// Main formula service.
pub struct FormulaService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl FormulaService {
    /// Create a new formula service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use brewrel_core::application::FormulaService;
    ///
    /// let service = FormulaService::new(
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Render a template without touching the filesystem.
    #[instrument(skip_all, fields(template = %template.name()))]
    pub fn render(&self, template: &Template, fields: &FieldSet) -> BrewrelResult<RenderedOutput> {
        validator::validate_template(template)?;
        let output = self.renderer.render(template, fields)?;
        debug!(
            bytes = output.len(),
            substitutions = output.substitutions(),
            "Template rendered"
        );
        Ok(output)
    }

    /// Render a template and write it to `destination`.
    ///
    /// The destination is created or overwritten. On a render error the
    /// filesystem is never touched; on a write error the previous file (if
    /// any) is left as it was.
    #[instrument(
        skip_all,
        fields(
            template = %template.name(),
            destination = %destination.as_ref().display()
        )
    )]
    pub fn render_to(
        &self,
        template: &Template,
        fields: &FieldSet,
        destination: impl AsRef<Path>,
    ) -> BrewrelResult<RenderReport> {
        let destination = destination.as_ref();

        let output = self.render(template, fields)?;

        self.filesystem.write_atomic(destination, output.as_str())?;

        let report = RenderReport {
            destination: destination.to_path_buf(),
            bytes: output.len(),
            substitutions: output.substitutions(),
        };
        info!(bytes = report.bytes, "Formula written");
        Ok(report)
    }
}
