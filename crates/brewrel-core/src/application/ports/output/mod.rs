//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `brewrel-adapters` crate provides implementations.

use crate::domain::{FieldSet, RenderedOutput, Template, TokenStyle};
use crate::error::BrewrelResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `brewrel_adapters::filesystem::LocalFilesystem` (production)
/// - `brewrel_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `write_atomic` is create-or-overwrite, and all-or-nothing: on failure
///   the destination keeps its previous content (or stays absent)
/// - The parent directory must already exist
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Replace the file at `path` with `content`.
    fn write_atomic(&self, path: &Path, content: &str) -> BrewrelResult<()>;
}

/// Port for loading user-supplied template files.
///
/// Implemented by:
/// - `brewrel_adapters::template_loader::FilesystemTemplateLoader`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateLoader: Send + Sync {
    /// Read `path` as a template recognizing the vocabulary of `style`.
    fn load(&self, path: &Path, style: TokenStyle) -> BrewrelResult<Template>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `brewrel_adapters::renderer::PlaceholderRenderer` (placeholder substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a template with a field set.
    ///
    /// # Arguments
    ///
    /// * `template` - The template to render
    /// * `fields` - Placeholder values
    fn render(&self, template: &Template, fields: &FieldSet) -> BrewrelResult<RenderedOutput>;
}
