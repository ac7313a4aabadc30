//! Filesystem-based template loader.
//!
//! Reads a user-supplied template file and turns it into a domain
//! [`Template`]. The template's name is the file stem (`custom.rb` becomes
//! `custom`); its vocabulary comes from the requested [`TokenStyle`].
//!
//! # Example
//!
//! A minimal custom template for the uppercase style:
//!
//! ```text
//! class {{CLASSNAME}} < Formula
//!   url "{{URL}}"
//!   sha256 "{{SHA256}}"
//!
//!   def install
//!     bin.install "{{NAME}}"
//!   end
//! end
//! ```

use std::path::Path;

use tracing::{debug, instrument};

use brewrel_core::{
    application::{ApplicationError, ports::TemplateLoader},
    domain::{Template, TokenStyle},
    error::BrewrelResult,
};

/// Loads templates from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemTemplateLoader;

impl FilesystemTemplateLoader {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateLoader for FilesystemTemplateLoader {
    #[instrument(skip_all, fields(path = %path.display(), style = %style))]
    fn load(&self, path: &Path, style: TokenStyle) -> BrewrelResult<Template> {
        let text = std::fs::read_to_string(path).map_err(|e| ApplicationError::TemplateLoad {
            path: path.to_path_buf(),
            kind: e.kind(),
            reason: e.to_string(),
        })?;

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "template".to_string());

        let template = Template::new(name, text, style)?;
        debug!(
            template = %template.name(),
            placeholders = template.placeholders().len(),
            "Template loaded"
        );
        Ok(template)
    }
}
