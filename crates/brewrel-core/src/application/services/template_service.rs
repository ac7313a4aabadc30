//! Template Service - template resolution and vocabulary queries.
//!
//! Separated from FormulaService for single responsibility.

use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, instrument};

use crate::{
    application::ports::TemplateLoader,
    domain::{Field, FormulaOptions, FormulaTemplate, Template, TokenStyle},
    error::BrewrelResult,
};

/// Which template a render should use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSelection {
    /// The built-in formula skeleton.
    Builtin {
        style: TokenStyle,
        options: FormulaOptions,
    },
    /// A user-supplied template file.
    File { path: PathBuf, style: TokenStyle },
}

impl TemplateSelection {
    /// The built-in skeleton with default options.
    pub fn builtin(style: TokenStyle) -> Self {
        Self::Builtin {
            style,
            options: FormulaOptions::default(),
        }
    }

    pub fn style(&self) -> TokenStyle {
        match self {
            Self::Builtin { style, .. } | Self::File { style, .. } => *style,
        }
    }
}

/// Information about a vocabulary field for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    pub placeholder: String,
    pub key: String,
    pub description: String,
}

/// Service for template operations.
pub struct TemplateService {
    loader: Box<dyn TemplateLoader>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(loader: Box<dyn TemplateLoader>) -> Self {
        Self { loader }
    }

    /// Produce the template a selection refers to.
    #[instrument(skip_all, fields(style = %selection.style()))]
    pub fn resolve(&self, selection: &TemplateSelection) -> BrewrelResult<Template> {
        let template = match selection {
            TemplateSelection::Builtin { style, options } => FormulaTemplate::builder()
                .style(*style)
                .options(options.clone())
                .build()?,
            TemplateSelection::File { path, style } => self.loader.load(path, *style)?,
        };
        debug!(template = %template.name(), "Template resolved");
        Ok(template)
    }

    /// Fields recognized by a style, in display order.
    pub fn vocabulary(&self, style: TokenStyle) -> Vec<FieldInfo> {
        style
            .fields()
            .filter_map(|field: Field| {
                let key = field.key(style)?;
                Some(FieldInfo {
                    placeholder: format!("{{{{{key}}}}}"),
                    key: key.to_string(),
                    description: field.label().to_string(),
                })
            })
            .collect()
    }
}
