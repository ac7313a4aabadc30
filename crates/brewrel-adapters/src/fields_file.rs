//! Fields files: a flat map of placeholder name to value.
//!
//! ```toml
//! CLASSNAME = "Foo"
//! VERSION = "1.0"
//! ```
//!
//! or the same map as a JSON object. Strings are taken verbatim. Integers
//! and booleans are accepted and written in their usual text form; anything
//! else (floats, arrays, tables) is rejected so that `1.10` never silently
//! turns into `1.1`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use brewrel_core::{application::ApplicationError, domain::FieldSet, error::BrewrelResult};

/// Encoding of a fields file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldsFormat {
    Toml,
    Json,
}

impl FieldsFormat {
    /// Pick the format from the file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Why a fields file could not be turned into a field set.
#[derive(Debug, Error)]
pub enum FieldsFileError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("value of '{name}' must be a string (quote it, e.g. {name} = \"...\")")]
    NotAString { name: String },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Integer(i64),
    Flag(bool),
    Other(serde_json::Value),
}

/// Read and parse a fields file.
pub fn load_fields(path: &Path) -> BrewrelResult<FieldSet> {
    let text = std::fs::read_to_string(path).map_err(|e| ApplicationError::FieldsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let fields = parse_fields(&text, FieldsFormat::from_path(path)).map_err(|e| {
        ApplicationError::FieldsLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    debug!(path = %path.display(), count = fields.len(), "Fields file loaded");
    Ok(fields)
}

/// Parse fields text in the given format.
pub fn parse_fields(text: &str, format: FieldsFormat) -> Result<FieldSet, FieldsFileError> {
    let raw: BTreeMap<String, RawValue> = match format {
        FieldsFormat::Toml => toml::from_str(text)?,
        FieldsFormat::Json => serde_json::from_str(text)?,
    };

    raw.into_iter()
        .map(|(name, value)| match value {
            RawValue::Text(s) => Ok((name, s)),
            RawValue::Integer(i) => Ok((name, i.to_string())),
            RawValue::Flag(b) => Ok((name, b.to_string())),
            RawValue::Other(_) => Err(FieldsFileError::NotAString { name }),
        })
        .collect()
}
