//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not rendering.
//! Rendering errors are `DomainError` from `crate::domain`.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The rendering adapter failed for a reason other than a missing field.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A template file could not be read.
    #[error("Failed to load template {path}: {reason}")]
    TemplateLoad {
        path: PathBuf,
        kind: ErrorKind,
        reason: String,
    },

    /// A fields file could not be read or parsed.
    #[error("Failed to load fields from {path}: {reason}")]
    FieldsLoad { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state is locked")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::TemplateLoad { path, kind, .. } => match kind {
                ErrorKind::InvalidData => vec![
                    format!("Template is not UTF-8 text: {}", path.display()),
                    "Save the template as UTF-8".into(),
                ],
                ErrorKind::PermissionDenied => vec![
                    format!("Cannot read template: {}", path.display()),
                    "Check the file's read permissions".into(),
                ],
                _ => vec![
                    format!("Could not read template: {}", path.display()),
                    "Check the path passed with --template".into(),
                    "Omit --template to use the built-in formula".into(),
                ],
            },
            Self::FieldsLoad { path, .. } => vec![
                format!("Could not use fields file: {}", path.display()),
                "Fields files are TOML (.toml) or JSON (.json) maps of placeholder to value".into(),
                "Example: CLASSNAME = \"Foo\"".into(),
            ],
            Self::StoreLockError => vec![
                "Internal state is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateLoad { kind, .. } => match kind {
                ErrorKind::NotFound => ErrorCategory::NotFound,
                ErrorKind::InvalidData => ErrorCategory::Validation,
                _ => ErrorCategory::Internal,
            },
            Self::FieldsLoad { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
