//! Unified error handling for Brewrel Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Brewrel Core operations.
///
/// This enum wraps all possible errors that can occur when using brewrel-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum BrewrelError {
    /// Errors from the domain layer (render and validation failures).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O and orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl BrewrelError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Name of the unresolved placeholder, if this is a missing-field error.
    pub fn missing_field(&self) -> Option<&str> {
        match self {
            Self::Domain(DomainError::MissingField { name }) => Some(name),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type BrewrelResult<T> = Result<T, BrewrelError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_field_is_a_validation_error() {
        let err: BrewrelError = DomainError::MissingField {
            name: "LICENSE".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.missing_field(), Some("LICENSE"));
    }

    #[test]
    fn filesystem_error_is_internal() {
        let err: BrewrelError = ApplicationError::FilesystemError {
            path: PathBuf::from("/nope/foo.rb"),
            reason: "Permission denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.missing_field(), None);
        assert!(err.to_string().contains("/nope/foo.rb"));
    }
}
