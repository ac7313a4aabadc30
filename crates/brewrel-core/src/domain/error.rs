// ============================================================================
// domain/error.rs - RENDER DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Render Errors
    // ========================================================================
    #[error("No value supplied for placeholder '{{{{{name}}}}}'")]
    MissingField { name: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Template '{name}' is empty")]
    EmptyTemplate { name: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Invalid template option {option}: {reason}")]
    InvalidOption { option: String, reason: String },

    #[error("Unknown token style '{0}'")]
    UnknownTokenStyle(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingField { name } => vec![
                format!("Provide a value for '{name}'"),
                format!("Example: brewrel render --set {name}=VALUE"),
                "List the placeholders a style expects: brewrel fields".into(),
            ],
            Self::EmptyTemplate { name } => vec![
                format!("Template '{name}' contains no text"),
                "Check the file passed with --template".into(),
            ],
            Self::InvalidField { field, .. } => vec![
                format!("Check the value given for the {field}"),
                "Run without --strict to render anyway".into(),
            ],
            Self::InvalidOption { option, .. } => vec![
                format!("Check the {option} given on the command line or in [formula]"),
                "Template options are copied into the formula as literal text".into(),
            ],
            Self::UnknownTokenStyle(_) => vec![
                "Supported styles:".into(),
                "  • upper  - {{CLASSNAME}}, {{NAME}}, ...".into(),
                "  • lower  - {{classname}}, {{name}}, {{wrapper}}, ...".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingField { .. } | Self::InvalidField { .. } => ErrorCategory::Validation,
            Self::EmptyTemplate { .. } | Self::InvalidOption { .. } => ErrorCategory::Validation,
            Self::UnknownTokenStyle(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
