//! Application layer for Brewrel.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (FormulaService, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! rendering logic itself. The substitution rule lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    FieldInfo, // DTO for vocabulary listings
    FormulaService,
    RenderReport,
    TemplateSelection,
    TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateLoader, TemplateRenderer};

pub use error::ApplicationError;
