//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "render a formula" or "resolve a template".

pub mod formula_service;
pub mod template_service;

pub use formula_service::{FormulaService, RenderReport};
pub use template_service::{FieldInfo, TemplateSelection, TemplateService};
