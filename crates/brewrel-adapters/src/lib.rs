//! Infrastructure adapters for Brewrel.
//!
//! This crate implements the ports defined in `brewrel-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod fields_file;
pub mod filesystem;
pub mod renderer;
pub mod template_loader;

// Re-export commonly used adapters
pub use fields_file::{FieldsFileError, FieldsFormat, load_fields, parse_fields};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::PlaceholderRenderer;
pub use template_loader::FilesystemTemplateLoader;
