//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `brewrel-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Atomic file writes
//!   - `TemplateLoader`: Reading custom template files
//!   - `TemplateRenderer`: Template rendering
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, TemplateLoader, TemplateRenderer};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateLoader, MockTemplateRenderer};
