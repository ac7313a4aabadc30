//! Brewrel Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Brewrel
//! Homebrew formula renderer, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           brewrel-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (FormulaService, TemplateService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, Render, Loader)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     brewrel-adapters (Infrastructure)   │
//! │ (LocalFilesystem, PlaceholderRenderer)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Template, FieldSet, FormulaTemplate)  │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use brewrel_core::{
//!     application::{FormulaService, TemplateSelection, TemplateService},
//!     domain::{FieldSet, TokenStyle, class_name_for},
//! };
//!
//! // 1. Pick the template
//! let template = templates.resolve(&TemplateSelection::builtin(TokenStyle::Upper))?;
//!
//! // 2. Build the field set
//! let fields = FieldSet::new()
//!     .with("NAME", "foo")
//!     .with("CLASSNAME", class_name_for("foo"))
//!     .with("VERSION", "1.0");
//!
//! // 3. Render and write (with injected adapters)
//! let service = FormulaService::new(renderer, filesystem);
//! service.render_to(&template, &fields, "Formula/foo.rb")?;
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FormulaService, RenderReport, TemplateSelection, TemplateService,
        ports::{Filesystem, TemplateLoader, TemplateRenderer},
    };
    pub use crate::domain::{
        Field, FieldSet, FormulaOptions, FormulaTemplate, RenderedOutput,
        Template, TokenStyle, Vocabulary,
    };
    pub use crate::error::{BrewrelError, BrewrelResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
