//! Sprout Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sprout
//! code generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           sprout-cli (CLI)              │
//! │   (clap, dialoguer Prompter, config)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (GenerateService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, Renderer, Prompter)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    sprout-adapters (Infrastructure)     │
//! │ (HandlebarsRenderer, LocalFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Name, CaseVariants, GenerationPlan)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sprout_core::domain::{CollectionAccess, GenerationPlan, Name, OutputLayout};
//!
//! let plural = Name::parse("blog posts").unwrap();
//! let plan = GenerationPlan::collection(
//!     CollectionAccess::Public,
//!     &plural,
//!     &OutputLayout::default(),
//! );
//!
//! let outputs: Vec<_> = plan.outputs().collect();
//! assert_eq!(outputs, [std::path::Path::new("src/collections/blog-posts.ts")]);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GenerationOutcome,
        ports::{Filesystem, InputValidator, Prompter, TemplateRenderer},
    };
    pub use crate::domain::{
        CaseVariants, CollectionAccess, GenerationPlan, GeneratorKind, Name, OutputLayout,
        TemplateData, TemplateId, pluralize,
    };
    pub use crate::error::{ErrorCategory, SproutError, SproutResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
