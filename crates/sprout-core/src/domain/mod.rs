//! Core domain layer for Sprout.
//!
//! This module contains pure naming and planning logic with no I/O.
//! Templating, prompting and filesystem concerns are handled via ports
//! (traits) defined in the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, terminal, or external calls
//! - **Immutable values**: `Name`, `CaseVariants` and plans are Clone + PartialEq
//!
// Public API - what the world sees
pub mod casing;
pub mod entities;
pub mod error;
pub mod inflection;
pub mod name;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use casing::{to_camel_case, to_kebab_case, to_pascal_case, to_upper_snake_case};
pub use entities::{GenerationPlan, OutputLayout, TemplateData, TemplateId, TemplateJob};
pub use error::{DomainError, ErrorCategory};
pub use inflection::pluralize;
pub use name::{CaseVariants, Name, NameInput};
pub use validation::DomainValidator;
pub use value_objects::{CollectionAccess, GeneratorKind};
