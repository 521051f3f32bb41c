use std::fmt;

use crate::domain::{
    casing::{split_words, to_camel_case, to_kebab_case, to_pascal_case, to_upper_snake_case},
    error::DomainError,
};

/// A validated, user-supplied identifier.
///
/// Invariant: never empty and always contains at least one word, so every
/// [`CaseVariants`] field derived from it is non-empty too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Validate raw prompt input.
    ///
    /// Surrounding whitespace is trimmed. This is the validator prompt
    /// drivers re-run until it succeeds.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyName);
        }
        if split_words(trimmed).is_empty() {
            return Err(DomainError::NoWordCharacters {
                input: trimmed.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive all case variants of this name.
    pub fn variants(&self) -> CaseVariants {
        CaseVariants::from_name(self)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Singular/plural pair entered for a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameInput {
    pub singular: Name,
    pub plural: Name,
}

/// A name rendered in every casing the templates use.
///
/// Computed once per invocation and shared read-only by every job of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseVariants {
    pub camel: String,
    pub pascal: String,
    pub kebab: String,
    pub upper_snake: String,
}

impl CaseVariants {
    pub fn from_name(name: &Name) -> Self {
        let raw = name.as_str();
        Self {
            camel: to_camel_case(raw),
            pascal: to_pascal_case(raw),
            kebab: to_kebab_case(raw),
            upper_snake: to_upper_snake_case(raw),
        }
    }
}
