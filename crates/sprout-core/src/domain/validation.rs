use crate::domain::{entities::GenerationPlan, error::DomainError, name::Name};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across call-sites.
pub struct DomainValidator;

impl DomainValidator {
    /// Prompt validator for free-text names.
    ///
    /// Returns the inline message to show when the input is rejected.
    pub fn validate_name(input: &str) -> Result<(), String> {
        Name::parse(input).map(|_| ()).map_err(|e| e.to_string())
    }

    pub fn validate_plan(plan: &GenerationPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
