pub mod generation_plan;
pub mod template;

pub use generation_plan::{GenerationPlan, OutputLayout, TemplateJob};
pub use template::{TemplateData, TemplateId};
