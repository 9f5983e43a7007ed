//! Application use cases. Orchestrate domain logic via ports.

pub mod composer_service;
pub mod enrichers;
pub mod outreach_service;
pub mod profile_service;

pub use composer_service::TemplateComposer;
pub use enrichers::AttributeEnricher;
pub use outreach_service::{DispatchOutcome, OutreachReport, OutreachService};
pub use profile_service::ProfileNormalizer;
