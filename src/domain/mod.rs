//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod email_candidates;
pub mod entities;
pub mod errors;
pub mod llm;
pub mod outcome;
pub mod summary;

pub use entities::{Education, Employment, MAX_HISTORY_ENTRIES, Profile};
pub use errors::DomainError;
pub use llm::{ChatMessage, Role, TaskKind};
pub use outcome::Outcome;
