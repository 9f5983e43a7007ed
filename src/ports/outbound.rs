//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ChatMessage, DomainError};
use serde_json::Value;
use std::fmt;

/// Which enrichment endpoint to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentMode {
    Profile,
    Company,
}

impl EnrichmentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrichmentMode::Profile => "profile",
            EnrichmentMode::Company => "company",
        }
    }
}

impl fmt::Display for EnrichmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Third-party profile/company enrichment API.
#[async_trait::async_trait]
pub trait EnrichmentPort: Send + Sync {
    /// Fetch the raw JSON document for a LinkedIn URL.
    ///
    /// `Ok(None)` means the API answered without usable data (e.g. 400 for an
    /// unknown company, any other non-200). Transport, credential and JSON
    /// failures are errors.
    async fn enrich(
        &self,
        mode: EnrichmentMode,
        linkedin_url: &str,
    ) -> Result<Option<Value>, DomainError>;
}

/// Chat-completion style language model.
#[async_trait::async_trait]
pub trait LlmPort: Send + Sync {
    /// Send role-tagged messages to `model` and return the first completion's text.
    async fn complete(&self, model: &str, messages: &[ChatMessage])
    -> Result<String, DomainError>;
}

/// Local mail client automation.
#[async_trait::async_trait]
pub trait MailPort: Send + Sync {
    /// Hand a draft to the mail client. `bcc` is a comma-joined address list.
    async fn send_bcc(&self, bcc: &str, subject: &str, body: &str) -> Result<(), DomainError>;
}
