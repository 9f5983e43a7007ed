//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives the outreach use case.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive loop: one profile URL per iteration until the
    /// operator terminates the session.
    async fn run(&self) -> Result<(), DomainError>;
}
