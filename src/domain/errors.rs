//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// A secret the operation needs was not provided (env or config).
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("enrichment API error: {0}")]
    Enrichment(String),

    /// The enrichment envelope cannot be turned into a profile. Aborts the current URL.
    #[error("malformed profile data: {0}")]
    MalformedProfile(String),

    #[error("language model error: {0}")]
    Llm(String),

    #[error("template file not found: {0}")]
    TemplateNotFound(String),

    #[error("template error: {0}")]
    Template(String),

    #[error("mail dispatch failed: {0}")]
    Dispatch(String),

    #[error("input error: {0}")]
    Input(String),
}
