//! Infrastructure adapters. Implement outbound ports.
//!
//! Enrichment API, language model, mail script, terminal UI. Map errors to DomainError.

pub mod enrichment;
pub mod llm;
pub mod mail;
pub mod ui;
