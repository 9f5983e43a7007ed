//! Cross-cutting concerns shared by adapters and use cases.

pub mod config;
