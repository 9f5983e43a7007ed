//! LLM adapter module. Implements LlmPort.
//!
//! Provides an OpenAI-compatible adapter and a scripted adapter for testing.

pub mod mock_adapter;
pub mod openai_adapter;

pub use mock_adapter::{RecordedCall, ScriptedLlmAdapter};
pub use openai_adapter::OpenAiAdapter;
