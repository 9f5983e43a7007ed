//! Scripted LLM adapter for testing without API calls.
//!
//! Replies are matched by substring against the request's messages and every
//! call is recorded for later inspection.

use crate::domain::{ChatMessage, DomainError};
use crate::ports::LlmPort;
use std::sync::Mutex;
use tracing::info;

/// A request as the adapter received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

struct Rule {
    needle: String,
    reply: Result<String, String>,
}

/// Scripted LLM adapter.
///
/// The first rule whose needle appears in any message content wins. Unmatched
/// requests fail with `DomainError::Llm`.
#[derive(Default)]
pub struct ScriptedLlmAdapter {
    rules: Vec<Rule>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedLlmAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `reply` whenever a message contains `needle`.
    pub fn reply(mut self, needle: impl Into<String>, reply: impl Into<String>) -> Self {
        self.rules.push(Rule {
            needle: needle.into(),
            reply: Ok(reply.into()),
        });
        self
    }

    /// Fail with `reason` whenever a message contains `needle`.
    pub fn fail(mut self, needle: impl Into<String>, reason: impl Into<String>) -> Self {
        self.rules.push(Rule {
            needle: needle.into(),
            reply: Err(reason.into()),
        });
        self
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl LlmPort for ScriptedLlmAdapter {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, DomainError> {
        info!(model, messages = messages.len(), "[MOCK] completion request");
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                model: model.to_string(),
                messages: messages.to_vec(),
            });
        }

        let rule = self.rules.iter().find(|r| {
            messages
                .iter()
                .any(|m| m.content.contains(r.needle.as_str()))
        });
        match rule {
            Some(r) => r.reply.clone().map_err(DomainError::Llm),
            None => Err(DomainError::Llm("no scripted reply".to_string())),
        }
    }
}
