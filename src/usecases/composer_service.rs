//! Template selection and email drafting.
//!
//! Templates are plain-text documents in the prompts directory. In dynamic
//! mode the model reads the selection policy and names one of them.

use crate::domain::{ChatMessage, DomainError, TaskKind};
use crate::ports::LlmPort;
use crate::shared::config::{OutreachSettings, TemplateMode};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};

pub struct TemplateComposer {
    llm: Arc<dyn LlmPort>,
    settings: Arc<OutreachSettings>,
}

impl TemplateComposer {
    pub fn new(llm: Arc<dyn LlmPort>, settings: Arc<OutreachSettings>) -> Self {
        Self { llm, settings }
    }

    /// Template for this summary: the configured file in fixed mode, the
    /// model's pick in dynamic mode.
    pub async fn choose_template(&self, summary: &str) -> Result<PathBuf, DomainError> {
        match &self.settings.template_mode {
            TemplateMode::Fixed(name) => self.resolve(name).await,
            TemplateMode::Dynamic => self.select_template(summary).await,
        }
    }

    /// Ask the lookup model to name a template, using the selection policy as
    /// system context. The named file must exist.
    pub async fn select_template(&self, summary: &str) -> Result<PathBuf, DomainError> {
        let policy_path = self.settings.prompts_dir.join(&self.settings.selection_file);
        let policy = read_document(&policy_path).await?;

        let model = self.settings.models.model_for(TaskKind::Lookup);
        let messages = [ChatMessage::system(policy), ChatMessage::user(summary)];
        let answer = self.llm.complete(model, &messages).await?;
        let name = answer.trim().to_lowercase();
        debug!(answer = %name, "template selected by model");

        self.resolve(&name).await
    }

    /// Template text, two newlines, then the summary, as one user message to
    /// the drafting model. Returns the reply untouched.
    pub async fn compose(&self, summary: &str, template: &Path) -> Result<String, DomainError> {
        let template_text = read_document(template).await?;
        let prompt = format!("{}\n\n{}", template_text, summary);

        let model = self.settings.models.model_for(TaskKind::Draft);
        let body = self
            .llm
            .complete(model, &[ChatMessage::user(prompt)])
            .await?;
        if body.is_empty() {
            return Err(DomainError::Llm("empty email draft".to_string()));
        }

        info!(template = %template.display(), body_len = body.len(), "email drafted");
        Ok(body)
    }

    async fn resolve(&self, name: &str) -> Result<PathBuf, DomainError> {
        let path = self.settings.prompts_dir.join(name);
        let is_file = !name.is_empty()
            && fs::metadata(&path)
                .await
                .map(|m| m.is_file())
                .unwrap_or(false);
        if !is_file {
            return Err(DomainError::TemplateNotFound(path.display().to_string()));
        }
        Ok(path)
    }
}

/// Read a whole document; the handle is closed before returning.
async fn read_document(path: &Path) -> Result<String, DomainError> {
    fs::read_to_string(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => DomainError::TemplateNotFound(path.display().to_string()),
        _ => DomainError::Template(format!("{}: {}", path.display(), e)),
    })
}
