//! Application configuration. API credentials, model tiers, templates, dispatch.

use crate::domain::TaskKind;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TARGET_INSTITUTION: &str = "Stanford";
pub const DEFAULT_ALUMNI_DOMAIN: &str = "alumni.stanford.edu";
pub const DEFAULT_SUBJECT_LINE: &str = "Stanford student reaching out";
pub const DEFAULT_TEMPLATE_FILE: &str = "vc.txt";
pub const DEFAULT_SELECTION_FILE: &str = "prompt-selection.txt";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// School-name substring that marks a profile as a fellow alum. Read from OUTREACH_TARGET_INSTITUTION.
    #[serde(default)]
    pub target_institution: Option<String>,

    /// Email domain guessed for alumni (e.g. alumni.stanford.edu). Read from OUTREACH_ALUMNI_DOMAIN.
    #[serde(default)]
    pub alumni_domain: Option<String>,

    #[serde(default)]
    pub subject_line: Option<String>,

    /// `true` lets the model pick a template per profile; `false` always uses `template_file`.
    #[serde(default)]
    pub multiple_prompts: Option<bool>,

    #[serde(default)]
    pub template_file: Option<String>,

    /// Directory holding template documents and the selection policy. Read from OUTREACH_PROMPTS_DIR.
    #[serde(default)]
    pub prompts_dir: Option<String>,

    #[serde(default)]
    pub selection_file: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Language model
    // ─────────────────────────────────────────────────────────────────────────
    /// OpenAI API key. Read from OUTREACH_OPENAI_API_KEY or OPENAI.
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// Chat completions endpoint. Defaults to OpenAI.
    #[serde(default)]
    pub llm_api_url: Option<String>,

    /// Small model for binary classification.
    #[serde(default)]
    pub small_model: Option<String>,

    /// Medium model for general-knowledge lookups.
    #[serde(default)]
    pub medium_model: Option<String>,

    /// Larger model for drafting the email.
    #[serde(default)]
    pub large_model: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Enrichment API
    // ─────────────────────────────────────────────────────────────────────────
    /// Scrapin API key. Read from OUTREACH_SCRAPIN_API_KEY or SCRAPIN.
    #[serde(default)]
    pub scrapin_api_key: Option<String>,

    /// Base URL; the mode (`profile` / `company`) is appended as a path segment.
    #[serde(default)]
    pub enrichment_api_url: Option<String>,

    /// HTTP timeout in seconds for enrichment and LLM calls (default 60).
    #[serde(default)]
    pub http_timeout_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Mail dispatch
    // ─────────────────────────────────────────────────────────────────────────
    /// Program that runs the dispatch script (default `osascript`).
    #[serde(default)]
    pub mail_runner: Option<String>,

    #[serde(default)]
    pub mail_script: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("OUTREACH").try_parsing(true));
        if let Ok(path) = std::env::var("OUTREACH_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn target_institution_or_default(&self) -> String {
        self.target_institution
            .clone()
            .unwrap_or_else(|| DEFAULT_TARGET_INSTITUTION.to_string())
    }

    pub fn alumni_domain_or_default(&self) -> String {
        self.alumni_domain
            .clone()
            .unwrap_or_else(|| DEFAULT_ALUMNI_DOMAIN.to_string())
    }

    pub fn subject_line_or_default(&self) -> String {
        self.subject_line
            .clone()
            .unwrap_or_else(|| DEFAULT_SUBJECT_LINE.to_string())
    }

    /// Dynamic selection unless explicitly disabled.
    pub fn template_mode(&self) -> TemplateMode {
        if self.multiple_prompts.unwrap_or(true) {
            TemplateMode::Dynamic
        } else {
            TemplateMode::Fixed(
                self.template_file
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TEMPLATE_FILE.to_string()),
            )
        }
    }

    pub fn prompts_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.prompts_dir.as_deref().unwrap_or("./prompts"))
    }

    pub fn selection_file_or_default(&self) -> String {
        self.selection_file
            .clone()
            .unwrap_or_else(|| DEFAULT_SELECTION_FILE.to_string())
    }

    pub fn model_tiers(&self) -> ModelTiers {
        let d = ModelTiers::default();
        ModelTiers {
            classify: self.small_model.clone().unwrap_or(d.classify),
            lookup: self.medium_model.clone().unwrap_or(d.lookup),
            draft: self.large_model.clone().unwrap_or(d.draft),
        }
    }

    /// Returns the OpenAI key from config or the OPENAI env var.
    pub fn openai_api_key(&self) -> Option<String> {
        self.openai_api_key
            .clone()
            .or_else(|| std::env::var("OPENAI").ok())
            .filter(|k| !k.is_empty())
    }

    pub fn llm_api_url_or_default(&self) -> String {
        self.llm_api_url
            .clone()
            .unwrap_or_else(|| "https://api.openai.com/v1/chat/completions".to_string())
    }

    /// Returns the Scrapin key from config or the SCRAPIN env var.
    pub fn scrapin_api_key(&self) -> Option<String> {
        self.scrapin_api_key
            .clone()
            .or_else(|| std::env::var("SCRAPIN").ok())
            .filter(|k| !k.is_empty())
    }

    pub fn enrichment_api_url_or_default(&self) -> String {
        self.enrichment_api_url
            .clone()
            .unwrap_or_else(|| "https://api.scrapin.io/enrichment".to_string())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs.unwrap_or(60))
    }

    pub fn mail_runner_or_default(&self) -> String {
        self.mail_runner
            .clone()
            .unwrap_or_else(|| "osascript".to_string())
    }

    pub fn mail_script_or_default(&self) -> PathBuf {
        PathBuf::from(
            self.mail_script
                .as_deref()
                .unwrap_or("./scripts/guess_send_email.applescript"),
        )
    }

    /// Build the settings every component reads from. Call once at startup.
    pub fn outreach_settings(&self) -> OutreachSettings {
        OutreachSettings {
            target_institution: self.target_institution_or_default(),
            alumni_domain: self.alumni_domain_or_default(),
            subject_line: self.subject_line_or_default(),
            template_mode: self.template_mode(),
            prompts_dir: self.prompts_dir_or_default(),
            selection_file: self.selection_file_or_default(),
            models: self.model_tiers(),
        }
    }
}

/// Task kind → model identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTiers {
    pub classify: String,
    pub lookup: String,
    pub draft: String,
}

impl ModelTiers {
    pub fn model_for(&self, kind: TaskKind) -> &str {
        match kind {
            TaskKind::Classify => &self.classify,
            TaskKind::Lookup => &self.lookup,
            TaskKind::Draft => &self.draft,
        }
    }
}

impl Default for ModelTiers {
    fn default() -> Self {
        Self {
            classify: "gpt-3.5-turbo".to_string(),
            lookup: "gpt-4o".to_string(),
            draft: "o1-mini".to_string(),
        }
    }
}

/// How the drafting template is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateMode {
    /// Always use this file from the prompts directory.
    Fixed(String),
    /// Ask the model to pick a file using the selection policy.
    Dynamic,
}

/// Read-only run settings, shared by every component.
#[derive(Debug, Clone)]
pub struct OutreachSettings {
    pub target_institution: String,
    pub alumni_domain: String,
    pub subject_line: String,
    pub template_mode: TemplateMode,
    pub prompts_dir: PathBuf,
    pub selection_file: String,
    pub models: ModelTiers,
}

impl Default for OutreachSettings {
    fn default() -> Self {
        AppConfig::default().outreach_settings()
    }
}
