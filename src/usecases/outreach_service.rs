//! Outreach service. Runs one profile URL end to end.
//!
//! fetch → normalize → summarize → choose template → compose → guess
//! addresses → dispatch. Any error returned here aborts only this URL.

use crate::domain::email_candidates::candidates_for;
use crate::domain::{DomainError, Outcome, Profile, summary};
use crate::ports::{EnrichmentMode, EnrichmentPort, LlmPort, MailPort};
use crate::shared::config::OutreachSettings;
use crate::usecases::{AttributeEnricher, ProfileNormalizer, TemplateComposer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// What happened at the send step. None of these abort the session.
#[derive(Debug)]
pub enum DispatchOutcome {
    Sent { recipients: usize },
    /// No domain and not an alum: nothing to send to.
    NoCandidates,
    Failed(DomainError),
}

/// Everything produced for one profile.
#[derive(Debug)]
pub struct OutreachReport {
    pub profile: Profile,
    pub summary: String,
    pub template: PathBuf,
    pub body: String,
    pub dispatch: DispatchOutcome,
}

pub struct OutreachService {
    enrichment: Arc<dyn EnrichmentPort>,
    normalizer: ProfileNormalizer,
    composer: TemplateComposer,
    mail: Arc<dyn MailPort>,
    settings: Arc<OutreachSettings>,
}

impl OutreachService {
    /// Wire the pipeline.
    ///
    /// # Arguments
    /// * `enrichment` - Profile/company enrichment API
    /// * `llm` - Language model used by every enricher and the composer
    /// * `mail` - Mail dispatcher
    /// * `settings` - Run settings, shared read-only
    pub fn new(
        enrichment: Arc<dyn EnrichmentPort>,
        llm: Arc<dyn LlmPort>,
        mail: Arc<dyn MailPort>,
        settings: Arc<OutreachSettings>,
    ) -> Self {
        let enricher = AttributeEnricher::new(Arc::clone(&llm), Arc::clone(&settings));
        let normalizer =
            ProfileNormalizer::new(Arc::clone(&enrichment), enricher, Arc::clone(&settings));
        let composer = TemplateComposer::new(llm, Arc::clone(&settings));
        Self {
            enrichment,
            normalizer,
            composer,
            mail,
            settings,
        }
    }

    pub async fn process(&self, linkedin_url: &str) -> Result<OutreachReport, DomainError> {
        let raw = Outcome::from(
            self.enrichment
                .enrich(EnrichmentMode::Profile, linkedin_url)
                .await,
        )
        .required(|| DomainError::Enrichment("no profile data returned".to_string()))?;

        let mut profile = self.normalizer.normalize(&raw).await?;
        let summary = summary::render(&profile);
        info!(summary = %summary, "person summary for LLM");

        let template = self.composer.choose_template(&summary).await?;
        let body = self.composer.compose(&summary, &template).await?;

        profile.emails = candidates_for(&profile, &self.settings.alumni_domain);
        let dispatch = self.dispatch(&profile.emails, &body).await;

        Ok(OutreachReport {
            profile,
            summary,
            template,
            body,
            dispatch,
        })
    }

    async fn dispatch(&self, emails: &[String], body: &str) -> DispatchOutcome {
        if emails.is_empty() {
            warn!("no possible emails generated, skipping send");
            return DispatchOutcome::NoCandidates;
        }
        let bcc = emails.join(",");
        match self
            .mail
            .send_bcc(&bcc, &self.settings.subject_line, body)
            .await
        {
            Ok(()) => {
                info!(recipients = emails.len(), "draft handed to mail client");
                DispatchOutcome::Sent {
                    recipients: emails.len(),
                }
            }
            Err(e) => {
                error!(error = %e, "error sending BCC emails");
                DispatchOutcome::Failed(e)
            }
        }
    }
}
