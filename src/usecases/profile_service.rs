//! Profile normalization. Turns one enrichment response into a `Profile`.
//!
//! Company lookups, gender and mission degrade to defaults; a malformed
//! envelope aborts.

use crate::adapters::enrichment::{CompanyFacts, PersonRecord, company_facts};
use crate::domain::{DomainError, Outcome, Profile};
use crate::ports::{EnrichmentMode, EnrichmentPort};
use crate::shared::config::OutreachSettings;
use crate::usecases::AttributeEnricher;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ProfileNormalizer {
    enrichment: Arc<dyn EnrichmentPort>,
    enricher: AttributeEnricher,
    settings: Arc<OutreachSettings>,
}

impl ProfileNormalizer {
    pub fn new(
        enrichment: Arc<dyn EnrichmentPort>,
        enricher: AttributeEnricher,
        settings: Arc<OutreachSettings>,
    ) -> Self {
        Self {
            enrichment,
            enricher,
            settings,
        }
    }

    /// Build a profile from a raw profile response.
    ///
    /// Positions and schools are capped to the first three in source order.
    /// Current positions get a company lookup for industry and domain; only the
    /// first current position gets a mission.
    pub async fn normalize(&self, raw: &Value) -> Result<Profile, DomainError> {
        let record = PersonRecord::from_envelope(raw)?;

        let mut profile = Profile::new();
        profile.first_name = record.first_name.clone().unwrap_or_default();
        profile.last_name = record.last_name.clone().unwrap_or_default();
        profile.headline = record.headline.clone().unwrap_or_default();
        profile.location = record.location.clone().unwrap_or_default();
        profile.bio = record.summary.clone().unwrap_or_default();

        if !profile.first_name.is_empty() {
            profile.female = self
                .enricher
                .is_female_name(&profile.first_name)
                .await
                .or_default_logged("gender");
        }

        for position in record.positions() {
            let mut job = position.to_employment();
            if !position.is_current() {
                profile.past_jobs.push(job);
                continue;
            }
            if let Some(facts) = self.lookup_company(position.company_url()).await {
                job.industry = facts.industry;
                if let Some(domain) = facts.domain {
                    profile.add_domain(domain);
                }
            }
            profile.current_jobs.push(job);
        }

        if let Some(job) = profile.current_jobs.first_mut() {
            let mission = self
                .enricher
                .company_mission(&job.company)
                .await
                .or_default_logged("mission");
            job.mission = mission;
        }

        for edu in record.education() {
            if edu.is_from(&self.settings.target_institution) {
                profile.alumni = true;
            }
            profile.education.push(edu);
        }

        info!(
            first = %profile.first_name,
            last = %profile.last_name,
            current = profile.current_jobs.len(),
            past = profile.past_jobs.len(),
            education = profile.education.len(),
            domains = profile.domains.len(),
            alumni = profile.alumni,
            "profile normalized"
        );

        Ok(profile)
    }

    async fn lookup_company(&self, company_url: &str) -> Option<CompanyFacts> {
        if company_url.is_empty() {
            debug!("current position has no company URL, skipping lookup");
            return None;
        }
        let outcome = Outcome::from(
            self.enrichment
                .enrich(EnrichmentMode::Company, company_url)
                .await,
        );
        match outcome {
            Outcome::Found(raw) => {
                let facts = company_facts(&raw);
                if facts.is_none() {
                    info!(url = company_url, "company response had no company data");
                }
                facts
            }
            Outcome::Empty => None,
            Outcome::Failed(e) => {
                warn!(url = company_url, error = %e, "company lookup failed");
                None
            }
        }
    }
}
