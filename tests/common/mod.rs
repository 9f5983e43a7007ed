//! In-memory port doubles and fixtures shared by the integration tests.

#![allow(dead_code)]

use cold_outreach::domain::DomainError;
use cold_outreach::ports::{EnrichmentMode, EnrichmentPort, MailPort};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

pub const JANE_URL: &str = "https://www.linkedin.com/in/janedoe";
pub const ACME_URL: &str = "https://www.linkedin.com/company/acme";
pub const GLOBEX_URL: &str = "https://www.linkedin.com/company/globex";

enum StubReply {
    Data(Value),
    Empty,
    Fail(String),
}

/// Enrichment API double keyed by (mode, url). Unknown keys answer `Ok(None)`.
#[derive(Default)]
pub struct StubEnrichment {
    replies: HashMap<(&'static str, String), StubReply>,
    calls: Mutex<Vec<(EnrichmentMode, String)>>,
}

impl StubEnrichment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(mut self, url: &str, data: Value) -> Self {
        self.replies
            .insert(("profile", url.to_string()), StubReply::Data(data));
        self
    }

    pub fn company(mut self, url: &str, data: Value) -> Self {
        self.replies
            .insert(("company", url.to_string()), StubReply::Data(data));
        self
    }

    pub fn company_empty(mut self, url: &str) -> Self {
        self.replies
            .insert(("company", url.to_string()), StubReply::Empty);
        self
    }

    pub fn company_fails(mut self, url: &str) -> Self {
        self.replies.insert(
            ("company", url.to_string()),
            StubReply::Fail("connection reset".to_string()),
        );
        self
    }

    pub fn calls(&self) -> Vec<(EnrichmentMode, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EnrichmentPort for StubEnrichment {
    async fn enrich(
        &self,
        mode: EnrichmentMode,
        linkedin_url: &str,
    ) -> Result<Option<Value>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((mode, linkedin_url.to_string()));
        match self.replies.get(&(mode.as_str(), linkedin_url.to_string())) {
            Some(StubReply::Data(v)) => Ok(Some(v.clone())),
            Some(StubReply::Empty) | None => Ok(None),
            Some(StubReply::Fail(reason)) => Err(DomainError::Enrichment(reason.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub bcc: String,
    pub subject: String,
    pub body: String,
}

/// Mail double that records every send; optionally fails each one.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<SentMail>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MailPort for RecordingMailer {
    async fn send_bcc(&self, bcc: &str, subject: &str, body: &str) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(SentMail {
            bcc: bcc.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        if self.fail {
            return Err(DomainError::Dispatch("exit status: 1".to_string()));
        }
        Ok(())
    }
}

/// Jane Doe: current at Acme, previously at Globex, Stanford + Berkeley.
pub fn jane_profile() -> Value {
    json!({
        "success": true,
        "person": {
            "firstName": "Jane",
            "lastName": "Doe",
            "headline": "Founder @ Acme",
            "location": "San Francisco Bay Area",
            "summary": "Building smarter anvils.",
            "positions": {
                "positionsCount": 2,
                "positionHistory": [
                    {
                        "companyName": "Acme",
                        "title": "CEO",
                        "description": "Running the show.",
                        "linkedInUrl": ACME_URL,
                        "startEndDate": {"start": {"month": 1, "year": 2021}, "end": null}
                    },
                    {
                        "companyName": "Globex",
                        "title": "Engineer",
                        "linkedInUrl": GLOBEX_URL,
                        "startEndDate": {
                            "start": {"month": 6, "year": 2016},
                            "end": {"month": 12, "year": 2020}
                        }
                    }
                ]
            },
            "schools": {
                "educationsCount": 2,
                "educationHistory": [
                    {"schoolName": "Stanford University", "degreeName": "MS", "fieldOfStudy": "Computer Science"},
                    {"schoolName": "UC Berkeley", "degreeName": "BS", "fieldOfStudy": "BS"}
                ]
            }
        }
    })
}

pub fn acme_company() -> Value {
    json!({
        "success": true,
        "company": {
            "name": "Acme",
            "industry": "Software",
            "websiteUrl": "https://www.acme.io/about"
        }
    })
}

pub const SELECTION_POLICY: &str = "Choose a template for this person. Answer with a file name.";
pub const VC_TEMPLATE: &str = "Write a warm note to an investor.";

/// Write the selection policy and one template into `dir`.
pub fn write_prompts(dir: &Path) {
    std::fs::write(dir.join("prompt-selection.txt"), SELECTION_POLICY).unwrap();
    std::fs::write(dir.join("vc.txt"), VC_TEMPLATE).unwrap();
}
