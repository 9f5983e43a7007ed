//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/JSON envelope types here; adapters map into these.

use serde::{Deserialize, Serialize};

/// Source histories may be longer; only the first entries (source order) are kept.
pub const MAX_HISTORY_ENTRIES: usize = 3;

/// One person, normalized from a single enrichment response. Lives for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub location: String,
    pub bio: String,
    pub education: Vec<Education>,
    pub current_jobs: Vec<Employment>,
    pub past_jobs: Vec<Employment>,
    /// Organization email domains, insertion-ordered, no repeats.
    pub domains: Vec<String>,
    pub emails: Vec<String>,
    /// Gender inference result; `false` means male or unsure.
    pub female: bool,
    pub alumni: bool,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an organization domain once. Empty domains are ignored.
    pub fn add_domain(&mut self, domain: impl Into<String>) {
        let domain = domain.into();
        if domain.is_empty() || self.domains.contains(&domain) {
            return;
        }
        self.domains.push(domain);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub field: String,
}

impl Education {
    /// Builds an entry; a field of study identical to the degree is dropped.
    pub fn new(
        school: impl Into<String>,
        degree: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        let degree = degree.into();
        let field = field.into();
        let field = if field == degree { String::new() } else { field };
        Self {
            school: school.into(),
            degree,
            field,
        }
    }

    /// Case-insensitive substring match against the school name.
    pub fn is_from(&self, institution: &str) -> bool {
        !institution.is_empty()
            && self
                .school
                .to_lowercase()
                .contains(&institution.to_lowercase())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employment {
    pub company: String,
    pub title: String,
    pub industry: String,
    pub description: String,
    /// Only ever set on the first current position.
    pub mission: String,
}
