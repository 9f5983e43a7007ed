//! Map raw enrichment JSON to domain values.
//!
//! The API answers with camelCase records; every scalar may be missing, null
//! or of an unexpected type. History entries past the first three are never
//! decoded.

use crate::domain::{DomainError, Education, Employment, MAX_HISTORY_ENTRIES};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
    person: PersonRecord,
}

/// The `person` object of a profile response.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    /// Free-text bio.
    #[serde(default, deserialize_with = "lenient_text")]
    pub summary: Option<String>,
    #[serde(default)]
    positions: Option<Positions>,
    #[serde(default)]
    schools: Option<Schools>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Positions {
    #[serde(default)]
    position_history: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Schools {
    #[serde(default)]
    education_history: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    /// Company page URL; used for the secondary company lookup.
    #[serde(default, deserialize_with = "lenient_text")]
    pub linked_in_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    start_end_date: Option<StartEndDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StartEndDate {
    #[serde(default)]
    end: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EducationRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    school_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    degree_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    field_of_study: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompanyEnvelope {
    #[serde(default)]
    company: Option<CompanyRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompanyRecord {
    #[serde(default)]
    industry: Option<String>,
    #[serde(default)]
    website_url: Option<String>,
}

/// What the normalizer needs from a company response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFacts {
    pub industry: String,
    /// Email domain derived from the website; `None` when no website is listed.
    pub domain: Option<String>,
}

fn text(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}

/// Strings as-is, numbers and booleans stringified, anything else absent.
fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// A value that does not fit `T` counts as absent.
fn lenient<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(d)?;
    Ok(T::deserialize(raw).ok())
}

/// Decode only the first `MAX_HISTORY_ENTRIES` entries; a non-object entry
/// becomes an empty record.
fn first_entries<T>(history: Option<&[Value]>) -> Vec<T>
where
    T: DeserializeOwned + Default,
{
    history
        .unwrap_or_default()
        .iter()
        .take(MAX_HISTORY_ENTRIES)
        .map(|raw| T::deserialize(raw).unwrap_or_default())
        .collect()
}

impl PersonRecord {
    /// Parse the `person` object. A missing or mistyped envelope is a
    /// `MalformedProfile` error; missing inner sections are not.
    pub fn from_envelope(raw: &Value) -> Result<Self, DomainError> {
        ProfileEnvelope::deserialize(raw)
            .map(|env| env.person)
            .map_err(|e| DomainError::MalformedProfile(e.to_string()))
    }

    /// First positions in source order, at most `MAX_HISTORY_ENTRIES`.
    pub fn positions(&self) -> Vec<PositionRecord> {
        first_entries(
            self.positions
                .as_ref()
                .and_then(|p| p.position_history.as_deref()),
        )
    }

    /// First education entries in source order, at most `MAX_HISTORY_ENTRIES`.
    pub fn education(&self) -> Vec<Education> {
        first_entries::<EducationRecord>(
            self.schools
                .as_ref()
                .and_then(|s| s.education_history.as_deref()),
        )
        .iter()
        .map(|e| {
            Education::new(
                text(&e.school_name),
                text(&e.degree_name),
                text(&e.field_of_study),
            )
        })
        .collect()
    }
}

impl PositionRecord {
    /// A position whose end date is missing or falsy is current.
    pub fn is_current(&self) -> bool {
        self.start_end_date
            .as_ref()
            .and_then(|d| d.end.as_ref())
            .is_none_or(is_falsy)
    }

    pub fn company_url(&self) -> &str {
        self.linked_in_url.as_deref().unwrap_or_default()
    }

    pub fn to_employment(&self) -> Employment {
        Employment {
            company: text(&self.company_name),
            title: text(&self.title),
            description: text(&self.description),
            ..Default::default()
        }
    }
}

/// `null`, `false`, `0`, `""`, `[]` and `{}`. Any other value, including an
/// object whose fields are all null, is a real end date.
fn is_falsy(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(m) => m.is_empty(),
    }
}

/// Extract industry and website domain. `None` when the response carries no company object.
pub fn company_facts(raw: &Value) -> Option<CompanyFacts> {
    let company = CompanyEnvelope::deserialize(raw).ok()?.company?;
    let domain = company
        .website_url
        .as_deref()
        .map(domain_from_url)
        .filter(|d| !d.is_empty());
    Some(CompanyFacts {
        industry: text(&company.industry),
        domain,
    })
}

/// `https://www.acme.io/about` → `acme.io`.
pub fn domain_from_url(url: &str) -> String {
    let url = url.trim();
    let rest = url.split_once("://").map_or(url, |(_, r)| r);
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    host.to_lowercase()
}
