//! Scrapin enrichment adapter. Implements `EnrichmentPort` over HTTP GET.

use crate::domain::DomainError;
use crate::ports::{EnrichmentMode, EnrichmentPort};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for `{base_url}/{profile|company}?linkedInUrl=..&apikey=..`.
pub struct ScrapinAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ScrapinAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `base_url` - Enrichment root (e.g. "https://api.scrapin.io/enrichment")
    /// * `api_key` - API key; when `None`, every call fails with `MissingCredential`
    /// * `timeout` - Per-request timeout
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Enrichment(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn endpoint(&self, mode: EnrichmentMode) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), mode)
    }

    /// The API sometimes wraps its JSON in parentheses or single quotes.
    fn strip_wrapping(raw: &str) -> &str {
        raw.trim()
            .trim_matches(['(', ')'])
            .trim_matches('\'')
    }
}

#[async_trait::async_trait]
impl EnrichmentPort for ScrapinAdapter {
    async fn enrich(
        &self,
        mode: EnrichmentMode,
        linkedin_url: &str,
    ) -> Result<Option<Value>, DomainError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(DomainError::MissingCredential("SCRAPIN"))?;

        debug!(%mode, url = linkedin_url, "enrichment request");
        let response = self
            .client
            .get(self.endpoint(mode))
            .query(&[("linkedInUrl", linkedin_url), ("apikey", api_key)])
            .send()
            .await
            .map_err(|e| DomainError::Enrichment(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST && mode == EnrichmentMode::Company {
            info!(url = linkedin_url, "company data not found (400)");
            return Ok(None);
        }
        if status != StatusCode::OK {
            warn!(%mode, status = %status, "enrichment request failed");
            return Ok(None);
        }

        let text = response
            .text()
            .await
            .map_err(|e| DomainError::Enrichment(format!("Failed to read body: {}", e)))?;
        let data: Value = serde_json::from_str(Self::strip_wrapping(&text))
            .map_err(|e| DomainError::Enrichment(format!("Failed to decode JSON: {}", e)))?;

        Ok(Some(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_wrapping() {
        assert_eq!(ScrapinAdapter::strip_wrapping(r#"{"a":1}"#), r#"{"a":1}"#);
        assert_eq!(ScrapinAdapter::strip_wrapping(r#"({"a":1})"#), r#"{"a":1}"#);
        assert_eq!(ScrapinAdapter::strip_wrapping(r#"'{"a":1}'"#), r#"{"a":1}"#);
        assert_eq!(
            ScrapinAdapter::strip_wrapping("  ('{\"a\":1}')\n"),
            r#"{"a":1}"#
        );
    }

    #[test]
    fn test_endpoint_appends_mode() {
        let a = ScrapinAdapter::new(
            "https://api.scrapin.io/enrichment/".into(),
            None,
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            a.endpoint(EnrichmentMode::Company),
            "https://api.scrapin.io/enrichment/company"
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_credential_error() {
        let a = ScrapinAdapter::new("http://127.0.0.1:9".into(), None, Duration::from_secs(1))
            .unwrap();
        let err = a
            .enrich(EnrichmentMode::Profile, "https://www.linkedin.com/in/x")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::MissingCredential("SCRAPIN")));
    }
}
