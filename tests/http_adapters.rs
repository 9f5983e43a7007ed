//! HTTP adapter tests against a local mock server.

use cold_outreach::adapters::enrichment::ScrapinAdapter;
use cold_outreach::adapters::llm::OpenAiAdapter;
use cold_outreach::domain::{ChatMessage, DomainError};
use cold_outreach::ports::{EnrichmentMode, EnrichmentPort, LlmPort};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROFILE_URL: &str = "https://www.linkedin.com/in/janedoe";
const COMPANY_URL: &str = "https://www.linkedin.com/company/acme";

fn scrapin(server: &MockServer, key: Option<&str>) -> ScrapinAdapter {
    ScrapinAdapter::new(
        format!("{}/enrichment", server.uri()),
        key.map(String::from),
        Duration::from_secs(5),
    )
    .expect("client")
}

fn openai(server: &MockServer) -> OpenAiAdapter {
    OpenAiAdapter::new(
        format!("{}/v1/chat/completions", server.uri()),
        Some("sk-test".to_string()),
        Duration::from_secs(5),
    )
    .expect("client")
}

#[tokio::test]
async fn test_profile_request_shape_and_wrapped_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/enrichment/profile"))
        .and(query_param("linkedInUrl", PROFILE_URL))
        .and(query_param("apikey", "scr-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"('{"person": {"firstName": "Jane"}}')"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let data = scrapin(&server, Some("scr-key"))
        .enrich(EnrichmentMode::Profile, PROFILE_URL)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(data["person"]["firstName"], "Jane");
}

#[tokio::test]
async fn test_company_400_is_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/enrichment/company"))
        .respond_with(ResponseTemplate::new(400).set_body_string("not found"))
        .mount(&server)
        .await;

    let out = scrapin(&server, Some("k"))
        .enrich(EnrichmentMode::Company, COMPANY_URL)
        .await
        .unwrap();
    assert!(out.is_none());
}

#[tokio::test]
async fn test_other_statuses_are_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/enrichment/profile"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/enrichment/company"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let adapter = scrapin(&server, Some("k"));
    assert!(
        adapter
            .enrich(EnrichmentMode::Profile, PROFILE_URL)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        adapter
            .enrich(EnrichmentMode::Company, COMPANY_URL)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_bad_json_is_enrichment_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/enrichment/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = scrapin(&server, Some("k"))
        .enrich(EnrichmentMode::Profile, PROFILE_URL)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Enrichment(_)));
}

#[tokio::test]
async fn test_missing_scrapin_key_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = scrapin(&server, None)
        .enrich(EnrichmentMode::Profile, PROFILE_URL)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::MissingCredential(_)));
}

#[tokio::test]
async fn test_completion_request_and_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_json(serde_json::json!({
            "model": "gpt-4o",
            "messages": [
                {"role": "system", "content": "policy"},
                {"role": "user", "content": "summary"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "vc.txt"},
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = openai(&server)
        .complete(
            "gpt-4o",
            &[ChatMessage::system("policy"), ChatMessage::user("summary")],
        )
        .await
        .unwrap();
    assert_eq!(reply, "vc.txt");
}

#[tokio::test]
async fn test_completion_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"error": {"message": "bad key"}}"#),
        )
        .mount(&server)
        .await;

    let err = openai(&server)
        .complete("gpt-4o", &[ChatMessage::user("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Llm(msg) if msg.contains("401")));
}

#[tokio::test]
async fn test_completion_without_choices() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .mount(&server)
        .await;

    let err = openai(&server)
        .complete("gpt-4o", &[ChatMessage::user("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Llm(_)));
}
