//! Integration tests for `ScoringClient` using wiremock HTTP mocks.

use sojourn_relevance::{ScoringClient, ScoringError, ScoutContext, VendorForScoring};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ScoringClient {
    ScoringClient::with_base_url("test-key", "gpt-4o-mini", 30, base_url)
        .expect("client construction should not fail")
}

fn vendor(name: &str) -> VendorForScoring {
    VendorForScoring {
        name: name.to_string(),
        address: "Jalan Raya 1, Ubud".to_string(),
        website: None,
        rating: Some(4.2),
        review_count: Some(31),
        email: format!("info@{}.id", name.to_lowercase().replace(' ', "-")),
    }
}

fn context() -> ScoutContext {
    ScoutContext {
        category: "Catering".to_string(),
        location: "Ubud, Bali".to_string(),
        retreat_description: None,
    }
}

fn chat_reply(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
}

#[tokio::test]
async fn score_vendors_sends_one_batched_call_and_parses_reply() {
    let server = MockServer::start().await;

    let content = r#"[
        {"name": "Warung A", "relevance_score": 91, "relevance_reason": "Caters plant-based retreat menus."},
        {"name": "Warung B", "relevance_score": 64, "relevance_reason": "General catering, less retreat focus."}
    ]"#;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_string_contains("Warung A"))
        .and(body_string_contains("Warung B"))
        .and(body_string_contains("gpt-4o-mini"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(content)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let scores = client
        .score_vendors(&[vendor("Warung A"), vendor("Warung B")], &context())
        .await
        .expect("should parse scores");

    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].name, "Warung A");
    assert_eq!(scores[0].relevance_score, 91);
    assert_eq!(scores[1].relevance_score, 64);
}

#[tokio::test]
async fn score_vendors_accepts_fenced_reply() {
    let server = MockServer::start().await;

    let content = "```json\n[{\"name\": \"Warung A\", \"relevance_score\": 77, \"relevance_reason\": \"Good fit.\"}]\n```";

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(content)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let scores = client
        .score_vendors(&[vendor("Warung A")], &context())
        .await
        .expect("fenced reply should parse");

    assert_eq!(scores[0].relevance_score, 77);
}

#[tokio::test]
async fn empty_vendor_list_skips_the_service_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("[]")))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let scores = client
        .score_vendors(&[], &context())
        .await
        .expect("empty input is a no-op");
    assert!(scores.is_empty());
}

#[tokio::test]
async fn unparseable_reply_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_reply("I'd rather not score these vendors.")),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .score_vendors(&[vendor("Warung A")], &context())
        .await
        .expect_err("prose-only reply should fail");
    assert!(matches!(err, ScoringError::Parse { .. }), "got {err:?}");
}

#[tokio::test]
async fn empty_choices_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "chatcmpl-2",
            "choices": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .score_vendors(&[vendor("Warung A")], &context())
        .await
        .expect_err("empty choices should fail");
    assert!(matches!(err, ScoringError::Api(_)), "got {err:?}");
}

#[tokio::test]
async fn transport_failure_is_an_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .score_vendors(&[vendor("Warung A")], &context())
        .await
        .expect_err("503 should fail");
    assert!(matches!(err, ScoringError::Http(_)), "got {err:?}");
}
