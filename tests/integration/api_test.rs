//! HTTP API integration tests
//!
//! Tests for history fetch, submission, health and fallback routes

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use crate::common::{get, post_json, submission, test_config, TestRelay};

#[tokio::test]
async fn test_empty_history() {
    let relay = TestRelay::new().await;

    let (status, body) = relay.request(get("/api/messages")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_post_message_created() {
    let relay = TestRelay::new().await;

    let (status, body) = relay.post_message(submission("alice", "hello")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["userId"], "alice-id");
    assert_eq!(body["text"], "hello");
    assert_eq!(body["avatar"], "");
    assert_eq!(body["attachments"], serde_json::json!([]));
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(chrono::DateTime::parse_from_rfc3339(body["createdAt"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored() {
    let relay = TestRelay::new().await;

    let mut payload = submission("alice", "hello");
    payload["id"] = serde_json::json!("forged");
    payload["createdAt"] = serde_json::json!("1999-01-01T00:00:00Z");
    let (status, body) = relay.post_message(payload).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(body["id"], "forged");
    assert_ne!(body["createdAt"], "1999-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_post_message_missing_username() {
    let relay = TestRelay::new().await;

    let (status, body) = relay
        .post_message(serde_json::json!({ "userId": "u1", "text": "hi" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "invalid" }));
    assert!(relay.history().await.is_empty());
}

#[tokio::test]
async fn test_post_message_without_text_or_attachments() {
    let relay = TestRelay::new().await;

    let (status, body) = relay.post_message(submission("alice", "   ")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "invalid" }));
    assert!(relay.history().await.is_empty());
}

#[tokio::test]
async fn test_post_attachment_only_message() {
    let relay = TestRelay::new().await;

    let payload = serde_json::json!({
        "userId": "u1",
        "username": "alice",
        "text": "",
        "attachments": [
            { "name": "dot.png", "type": "image/png", "url": "data:image/png;base64,iVBORw0KGgo=" }
        ],
    });
    let (status, body) = relay.post_message(payload).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["attachments"][0]["type"], "image/png");

    let history = relay.history().await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].attachments[0].name, "dot.png");
}

#[tokio::test]
async fn test_post_malformed_body() {
    let relay = TestRelay::new().await;

    let (status, body) = relay.request(post_json("/api/messages", "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "invalid" }));
}

#[tokio::test]
async fn test_history_in_submission_order() {
    let relay = TestRelay::new().await;

    for text in ["one", "two", "three"] {
        let (status, _) = relay.post_message(submission("alice", text)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let history = relay.history().await;
    let texts: Vec<&str> = history.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);

    let ids: Vec<i64> = history.iter().map(|m| m.id.parse().unwrap()).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_history_survives_restart() {
    let dir = TempDir::new().unwrap();
    let first = TestRelay::in_dir(dir).await;
    let (_, created) = first.post_message(submission("alice", "persisted")).await;

    let dir = first.dir;
    let second = TestRelay::in_dir(dir).await;
    let history = second.history().await;

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].text, "persisted");
    assert_eq!(history[0].id, created["id"].as_str().unwrap());

    let (_, next) = second.post_message(submission("bob", "after restart")).await;
    let before: i64 = history[0].id.parse().unwrap();
    let after: i64 = next["id"].as_str().unwrap().parse().unwrap();
    assert!(after > before);
}

#[tokio::test]
async fn test_body_limit() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(&dir);
    config.max_body_bytes = 1024;
    let relay = TestRelay::with_config(dir, config).await;

    let oversized = submission("alice", &"x".repeat(4096));
    let (status, _) = relay.post_message(oversized).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(relay.history().await.is_empty());
}

#[tokio::test]
async fn test_health() {
    let relay = TestRelay::new().await;

    let (status, body) = relay.request(get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "status": "ok", "connections": 0 }));
}

#[tokio::test]
async fn test_unknown_route() {
    let relay = TestRelay::new().await;

    let (status, body) = relay.request(get("/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "error": "Not Found", "status": 404 }));
}
