use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;

use super::*;

// =========================================================================
// Stub provider
// =========================================================================

#[derive(Clone, Debug, Default)]
struct Captured {
    api_key: Option<String>,
    agent_id: Option<String>,
}

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: &'static str,
    captured: Arc<Mutex<Vec<Captured>>>,
}

async fn stub_handler(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, &'static str) {
    let api_key = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    stub.captured
        .lock()
        .unwrap()
        .push(Captured { api_key, agent_id: query.get("agent_id").cloned() });
    (stub.status, stub.body)
}

/// Serve a one-route stub on an ephemeral port and return its base URL.
async fn spawn_stub(status: StatusCode, body: &'static str) -> (String, Arc<Mutex<Vec<Captured>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let stub = Stub { status, body, captured: Arc::clone(&captured) };
    let app = Router::new()
        .route(SIGNED_URL_PATH, get(stub_handler))
        .with_state(stub);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), captured)
}

fn client_for(base_url: String, agent_id: &str) -> ElevenLabsClient {
    ElevenLabsClient::new(VoiceConfig { api_key: "xi-secret".into(), agent_id: agent_id.into(), base_url }).unwrap()
}

// =========================================================================
// parse_signed_url
// =========================================================================

#[test]
fn parse_signed_url_extracts_field() {
    let url = parse_signed_url(r#"{"signed_url":"wss://example.test/session?token=abc"}"#).unwrap();
    assert_eq!(url, "wss://example.test/session?token=abc");
}

#[test]
fn parse_signed_url_ignores_extra_fields() {
    let url = parse_signed_url(r#"{"signed_url":"wss://x","expires":30}"#).unwrap();
    assert_eq!(url, "wss://x");
}

#[test]
fn parse_signed_url_missing_field_is_parse_error() {
    let err = parse_signed_url(r#"{"url":"wss://x"}"#).unwrap_err();
    assert!(matches!(err, VoiceError::ApiParse(_)));
}

#[test]
fn parse_signed_url_rejects_non_json() {
    assert!(matches!(parse_signed_url("<html>"), Err(VoiceError::ApiParse(_))));
}

// =========================================================================
// HTTP behavior against a stub provider
// =========================================================================

#[tokio::test]
async fn signed_url_sends_key_header_and_agent_id() {
    let (base, captured) = spawn_stub(StatusCode::OK, r#"{"signed_url":"wss://stub/abc"}"#).await;
    let client = client_for(base, "agent_42");

    let url = client.signed_url().await.unwrap();
    assert_eq!(url, "wss://stub/abc");

    let calls = captured.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].api_key.as_deref(), Some("xi-secret"));
    assert_eq!(calls[0].agent_id.as_deref(), Some("agent_42"));
}

#[tokio::test]
async fn signed_url_sends_empty_agent_id_when_unset() {
    let (base, captured) = spawn_stub(StatusCode::OK, r#"{"signed_url":"wss://stub/abc"}"#).await;
    let client = client_for(base, "");
    assert_eq!(client.agent_id(), "");

    client.signed_url().await.unwrap();
    assert_eq!(captured.lock().unwrap()[0].agent_id.as_deref(), Some(""));
}

#[tokio::test]
async fn signed_url_reports_upstream_status() {
    let (base, _captured) = spawn_stub(StatusCode::UNAUTHORIZED, r#"{"detail":"invalid key"}"#).await;
    let client = client_for(base, "agent");

    match client.signed_url().await {
        Err(VoiceError::ApiResponse { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid key"));
        }
        other => panic!("expected ApiResponse, got {other:?}"),
    }
}

/// Answer one connection with `raw` verbatim, then hang up.
async fn spawn_raw_stub(raw: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;
        socket.write_all(raw.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn signed_url_reports_upstream_status_when_body_is_truncated() {
    let base = spawn_raw_stub("HTTP/1.1 403 Forbidden\r\nContent-Length: 100\r\n\r\nshort").await;
    let client = client_for(base, "agent");

    match client.signed_url().await {
        Err(VoiceError::ApiResponse { status, .. }) => assert_eq!(status, 403),
        other => panic!("expected ApiResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn signed_url_makes_exactly_one_request_on_failure() {
    let (base, captured) = spawn_stub(StatusCode::SERVICE_UNAVAILABLE, "busy").await;
    let client = client_for(base, "agent");

    assert!(client.signed_url().await.is_err());
    assert_eq!(captured.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn signed_url_malformed_success_body_is_parse_error() {
    let (base, _captured) = spawn_stub(StatusCode::OK, "not json").await;
    let client = client_for(base, "agent");
    assert!(matches!(client.signed_url().await, Err(VoiceError::ApiParse(_))));
}

#[tokio::test]
async fn signed_url_unreachable_provider_is_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{addr}"), "agent");
    assert!(matches!(client.signed_url().await, Err(VoiceError::ApiRequest(_))));
}
