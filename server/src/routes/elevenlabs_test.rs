use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::to_bytes;
use serde_json::Value;

use super::*;
use crate::voice::config::VoiceConfig;
use crate::voice::{ElevenLabsClient, SignedUrlSource};

// =========================================================================
// MockVoice
// =========================================================================

enum Outcome {
    Url(&'static str),
    Status(u16),
    Transport,
    Unparseable,
    MissingKey,
}

struct MockVoice {
    outcome: Outcome,
    calls: AtomicUsize,
}

impl MockVoice {
    fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self { outcome, calls: AtomicUsize::new(0) })
    }
}

#[async_trait::async_trait]
impl SignedUrlSource for MockVoice {
    async fn signed_url(&self) -> Result<String, VoiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            Outcome::Url(url) => Ok(url.to_owned()),
            Outcome::Status(status) => Err(VoiceError::ApiResponse { status, body: "upstream body".into() }),
            Outcome::Transport => Err(VoiceError::ApiRequest("connection reset".into())),
            Outcome::Unparseable => Err(VoiceError::ApiParse("missing field `signed_url`".into())),
            Outcome::MissingKey => Err(VoiceError::MissingApiKey { var: "ELEVEN_LABS_API_KEY".into() }),
        }
    }
}

async fn call(state: AppState) -> (StatusCode, Value) {
    let response = signed_url(State(state)).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn state_with(mock: &Arc<MockVoice>) -> AppState {
    AppState::new(Some(Arc::clone(mock) as Arc<dyn SignedUrlSource>))
}

// =========================================================================
// Handler
// =========================================================================

#[tokio::test]
async fn missing_key_returns_500_with_fixed_message() {
    let (status, body) = call(AppState::default()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "API key is missing" }));
}

#[tokio::test]
async fn success_returns_signed_url_only() {
    let mock = MockVoice::new(Outcome::Url("wss://voice.test/s?token=1"));
    let (status, body) = call(state_with(&mock)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "signed_url": "wss://voice.test/s?token=1" }));
    assert_eq!(mock.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn upstream_status_is_forwarded_unchanged() {
    for code in [400_u16, 401, 403, 404, 422, 429, 500, 503] {
        let mock = MockVoice::new(Outcome::Status(code));
        let (status, body) = call(state_with(&mock)).await;
        assert_eq!(status.as_u16(), code);
        assert_eq!(body, serde_json::json!({ "error": "Failed to fetch signed URL" }));
    }
}

#[tokio::test]
async fn upstream_body_is_not_leaked() {
    let mock = MockVoice::new(Outcome::Status(401));
    let (_status, body) = call(state_with(&mock)).await;
    assert!(!body.to_string().contains("upstream body"));
}

#[tokio::test]
async fn transport_failure_returns_generic_500() {
    let mock = MockVoice::new(Outcome::Transport);
    let (status, body) = call(state_with(&mock)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "An error occurred" }));
}

#[tokio::test]
async fn unparseable_body_returns_generic_500() {
    let mock = MockVoice::new(Outcome::Unparseable);
    let (status, body) = call(state_with(&mock)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "An error occurred");
}

#[tokio::test]
async fn missing_key_error_from_source_maps_to_fixed_message() {
    let mock = MockVoice::new(Outcome::MissingKey);
    let (status, body) = call(state_with(&mock)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "API key is missing");
}

// =========================================================================
// voice_error_response
// =========================================================================

#[test]
fn voice_error_response_maps_statuses() {
    let forwarded = voice_error_response(&VoiceError::ApiResponse { status: 418, body: String::new() });
    assert_eq!(forwarded.status(), StatusCode::IM_A_TEAPOT);

    let build = voice_error_response(&VoiceError::HttpClientBuild("tls".into()));
    assert_eq!(build.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn voice_error_response_invalid_status_falls_back_to_bad_gateway() {
    let response = voice_error_response(&VoiceError::ApiResponse { status: 42, body: String::new() });
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

// =========================================================================
// End to end: handler + real client + stub provider
// =========================================================================

#[tokio::test]
async fn real_client_forwards_provider_status() {
    use axum::Router;
    use axum::routing::get;

    let app = Router::new().route(
        "/v1/convai/conversation/get_signed_url",
        get(|| async { (StatusCode::FORBIDDEN, r#"{"detail":"quota"}"#) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = VoiceConfig::from_vars(Some("key".into()), None, Some(format!("http://{addr}"))).unwrap();
    let client = ElevenLabsClient::new(config).unwrap();
    let voice: Arc<dyn SignedUrlSource> = Arc::new(client);
    let state = AppState::new(Some(voice));

    let (status, body) = call(state).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Failed to fetch signed URL");
}
