//! ElevenLabs Conversational AI client.
//!
//! Only one call is needed: exchange the server-held API key for a signed
//! WebSocket URL the browser can use to open a realtime voice session. The
//! key never leaves the server.

use serde::Deserialize;

use super::config::VoiceConfig;
use super::types::{SignedUrlSource, VoiceError};

const SIGNED_URL_PATH: &str = "/v1/convai/conversation/get_signed_url";
const API_KEY_HEADER: &str = "xi-api-key";

pub struct ElevenLabsClient {
    http: reqwest::Client,
    api_key: String,
    agent_id: String,
    base_url: String,
}

impl ElevenLabsClient {
    /// Build a client from parsed config. Uses the HTTP client's default
    /// timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: VoiceConfig) -> Result<Self, VoiceError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| VoiceError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key: config.api_key, agent_id: config.agent_id, base_url: config.base_url })
    }

    /// Agent the signed URLs are issued for (may be empty).
    #[must_use]
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    async fn fetch_signed_url(&self) -> Result<String, VoiceError> {
        let url = format!("{}{SIGNED_URL_PATH}", self.base_url);
        let response = self
            .http
            .get(url)
            .query(&[("agent_id", self.agent_id.as_str())])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| VoiceError::ApiRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The status is forwarded even when the body cannot be read.
            let body = response.text().await.unwrap_or_default();
            return Err(VoiceError::ApiResponse { status: status.as_u16(), body });
        }
        let text = response
            .text()
            .await
            .map_err(|e| VoiceError::ApiRequest(e.to_string()))?;
        parse_signed_url(&text)
    }
}

#[async_trait::async_trait]
impl SignedUrlSource for ElevenLabsClient {
    async fn signed_url(&self) -> Result<String, VoiceError> {
        self.fetch_signed_url().await
    }
}

#[derive(Deserialize)]
struct SignedUrlBody {
    signed_url: String,
}

/// Extract `signed_url` from a provider response body.
pub(crate) fn parse_signed_url(body: &str) -> Result<String, VoiceError> {
    serde_json::from_str::<SignedUrlBody>(body)
        .map(|parsed| parsed.signed_url)
        .map_err(|e| VoiceError::ApiParse(e.to_string()))
}

#[cfg(test)]
#[path = "elevenlabs_test.rs"]
mod tests;
