//! Voice: signed-URL access to the conversational voice provider.
//!
//! DESIGN
//! ======
//! The browser never sees the provider API key. It asks this server for a
//! signed URL, and the server makes exactly one provider call per request
//! (no caching, no retry). Handlers hold an `Arc<dyn SignedUrlSource>` so the
//! provider can be mocked in tests.

pub mod config;
pub mod elevenlabs;
pub mod types;

use config::VoiceConfig;
pub use elevenlabs::ElevenLabsClient;
pub use types::{SignedUrlSource, VoiceError};

/// Build the ElevenLabs client from environment variables.
///
/// Returns `Ok(None)` when the API key is not configured; the proxy then
/// answers 500 "API key is missing".
///
/// # Errors
///
/// Returns an error if the HTTP client fails to build.
pub fn client_from_env() -> Result<Option<ElevenLabsClient>, VoiceError> {
    client_from_config(VoiceConfig::from_env())
}

/// Only a missing key degrades to "no client"; any other failure propagates.
fn client_from_config(config: Result<VoiceConfig, VoiceError>) -> Result<Option<ElevenLabsClient>, VoiceError> {
    match config {
        Ok(config) => ElevenLabsClient::new(config).map(Some),
        Err(VoiceError::MissingApiKey { var }) => {
            tracing::warn!(%var, "voice API key not set; /api/elevenlabs will return 500");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
