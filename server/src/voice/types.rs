//! Voice provider types: the signed-URL seam and its errors.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while obtaining a signed conversation URL.
#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the provider failed before a response arrived.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The provider response body did not contain a signed URL.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// TRAIT
// =============================================================================

/// Source of short-lived, provider-issued conversation URLs.
///
/// Implemented by [`super::elevenlabs::ElevenLabsClient`]; handlers depend on
/// the trait so tests can substitute a mock.
#[async_trait::async_trait]
pub trait SignedUrlSource: Send + Sync {
    /// Fetch one signed URL for the configured agent. Never retried.
    async fn signed_url(&self) -> Result<String, VoiceError>;
}
