//! Voice provider configuration parsed from environment variables.

use super::types::VoiceError;

pub const API_KEY_VAR: &str = "ELEVEN_LABS_API_KEY";
pub const AGENT_ID_VAR: &str = "ELEVEN_LABS_AGENT_ID";
pub const BASE_URL_VAR: &str = "ELEVEN_LABS_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceConfig {
    pub api_key: String,
    pub agent_id: String,
    pub base_url: String,
}

impl VoiceConfig {
    /// Build typed voice config from environment variables.
    ///
    /// Required:
    /// - `ELEVEN_LABS_API_KEY`
    ///
    /// Optional:
    /// - `ELEVEN_LABS_AGENT_ID`: empty when absent
    /// - `ELEVEN_LABS_BASE_URL`: default `https://api.elevenlabs.io`
    ///
    /// # Errors
    ///
    /// Returns [`VoiceError::MissingApiKey`] if the key is unset or empty.
    pub fn from_env() -> Result<Self, VoiceError> {
        Self::from_vars(
            std::env::var(API_KEY_VAR).ok(),
            std::env::var(AGENT_ID_VAR).ok(),
            std::env::var(BASE_URL_VAR).ok(),
        )
    }

    /// Build config from already-read variable values.
    ///
    /// # Errors
    ///
    /// Returns [`VoiceError::MissingApiKey`] if `api_key` is `None` or empty.
    pub fn from_vars(
        api_key: Option<String>,
        agent_id: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, VoiceError> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| VoiceError::MissingApiKey { var: API_KEY_VAR.into() })?;
        let agent_id = agent_id.unwrap_or_default();
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        Ok(Self { api_key, agent_id, base_url })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
