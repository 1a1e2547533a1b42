use std::sync::Mutex;

use super::*;

/// Serializes tests that touch process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers must hold `ENV_LOCK`.
unsafe fn clear_voice_env() {
    unsafe {
        std::env::remove_var(API_KEY_VAR);
        std::env::remove_var(AGENT_ID_VAR);
        std::env::remove_var(BASE_URL_VAR);
    }
}

#[test]
fn from_vars_applies_defaults() {
    let cfg = VoiceConfig::from_vars(Some("secret".into()), None, None).unwrap();
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.agent_id, "");
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
}

#[test]
fn from_vars_keeps_agent_and_trims_base_url() {
    let cfg = VoiceConfig::from_vars(
        Some("secret".into()),
        Some("agent_123".into()),
        Some(" http://127.0.0.1:9999/ ".into()),
    )
    .unwrap();
    assert_eq!(cfg.agent_id, "agent_123");
    assert_eq!(cfg.base_url, "http://127.0.0.1:9999");
}

#[test]
fn from_vars_missing_key_errors() {
    let err = VoiceConfig::from_vars(None, Some("agent".into()), None).unwrap_err();
    assert!(matches!(err, VoiceError::MissingApiKey { ref var } if var == API_KEY_VAR));
}

#[test]
fn from_vars_empty_key_errors() {
    let err = VoiceConfig::from_vars(Some(String::new()), None, None).unwrap_err();
    assert!(err.to_string().contains(API_KEY_VAR));
}

#[test]
fn from_vars_blank_base_url_uses_default() {
    let cfg = VoiceConfig::from_vars(Some("k".into()), None, Some("   ".into())).unwrap();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
}

#[test]
fn from_env_reads_process_environment() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_voice_env();
        std::env::set_var(API_KEY_VAR, "env-secret");
        std::env::set_var(AGENT_ID_VAR, "env-agent");
    }

    let cfg = VoiceConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "env-secret");
    assert_eq!(cfg.agent_id, "env-agent");
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);

    unsafe { clear_voice_env() };
}

#[test]
fn from_env_without_key_errors() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_voice_env();
        std::env::set_var(AGENT_ID_VAR, "env-agent");
    }

    assert!(matches!(VoiceConfig::from_env(), Err(VoiceError::MissingApiKey { .. })));

    unsafe { clear_voice_env() };
}
