//! Signed-URL proxy route for the voice provider.
//!
//! ERROR HANDLING
//! ==============
//! Failures never leak provider details to the browser: a missing key and any
//! unexpected failure become fixed `500` messages, while a provider rejection
//! forwards only its status code.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::state::AppState;
use crate::voice::VoiceError;

pub const MISSING_KEY_MESSAGE: &str = "API key is missing";
pub const UPSTREAM_MESSAGE: &str = "Failed to fetch signed URL";
pub const GENERIC_MESSAGE: &str = "An error occurred";

#[derive(Debug, Serialize)]
pub struct SignedUrlResponse {
    pub signed_url: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

/// `GET /api/elevenlabs`: return `{ signed_url }` for a new voice session.
pub async fn signed_url(State(state): State<AppState>) -> Response {
    let Some(voice) = state.voice.as_ref() else {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, MISSING_KEY_MESSAGE);
    };

    match voice.signed_url().await {
        Ok(signed_url) => (StatusCode::OK, Json(SignedUrlResponse { signed_url })).into_response(),
        Err(e) => voice_error_response(&e),
    }
}

/// Map a provider error to the response the browser sees.
pub(crate) fn voice_error_response(err: &VoiceError) -> Response {
    match err {
        VoiceError::MissingApiKey { .. } => error_response(StatusCode::INTERNAL_SERVER_ERROR, MISSING_KEY_MESSAGE),
        VoiceError::ApiResponse { status, body } => {
            tracing::warn!(status, body = %body, "voice provider rejected signed url request");
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
            error_response(status, UPSTREAM_MESSAGE)
        }
        VoiceError::ApiRequest(_) | VoiceError::ApiParse(_) | VoiceError::HttpClientBuild(_) => {
            tracing::error!(error = %err, "signed url request failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_MESSAGE)
        }
    }
}

fn error_response(status: StatusCode, error: &'static str) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

#[cfg(test)]
#[path = "elevenlabs_test.rs"]
mod elevenlabs_test;
