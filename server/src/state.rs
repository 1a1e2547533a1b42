//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server keeps no per-request or per-user state; the only shared resource is
//! the voice provider client.

use std::sync::Arc;

use crate::voice::SignedUrlSource;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    /// Voice provider client. `None` if `ELEVEN_LABS_API_KEY` is not configured.
    pub voice: Option<Arc<dyn SignedUrlSource>>,
}

impl AppState {
    #[must_use]
    pub fn new(voice: Option<Arc<dyn SignedUrlSource>>) -> Self {
        Self { voice }
    }
}
