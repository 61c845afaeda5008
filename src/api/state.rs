use std::sync::Arc;
use std::time::Duration;

use crate::clients::RecommendationProvider;

/// Shared application state injected into route handlers via `axum::extract::State`.
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Provider shared by all requests
    pub provider: Arc<dyn RecommendationProvider>,
    /// Number of tracks requested from the provider per call
    pub limit: u32,
    /// Upper bound on a single provider call
    pub timeout: Duration,
}
