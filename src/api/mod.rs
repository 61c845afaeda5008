//! HTTP surface of the service.

/// Error envelope returned to clients
pub mod error;
/// `GET /recommend` handler
pub mod recommend;
/// Shared handler state
pub mod state;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::api::state::AppState;

/// Build the application router. Every route is reachable cross-origin.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/recommend", get(recommend::recommend))
        .layer(cors)
        .with_state(state)
}
