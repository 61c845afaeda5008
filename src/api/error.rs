use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, info};
use serde::Serialize;
use thiserror::Error;

use crate::clients::errors::Error;
use crate::mood::UnknownMood;

/// Body of every non-2xx response.
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    /// Human readable failure description
    pub error: String,
}

/// The two failures a client can observe.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or unknown mood key
    #[error(transparent)]
    InvalidMood(#[from] UnknownMood),

    /// Anything that went wrong while talking to the provider
    #[error("Error getting recommendations: {0}")]
    Upstream(#[from] Error),
}

impl ApiError {
    /// HTTP status this error is answered with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidMood(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidMood(UnknownMood(raw)) => info!("Rejected unknown mood {raw:?}"),
            ApiError::Upstream(err) => error!("Recommendation request failed: {err:?}"),
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
