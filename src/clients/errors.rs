use std::time::Duration;

use rspotify::ClientError;
use thiserror::Error;

/// Result alias used by the provider clients and the server.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures while configuring or talking to the recommendation provider.
#[derive(Error, Debug)]
pub enum Error {
    /// Spotify rejected or failed the request
    #[error("Spotify error: {0}")]
    SpotifyError(#[from] ClientError),

    /// Missing or invalid settings
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Provider returned a track without a canonical web link
    #[error("track '{0}' has no Spotify URL")]
    MissingExternalUrl(String),

    /// Provider call exceeded the configured timeout
    #[error("provider did not respond within {0:?}")]
    Timeout(Duration),

    /// Socket bind or serve failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
