//! Moodify - Mood based track recommendations
//!
//! This library maps a mood keyword to a set of seed genres, asks Spotify for
//! matching tracks and serves them over a small JSON HTTP API.

/// HTTP routes, handler state and the error envelope
pub mod api;
/// Client modules for interacting with the recommendation provider
pub mod clients;
/// The fixed mood to genre table
pub mod mood;
/// Server configuration and lifecycle
pub mod server;
