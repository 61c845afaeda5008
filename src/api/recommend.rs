use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use log::{debug, info};
use serde::Serialize;

use crate::api::{error::ApiError, state::AppState};
use crate::clients::{
    entities::TrackSummary,
    errors::{Error, Result},
};
use crate::mood::Mood;

/// Value of the first `mood` pair in the query, empty when absent.
pub fn mood_param(pairs: &[(String, String)]) -> &str {
    pairs
        .iter()
        .find(|(key, _)| key == "mood")
        .map_or("", |(_, value)| value.as_str())
}

/// Successful `/recommend` body.
#[derive(Serialize, Debug)]
pub struct SongsResponse {
    /// Summaries in provider order
    pub songs: Vec<TrackSummary>,
}

/// GET /recommend?mood=<mood>
pub async fn recommend(
    State(state): State<AppState>,
    params: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> std::result::Result<Json<SongsResponse>, ApiError> {
    // Repeated keys keep the first value; an undecodable query has no mood
    let pairs = params.map(|Query(p)| p).unwrap_or_default();
    let mood: Mood = mood_param(&pairs).parse()?;

    let songs = fetch_songs(&state, mood).await?;
    info!("Recommending {} songs for mood '{mood}'", songs.len());
    Ok(Json(SongsResponse { songs }))
}

/// Ask the provider for tracks matching `mood` and shape them for clients.
/// Provider order is preserved.
pub async fn fetch_songs(state: &AppState, mood: Mood) -> Result<Vec<TrackSummary>> {
    debug!("Fetching recommendations for mood '{mood}' ...");
    let tracks = tokio::time::timeout(
        state.timeout,
        state.provider.recommend(mood.genres(), state.limit),
    )
    .await
    .map_err(|_| Error::Timeout(state.timeout))??;

    tracks.into_iter().map(TrackSummary::try_from).collect()
}
