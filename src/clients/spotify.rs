use async_trait::async_trait;
use log::debug;
use rspotify::{
    ClientCredsSpotify, Config, Credentials,
    model::{ArtistId, RecommendationsAttribute, SimplifiedTrack, TrackId},
    prelude::*,
};

use crate::clients::{
    entities::{Artist, Track},
    errors::{Error, Result},
    provider::RecommendationProvider,
};

impl From<SimplifiedTrack> for Track {
    fn from(f: SimplifiedTrack) -> Track {
        Track {
            name: f.name,
            artists: f
                .artists
                .into_iter()
                .map(|a| Artist { name: a.name })
                .collect(),
            external_urls: f.external_urls,
        }
    }
}

/// Spotify Web API client using the client credentials flow.
///
/// `ClientCredsSpotify` keeps its token behind a shared lock, so clones of
/// this client can be used from concurrent requests.
#[derive(Clone)]
pub struct SpotifyClient {
    /// Underlying rspotify client
    pub spotify: ClientCredsSpotify,
}

impl SpotifyClient {
    /// Wrap an already configured rspotify client.
    pub fn new(spotify: ClientCredsSpotify) -> Self {
        SpotifyClient { spotify }
    }

    /// Request an app token. Must succeed before the client serves requests.
    pub async fn authenticate(&self) -> Result<()> {
        debug!("Requesting Spotify client credentials token ...");
        self.spotify.request_token().await?;
        debug!("Spotify client credentials token acquired");
        Ok(())
    }

    /// Create a `SpotifyClient` from environment variables or raise a configuration error.
    pub fn try_default() -> Result<Self> {
        let creds = Credentials::from_env().ok_or_else(|| {
            Error::ConfigurationError(
                "Missing Spotify credentials. Set RSPOTIFY_CLIENT_ID and RSPOTIFY_CLIENT_SECRET."
                    .into(),
            )
        })?;

        let spotify = ClientCredsSpotify::with_config(
            creds,
            Config {
                token_refreshing: true,
                ..Default::default()
            },
        );

        Ok(Self::new(spotify))
    }
}

#[async_trait]
impl RecommendationProvider for SpotifyClient {
    #[allow(deprecated)]
    async fn recommend(&self, genres: &[&str], limit: u32) -> Result<Vec<Track>> {
        debug!("Requesting {limit} Spotify recommendations for genres {genres:?}");
        let recommendations = self
            .spotify
            .recommendations(
                Vec::<RecommendationsAttribute>::new(),
                None::<Vec<ArtistId<'_>>>,
                Some(genres.iter().copied()),
                None::<Vec<TrackId<'_>>>,
                None,
                Some(limit),
            )
            .await?;
        debug!(
            "Spotify returned {} recommended tracks",
            recommendations.tracks.len()
        );
        Ok(recommendations.tracks.into_iter().map(Track::from).collect())
    }
}
