use std::collections::HashMap;

use serde::Serialize;

use crate::clients::errors::Error;

/// Key of the canonical web link in [`Track::external_urls`].
pub const SPOTIFY_URL_KEY: &str = "spotify";

/// A credited artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    /// Display name
    pub name: String,
}

/// A recommended track as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Track title
    pub name: String,
    /// Credited artists, in provider order
    pub artists: Vec<Artist>,
    /// Links keyed by service, e.g. `spotify`
    pub external_urls: HashMap<String, String>,
}

/// Client facing shape of one recommended track.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackSummary {
    /// Track title, verbatim
    pub name: String,
    /// Artist names joined with `", "`, in provider order
    pub artist: String,
    /// Canonical Spotify web link
    pub url: String,
}

impl TryFrom<Track> for TrackSummary {
    type Error = Error;

    fn try_from(mut track: Track) -> Result<Self, Self::Error> {
        let Some(url) = track.external_urls.remove(SPOTIFY_URL_KEY) else {
            return Err(Error::MissingExternalUrl(track.name));
        };
        let artist = track
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Ok(TrackSummary {
            name: track.name,
            artist,
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(name: &str, artists: &[&str], url: Option<&str>) -> Track {
        Track {
            name: name.to_string(),
            artists: artists
                .iter()
                .map(|a| Artist {
                    name: (*a).to_string(),
                })
                .collect(),
            external_urls: url
                .map(|u| HashMap::from([(SPOTIFY_URL_KEY.to_string(), u.to_string())]))
                .unwrap_or_default(),
        }
    }

    #[test]
    fn joins_artists_in_order() {
        let summary = TrackSummary::try_from(track(
            "Under Pressure",
            &["Queen", "David Bowie"],
            Some("https://open.spotify.com/track/a"),
        ))
        .unwrap();
        assert_eq!(summary.name, "Under Pressure");
        assert_eq!(summary.artist, "Queen, David Bowie");
        assert_eq!(summary.url, "https://open.spotify.com/track/a");
    }

    #[test]
    fn single_artist_has_no_separator() {
        let summary = TrackSummary::try_from(track(
            "Weightless",
            &["Marconi Union"],
            Some("https://open.spotify.com/track/x"),
        ))
        .unwrap();
        assert_eq!(summary.artist, "Marconi Union");
    }

    #[test]
    fn missing_spotify_url_is_an_error() {
        let mut t = track("Orphan", &["Nobody"], None);
        t.external_urls
            .insert("other".to_string(), "https://example.com".to_string());
        let err = TrackSummary::try_from(t).unwrap_err();
        assert!(matches!(err, Error::MissingExternalUrl(ref name) if name == "Orphan"));
    }
}
