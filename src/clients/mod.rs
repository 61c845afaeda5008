/// Provider-neutral tracks and the client facing track summary
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Recommendation provider abstraction
pub mod provider;
/// Spotify API client
pub mod spotify;

pub use provider::RecommendationProvider;
pub use spotify::SpotifyClient;
