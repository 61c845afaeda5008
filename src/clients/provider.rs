use async_trait::async_trait;

use crate::clients::{entities::Track, errors::Result};

/// Source of genre seeded track recommendations.
///
/// One handle is shared by every in-flight request, so implementations must
/// be safe to call concurrently.
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Fetch up to `limit` tracks seeded by `genres`, in provider order.
    async fn recommend(&self, genres: &[&str], limit: u32) -> Result<Vec<Track>>;
}
