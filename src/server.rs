use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use log::{info, warn};

use crate::api::{build_router, state::AppState};
use crate::clients::{RecommendationProvider, SpotifyClient, errors::Result};

/// Host used when none is configured.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 5000;
/// Number of tracks requested per recommendation call.
pub const DEFAULT_LIMIT: u32 = 10;
/// Upper bound on a single provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the [`Server`].
pub struct Config {
    /// Shared provider handle used by every request
    pub provider: Arc<dyn RecommendationProvider>,
    /// Address to bind
    pub addr: SocketAddr,
    /// Tracks requested per recommendation
    pub limit: u32,
    /// Upper bound on a single provider call
    pub timeout: Duration,
}

/// Builds a [`Config`], filling unset values with defaults.
#[derive(Default)]
pub struct ConfigBuilder {
    provider: Option<Arc<dyn RecommendationProvider>>,
    host: Option<IpAddr>,
    port: Option<u16>,
    limit: Option<u32>,
    timeout: Option<Duration>,
}

impl ConfigBuilder {
    /// Start with every value unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this provider instead of an authenticated Spotify client.
    #[must_use]
    pub fn provider(mut self, provider: Arc<dyn RecommendationProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Bind address.
    #[must_use]
    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = Some(host);
        self
    }

    /// Listen port.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Tracks requested per recommendation.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Upper bound on a single provider call.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finish the configuration. Without an explicit provider this reads
    /// Spotify credentials from the environment and authenticates, so it fails
    /// when Spotify rejects them.
    pub async fn build(self) -> Result<Config> {
        let provider = match self.provider {
            Some(p) => p,
            None => {
                let spotify = SpotifyClient::try_default()?;
                info!("Authenticating with Spotify ...");
                spotify.authenticate().await?;
                Arc::new(spotify)
            }
        };
        let addr = SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        );
        Ok(Config {
            provider,
            addr,
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

/// Serves the recommendation API until Ctrl+C.
pub struct Server {
    config: Config,
}

impl Server {
    /// Create a server from a built configuration.
    pub fn new(config: Config) -> Self {
        Server { config }
    }

    /// Router with the shared state attached.
    pub fn router(&self) -> Router {
        build_router(AppState {
            provider: Arc::clone(&self.config.provider),
            limit: self.config.limit,
            timeout: self.config.timeout,
        })
    }

    /// Bind and serve until shutdown.
    pub async fn serve(self) -> Result<()> {
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(self.config.addr).await?;
        info!("Listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down ..."),
        Err(e) => {
            warn!("Failed to listen for Ctrl+C, serving until killed: {e}");
            std::future::pending::<()>().await;
        }
    }
}
