use std::net::IpAddr;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use moodify::clients::errors::Result;
use moodify::mood::Mood;
use moodify::server::{self, ConfigBuilder, Server};

#[derive(Parser)]
#[command(name = "moodify")]
#[command(version, about = "Mood based track recommendations backed by Spotify", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the recommendation API
    Serve {
        /// Address to bind
        #[arg(long, env = "MOODIFY_HOST", default_value_t = server::DEFAULT_HOST)]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, env = "MOODIFY_PORT", default_value_t = server::DEFAULT_PORT)]
        port: u16,

        /// Tracks requested from Spotify per recommendation
        #[arg(long, env = "MOODIFY_LIMIT", default_value_t = server::DEFAULT_LIMIT)]
        limit: u32,

        /// Seconds to wait for Spotify before failing a request
        #[arg(long, env = "MOODIFY_TIMEOUT_SECS", default_value_t = server::DEFAULT_TIMEOUT.as_secs())]
        timeout_secs: u64,

        /// Verbose logging
        #[arg(long, env = "MOODIFY_DEBUG")]
        debug: bool,
    },
    /// List accepted moods and their seed genres
    Moods {},
}

pub async fn run() -> Result<()> {
    // Values from .env are visible to clap and rspotify below
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            limit,
            timeout_secs,
            debug,
        } => {
            init_logging(debug);
            serve(host, port, limit, Duration::from_secs(timeout_secs)).await?;
        }
        Commands::Moods {} => {
            for mood in Mood::ALL {
                println!("{mood}: {}", mood.genres().join(", "));
            }
        }
    }
    Ok(())
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

async fn serve(host: IpAddr, port: u16, limit: u32, timeout: Duration) -> Result<()> {
    info!("Building config ...");
    let config = ConfigBuilder::new()
        .host(host)
        .port(port)
        .limit(limit)
        .timeout(timeout)
        .build()
        .await?;
    Server::new(config).serve().await
}
