//! Lambda Local Server - development transport for the mock handlers
//!
//! Serves both Lambda handlers over HTTP so the front-end can be prototyped
//! without deploying anything.
//!
//! # Usage
//! ```sh
//! MOCK_DATA_SEED=7 cargo run --bin server -- --port 3003
//! ```
//!
//! # Environment Variables
//! - `LOCAL_SERVER_BIND_ADDRESS` - Listen address (default: 0.0.0.0)
//! - `LOCAL_SERVER_PORT` - Listen port (default: 3003)
//! - `LOCAL_SERVER_CORS` - Permissive CORS (default: true)
//! - `MOCK_DATA_SEED` - Reproducible payloads (default: unset)

use anyhow::Result;
use clap::Parser;
use estate_mock::config::Config;
use estate_mock::infrastructure::observability::{LogFormat, init_tracing};
use estate_mock::infrastructure::{AppState, RngSource, local_server};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Local server for the mock Lambda handlers", long_about = None)]
struct Args {
    /// Listen address, overrides LOCAL_SERVER_BIND_ADDRESS
    #[arg(long)]
    bind: Option<String>,

    /// Listen port, overrides LOCAL_SERVER_PORT
    #[arg(short, long)]
    port: Option<u16>,

    /// Seed for reproducible payloads, overrides MOCK_DATA_SEED
    #[arg(long)]
    seed: Option<u64>,

    /// Disable CORS headers
    #[arg(long)]
    no_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(LogFormat::Pretty);

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.seed.is_some() {
        config.mock_data.seed = args.seed;
    }
    if args.no_cors {
        config.server.cors = false;
    }

    info!(
        "Lambda local server {} starting on http://{}:{}",
        env!("CARGO_PKG_VERSION"),
        config.server.bind_address,
        config.server.port
    );
    match config.mock_data.seed {
        Some(seed) => info!("Mock data seeded with {}", seed),
        None => info!("Mock data unseeded"),
    }

    let state = Arc::new(AppState::new(RngSource::from_config(&config.mock_data)));
    local_server::serve(&config.server, state).await
}
