//! Service entry point: tracing, configuration, and server bootstrap.

mod server;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::ServerConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config =
        ServerConfig::from_env().map_err(|err| std::io::Error::other(err.to_string()))?;

    server::run(config).await
}
