use clap::Parser;
use tracing_subscriber::EnvFilter;

use book_layers::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::parse();

    book_layers::interface::http::run(config).await
}
