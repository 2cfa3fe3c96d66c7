use std::sync::Arc;

use tracing::info;

use linkharvest::config::Config;
use linkharvest::{server, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    info!("Starting linkharvest");
    info!("Search API endpoint: {}", config.endpoint);

    let http_client = reqwest::Client::builder().build()?;

    let listen_addr = config.listen_addr;
    let state = Arc::new(AppState::new(config, http_client));
    let app = server::app(state);

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!("Listening on http://{}", listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
