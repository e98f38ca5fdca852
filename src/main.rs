use clap::Parser;
use queue_counter::domain::ports::ShopifyApi;
use queue_counter::utils::logger;
use queue_counter::{app, AppState, CliConfig, ShopifyClient, StoreConfig};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();
    logger::init_logger(cli.verbose);

    tracing::info!("Starting queue-counter");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let api: Option<Arc<dyn ShopifyApi>> = match StoreConfig::from_env() {
        Ok(config) => {
            tracing::info!("Counting queue for store '{}'", config.store);
            Some(Arc::new(ShopifyClient::new(&config)))
        }
        Err(e) => {
            tracing::warn!("⚠️ {} — requests will get a configuration error", e);
            None
        }
    };

    let state = AppState::new(api);
    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
