//! Manual Search Server - Binary Entry Point

use std::sync::Arc;

use manual_search::api::{serve, AppState};
use manual_search::config::ServerConfig;
use manual_search::logging::init_logging;
use manual_search::store::DocumentStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = ServerConfig::from_env();
    tracing::info!(
        "{} {} using {}",
        manual_search::NAME,
        manual_search::VERSION,
        config.data_file.display()
    );

    let store = DocumentStore::open(&config.data_file)?;
    let state = Arc::new(AppState::new(store));

    serve(&config.addr, state).await?;
    Ok(())
}
