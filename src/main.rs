use anyhow::{Context, Result};
use dotenv::dotenv;
use storefront::{
    config::{Config, ConnectionManager},
    handler::AppRouter,
    state::AppState,
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger("storefront");

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url())
        .await
        .context("Failed to initialize database pool")?;

    let state = AppState::new(pool);

    println!("🚀 Server started successfully");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Server shutdown complete");

    Ok(())
}
