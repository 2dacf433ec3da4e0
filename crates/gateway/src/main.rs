use anyhow::{Context, Result};
use dotenv::dotenv;
use gateway::{config::Config, handler::AppRouter, state::AppState};
use shared::utils::{env_flag, init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = env_flag("DEV_MODE");
    let is_enable_file = env_flag("ENABLE_FILE_LOG");

    let _log_guard = init_logger("gateway", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let port = config.port;

    let state = AppState::new(&config).context("Failed to create AppState")?;

    info!("🚀 Gateway started successfully");

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down gateway...");

    Ok(())
}
