mod config;
mod utils;
mod web;

use anyhow::Result;
use economy_api::EconomyClient;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::web::WebState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let config = Config::from_env()?;
    let economy = EconomyClient::new(&config.backend)?;
    match &economy {
        Some(client) => info!("economy backend at {}", client.base_url()),
        None => warn!("BACKEND_HOST is not set, pages will render without price data"),
    }
    web::start_web(WebState { economy }, config.port).await
}
