use claimer::MissionRunner;
use config::Config;

use logger::init_default_logger;
use utils::read_credentials;

mod claimer;
mod config;
mod constants;
mod error;
mod http;
mod logger;
mod schemas;
mod utils;

async fn run() -> eyre::Result<()> {
    let config = Config::read_default().await?;
    let credentials = read_credentials().await?;

    MissionRunner::from_config(&config).run(&credentials).await;

    Ok(())
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let _guard = init_default_logger();

    if let Err(e) = run().await {
        tracing::error!("An error occurred: {e:#}");
    }

    Ok(())
}
