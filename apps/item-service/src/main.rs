//! Item Service - item catalog over a backend chosen at startup

use core_config::FromEnv;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_items::seed;
use eyre::WrapErr;
use tracing::info;

mod app;
mod config;
mod openapi;
mod shutdown;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let repository = app::build_repository(&config).await?;

    if config.seed_test_data {
        seed::init_test_data(repository.as_ref())
            .await
            .wrap_err("Failed to seed test data")?;
    }

    let router = app::router(repository);

    let address = config.server.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", address))?;

    info!(%address, backend = %config.repository, "Item service listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .wrap_err("Server error")?;

    info!("Item service shutdown complete");
    Ok(())
}
