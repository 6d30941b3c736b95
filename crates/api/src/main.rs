use anyhow::Context;

use barstock_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    barstock_observability::init();

    let config = AppConfig::from_env()?;
    let app = barstock_api::app::build_app(&config).await?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, database = %config.database.url, "listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
