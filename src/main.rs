use anyhow::Context;
use order_app::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("order_app=info,tower=warn")),
        )
        .init();

    tracing::info!("Starting order service...");

    // 1. Configuration
    let config = AppConfig::from_service(&ConfigService::from_env())
        .context("Failed to load configuration")?;

    // 2. Persistence gateway
    let repository = build_repository(&config).await?;

    // 3. Wire and serve
    Application::builder()
        .config(config)
        .repository(repository)
        .build()?
        .serve()
        .await?;

    tracing::info!("Order service stopped");
    Ok(())
}

#[cfg(feature = "sea-orm-db")]
async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn OrderRepository>> {
    match &config.database_url {
        Some(url) => {
            let repository = SeaOrmOrderRepository::connect(url)
                .await
                .context("Failed to connect order store")?;
            Ok(Arc::new(repository))
        }
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory order store");
            Ok(Arc::new(InMemoryOrderRepository::new()))
        }
    }
}

#[cfg(not(feature = "sea-orm-db"))]
async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn OrderRepository>> {
    if config.database_url.is_some() {
        tracing::warn!("DATABASE_URL ignored: built without the sea-orm-db feature");
    }
    tracing::info!("Using in-memory order store");
    Ok(Arc::new(InMemoryOrderRepository::new()))
}
