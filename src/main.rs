use items_service::config::{ITEMS_COLLECTION, ServiceConfig, StoreBackend};
use items_service::items::{self, gateway::ItemGateway};
use items_service::store::{ItemStore, MemoryStore};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level)?)
        .init();

    for arg in &config.ignored_args {
        tracing::warn!("Ignoring unknown argument: {}", arg);
    }

    tracing::info!("Starting items service with {:?}", config.store);

    // 1. Store:
    let store = connect_store(&config.store).await?;

    // 2. Gateway:
    let gateway = Arc::new(ItemGateway::new(store).with_store_timeout(config.store_timeout));
    if let Some(timeout) = config.store_timeout {
        tracing::info!("Store round-trips bounded to {:?}", timeout);
    }

    // 3. HTTP Router:
    let app = items::routes(gateway);

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}

async fn connect_store(backend: &StoreBackend) -> anyhow::Result<Arc<dyn ItemStore>> {
    match backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; items are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        #[cfg(feature = "mongodb")]
        StoreBackend::MongoDb(settings) => {
            let store = items_service::store::MongoStore::connect(
                &settings.uri,
                &settings.database,
                ITEMS_COLLECTION,
            )
            .await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "mongodb"))]
        StoreBackend::MongoDb(_) => anyhow::bail!(
            "MongoDB backend requested for collection '{}' but the binary was built without the `mongodb` feature",
            ITEMS_COLLECTION
        ),
    }
}
