use std::sync::Arc;

use anyhow::Context;
use fitscore_api::{
    api::{create_router, AppState},
    config::{CatalogSetting, Config},
    services::{CatalogSource, HttpCatalog, StaticCatalog},
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing();

    if config.catalog_url.is_some() && config.catalog_path.is_some() {
        tracing::warn!("Both CATALOG_URL and CATALOG_PATH are set; using CATALOG_URL");
    }

    let catalog = build_catalog_source(&config)?;
    tracing::info!(source = catalog.name(), "Catalog source ready");

    let state = AppState::new(catalog).with_request_timeout(config.request_timeout());
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn build_catalog_source(config: &Config) -> anyhow::Result<Arc<dyn CatalogSource>> {
    let source: Arc<dyn CatalogSource> = match config.catalog_setting() {
        CatalogSetting::Remote(url) => Arc::new(
            HttpCatalog::new(url, config.catalog_timeout()).context("Failed to build catalog client")?,
        ),
        CatalogSetting::File(path) => Arc::new(
            StaticCatalog::from_path(&path)
                .with_context(|| format!("Failed to load catalog from {}", path))?,
        ),
        CatalogSetting::Builtin => {
            Arc::new(StaticCatalog::builtin().context("Builtin catalog is invalid")?)
        }
    };

    Ok(source)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
