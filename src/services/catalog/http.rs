use std::{sync::Arc, time::Duration};

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{Catalog, CatalogDocument},
    services::catalog::CatalogSource,
};

/// Catalog fetched from a remote JSON endpoint on every request
///
/// The endpoint must serve a catalog document (`scoreScale` + `products`).
/// Each fetch is bounded by the client timeout and is not retried.
#[derive(Clone)]
pub struct HttpCatalog {
    http_client: HttpClient,
    url: String,
}

impl HttpCatalog {
    pub fn new(url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self { http_client, url })
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_all(&self) -> AppResult<Arc<Catalog>> {
        tracing::debug!(url = %self.url, "Fetching catalog");

        let response = self.http_client.get(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                url = %self.url,
                status = %status,
                body = %body,
                "Catalog request failed"
            );
            return Err(AppError::Upstream(format!(
                "Catalog endpoint returned status {}",
                status
            )));
        }

        let doc: CatalogDocument = response.json().await?;
        let catalog = Catalog::try_from(doc)
            .map_err(|e| AppError::Upstream(format!("Invalid catalog from upstream: {}", e)))?;

        tracing::info!(
            url = %self.url,
            product_count = catalog.len(),
            "Fetched catalog"
        );

        Ok(Arc::new(catalog))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
