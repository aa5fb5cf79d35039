//! Product catalog sources
//!
//! The matcher never loads products itself. A `CatalogSource` hands it the
//! current full list: either a static catalog held in memory or one fetched
//! over HTTP on each request.
use std::sync::Arc;

use crate::{error::AppResult, models::Catalog};

pub mod http;
pub mod static_source;

pub use http::HttpCatalog;
pub use static_source::StaticCatalog;

/// Trait for catalog providers
///
/// Implementations return the full product list or an error. Fetch failures
/// are reported as upstream errors and never retried here.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the current full product catalog
    async fn fetch_all(&self) -> AppResult<Arc<Catalog>>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}
