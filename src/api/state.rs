use std::{sync::Arc, time::Duration};

use crate::services::CatalogSource;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state
///
/// Read-only after start-up; each request only borrows the catalog source.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogSource>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            catalog,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
