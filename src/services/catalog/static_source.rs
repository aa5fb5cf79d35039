use std::{collections::BTreeSet, path::Path, sync::Arc};

use crate::{
    error::{AppResult, CatalogError},
    models::{Catalog, CatalogDocument, Feature, Product, ScoreScale},
    services::catalog::CatalogSource,
};

/// Catalog held in memory for the lifetime of the process
#[derive(Clone, Debug)]
pub struct StaticCatalog {
    catalog: Arc<Catalog>,
}

impl StaticCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Loads a catalog document from a JSON file
    ///
    /// Called once at start-up; a bad file should stop the server from booting.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(raw)?;
        Ok(Self::new(Catalog::try_from(doc)?))
    }

    /// The demo catalog served when no external catalog is configured
    pub fn builtin() -> Result<Self, CatalogError> {
        let products = vec![
            Product {
                id: 1,
                name: "Laptop X".to_string(),
                price: 999.0,
                features: BTreeSet::from([Feature::Battery, Feature::Performance]),
                pros: vec!["Great battery".to_string(), "High performance".to_string()],
                cons: vec!["Expensive".to_string()],
                fit_score: 0.95,
                score_explanation: Some("Long battery life and strong performance for the price".to_string()),
            },
            Product {
                id: 2,
                name: "Smartphone Y".to_string(),
                price: 699.0,
                features: BTreeSet::from([Feature::Camera, Feature::Battery]),
                pros: vec!["Excellent camera".to_string(), "All-day battery".to_string()],
                cons: vec!["Limited storage".to_string()],
                fit_score: 0.85,
                score_explanation: Some("Covers camera and battery needs at a mid-range price".to_string()),
            },
            Product {
                id: 3,
                name: "Tablet Z".to_string(),
                price: 499.0,
                features: BTreeSet::from([Feature::Storage, Feature::Screen]),
                pros: vec!["Good value".to_string(), "Nice screen".to_string()],
                cons: vec!["Average camera".to_string()],
                fit_score: 0.75,
                score_explanation: Some("Good screen and storage for the lowest price".to_string()),
            },
        ];

        Ok(Self::new(Catalog::new(products, ScoreScale::Unit)?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[async_trait::async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_all(&self) -> AppResult<Arc<Catalog>> {
        Ok(Arc::clone(&self.catalog))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
