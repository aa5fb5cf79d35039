use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Product;
use crate::error::CatalogError;

/// Range every fit score in a catalog must fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreScale {
    /// Scores in [0, 1]
    #[default]
    Unit,
    /// Scores in [0, 100]
    Percent,
}

impl ScoreScale {
    pub fn max(&self) -> f64 {
        match self {
            ScoreScale::Unit => 1.0,
            ScoreScale::Percent => 100.0,
        }
    }

    pub fn contains(&self, score: f64) -> bool {
        score.is_finite() && (0.0..=self.max()).contains(&score)
    }
}

/// On-disk / on-wire catalog document
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CatalogDocument {
    #[serde(default)]
    pub score_scale: ScoreScale,
    pub products: Vec<Product>,
}

/// A validated, read-only product catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    score_scale: ScoreScale,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids, bad prices and out-of-scale scores
    ///
    /// `-0.0` prices and scores are stored as `0.0` so they sort level with other zeros.
    pub fn new(mut products: Vec<Product>, score_scale: ScoreScale) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &mut products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: product.id,
                    price: product.price,
                });
            }
            if !score_scale.contains(product.fit_score) {
                return Err(CatalogError::ScoreOutOfScale {
                    id: product.id,
                    score: product.fit_score,
                    scale: score_scale,
                });
            }

            // -0.0 == 0.0, but total_cmp orders it first
            if product.price == 0.0 {
                product.price = 0.0;
            }
            if product.fit_score == 0.0 {
                product.fit_score = 0.0;
            }
        }

        Ok(Self {
            products,
            score_scale,
        })
    }

    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            score_scale: ScoreScale::default(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn score_scale(&self) -> ScoreScale {
        self.score_scale
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        Catalog::new(doc.products, doc.score_scale)
    }
}
