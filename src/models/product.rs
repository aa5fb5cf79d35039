use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Feature;

/// A product entry in the catalog
///
/// Products are read-only once the catalog is built. The fit score is
/// supplied with the catalog; this service only sorts by it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique within one catalog
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub features: BTreeSet<Feature>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    pub fit_score: f64,
    /// Why the product earned its fit score, shown next to it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_explanation: Option<String>,
}

impl Product {
    pub fn has_any_feature(&self, wanted: &BTreeSet<Feature>) -> bool {
        !self.features.is_disjoint(wanted)
    }
}
