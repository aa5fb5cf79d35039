use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Feature;

/// Raw search form payload, before validation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchRequest {
    pub product_type: String,
    pub budget: [f64; 2],
    pub selected_features: Vec<String>,
}

/// Inclusive price bounds, `0 <= min <= max`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetRange {
    min: f64,
    max: f64,
}

impl BudgetRange {
    /// Returns `None` unless both bounds are finite, non-negative and ordered
    pub fn new(min: f64, max: f64) -> Option<Self> {
        let valid = min.is_finite() && max.is_finite() && min >= 0.0 && min <= max;
        valid.then_some(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// A validated search query
///
/// Only the normalizer builds these, so a `ProductQuery` always has a
/// non-empty trimmed product type, a valid budget and at least one feature.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    product_type: String,
    budget: BudgetRange,
    features: BTreeSet<Feature>,
}

impl ProductQuery {
    pub(crate) fn new(product_type: String, budget: BudgetRange, features: BTreeSet<Feature>) -> Self {
        Self {
            product_type,
            budget,
            features,
        }
    }

    pub fn product_type(&self) -> &str {
        &self.product_type
    }

    pub fn budget(&self) -> BudgetRange {
        self.budget
    }

    pub fn features(&self) -> &BTreeSet<Feature> {
        &self.features
    }
}

/// Result ordering, selectable independently of filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Best fit first; ties by cheaper price, then catalog order
    #[default]
    FitScore,
    PriceLow,
    PriceHigh,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_budget_range_bounds() {
        assert!(BudgetRange::new(0.0, 0.0).is_some());
        assert!(BudgetRange::new(500.0, 1500.0).is_some());
        assert!(BudgetRange::new(1500.0, 500.0).is_none());
        assert!(BudgetRange::new(-1.0, 500.0).is_none());
        assert!(BudgetRange::new(0.0, f64::INFINITY).is_none());
        assert!(BudgetRange::new(f64::NAN, 10.0).is_none());
    }

    #[test]
    fn test_budget_range_is_inclusive() {
        let budget = BudgetRange::new(500.0, 1500.0).unwrap();
        assert!(budget.contains(500.0));
        assert!(budget.contains(1500.0));
        assert!(!budget.contains(499.99));
        assert!(!budget.contains(1500.01));
    }

    #[test]
    fn test_search_request_parses_camel_case() {
        let request: SearchRequest = serde_json::from_value(json!({
            "productType": "laptop",
            "budget": [0, 2000],
            "selectedFeatures": ["battery"]
        }))
        .unwrap();

        assert_eq!(request.product_type, "laptop");
        assert_eq!(request.budget, [0.0, 2000.0]);
        assert_eq!(request.selected_features, vec!["battery"]);
    }

    #[test]
    fn test_search_request_requires_two_element_budget() {
        let result: Result<SearchRequest, _> = serde_json::from_value(json!({
            "productType": "laptop",
            "budget": [0, 1000, 2000],
            "selectedFeatures": ["battery"]
        }));
        assert!(result.is_err());

        let result: Result<SearchRequest, _> = serde_json::from_value(json!({
            "productType": "laptop",
            "budget": 1000,
            "selectedFeatures": ["battery"]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_search_request_rejects_unknown_fields() {
        let result: Result<SearchRequest, _> = serde_json::from_value(json!({
            "productType": "laptop",
            "budget": [0, 2000],
            "selectedFeatures": ["battery"],
            "color": "red"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_sort_mode_wire_names() {
        assert_eq!(serde_json::to_string(&SortMode::FitScore).unwrap(), "\"fitScore\"");
        assert_eq!(serde_json::to_string(&SortMode::PriceLow).unwrap(), "\"priceLow\"");
        assert_eq!(serde_json::to_string(&SortMode::PriceHigh).unwrap(), "\"priceHigh\"");
        assert_eq!(SortMode::default(), SortMode::FitScore);
    }
}
