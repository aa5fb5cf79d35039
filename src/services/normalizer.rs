use std::collections::BTreeSet;

use crate::{
    error::ValidationError,
    models::{BudgetRange, Feature, ProductQuery, SearchRequest},
};

/// Validates raw search input and turns it into a `ProductQuery`
///
/// Checks run in a fixed order and the first failure is returned:
/// product type, feature presence, budget, feature vocabulary.
pub fn normalize(request: &SearchRequest) -> Result<ProductQuery, ValidationError> {
    let product_type = request.product_type.trim();
    if product_type.is_empty() {
        return Err(ValidationError::EmptyProductType);
    }

    if request.selected_features.is_empty() {
        return Err(ValidationError::NoFeaturesSelected);
    }

    let [min, max] = request.budget;
    let budget =
        BudgetRange::new(min, max).ok_or(ValidationError::InvalidBudgetRange { min, max })?;

    let features = request
        .selected_features
        .iter()
        .map(|id| {
            id.parse::<Feature>()
                .map_err(|e| ValidationError::UnknownFeature(e.0))
        })
        .collect::<Result<BTreeSet<_>, _>>()?;

    Ok(ProductQuery::new(product_type.to_string(), budget, features))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(product_type: &str, budget: [f64; 2], features: &[&str]) -> SearchRequest {
        SearchRequest {
            product_type: product_type.to_string(),
            budget,
            selected_features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_normalize_valid_request() {
        let query = normalize(&request("  Laptop ", [500.0, 1500.0], &["battery", "camera"])).unwrap();

        assert_eq!(query.product_type(), "Laptop");
        assert_eq!(query.budget().min(), 500.0);
        assert_eq!(query.budget().max(), 1500.0);
        assert_eq!(
            query.features(),
            &BTreeSet::from([Feature::Battery, Feature::Camera])
        );
    }

    #[test]
    fn test_normalize_deduplicates_features() {
        let query = normalize(&request("phone", [0.0, 100.0], &["battery", "battery", "screen"])).unwrap();
        assert_eq!(query.features().len(), 2);
    }

    #[test]
    fn test_empty_product_type() {
        assert_eq!(
            normalize(&request("", [0.0, 100.0], &["battery"])),
            Err(ValidationError::EmptyProductType)
        );
        assert_eq!(
            normalize(&request(" \t\n ", [0.0, 100.0], &["battery"])),
            Err(ValidationError::EmptyProductType)
        );
    }

    #[test]
    fn test_no_features_selected() {
        assert_eq!(
            normalize(&request("laptop", [0.0, 100.0], &[])),
            Err(ValidationError::NoFeaturesSelected)
        );
    }

    #[test]
    fn test_min_greater_than_max() {
        assert_eq!(
            normalize(&request("laptop", [1500.0, 500.0], &["battery"])),
            Err(ValidationError::InvalidBudgetRange {
                min: 1500.0,
                max: 500.0
            })
        );
    }

    #[test]
    fn test_negative_budget() {
        assert!(matches!(
            normalize(&request("laptop", [-10.0, 500.0], &["battery"])),
            Err(ValidationError::InvalidBudgetRange { .. })
        ));
        assert!(matches!(
            normalize(&request("laptop", [-10.0, -5.0], &["battery"])),
            Err(ValidationError::InvalidBudgetRange { .. })
        ));
    }

    #[test]
    fn test_equal_bounds_accepted() {
        let query = normalize(&request("laptop", [999.0, 999.0], &["battery"])).unwrap();
        assert!(query.budget().contains(999.0));
    }

    #[test]
    fn test_unknown_feature() {
        assert_eq!(
            normalize(&request("laptop", [0.0, 100.0], &["battery", "wifi"])),
            Err(ValidationError::UnknownFeature("wifi".to_string()))
        );
    }

    #[test]
    fn test_first_failure_wins() {
        // empty type is reported even when everything else is wrong too
        assert_eq!(
            normalize(&request(" ", [10.0, 1.0], &[])),
            Err(ValidationError::EmptyProductType)
        );
        assert_eq!(
            normalize(&request("laptop", [10.0, 1.0], &[])),
            Err(ValidationError::NoFeaturesSelected)
        );
        assert!(matches!(
            normalize(&request("laptop", [10.0, 1.0], &["wifi"])),
            Err(ValidationError::InvalidBudgetRange { .. })
        ));
    }
}
