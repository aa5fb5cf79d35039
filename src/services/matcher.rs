use crate::models::{Catalog, Product, ProductQuery, SortMode};

/// Case-insensitive substring check on a product name
///
/// An empty needle matches every name. `ProductQuery` never carries one.
fn name_matches(name: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || name.to_lowercase().contains(needle_lower)
}

/// Returns true when a product satisfies every condition of the query
///
/// Feature matching is "any of": one shared feature is enough. Requiring
/// all selected features would be a different product and is not done here.
pub fn matches(query: &ProductQuery, product: &Product) -> bool {
    matches_lowered(query, &query.product_type().to_lowercase(), product)
}

fn matches_lowered(query: &ProductQuery, needle_lower: &str, product: &Product) -> bool {
    name_matches(&product.name, needle_lower)
        && query.budget().contains(product.price)
        && product.has_any_feature(query.features())
}

/// Keeps the matching products, in catalog order
pub fn filter<'a>(query: &ProductQuery, products: &'a [Product]) -> Vec<&'a Product> {
    let needle = query.product_type().to_lowercase();

    products
        .iter()
        .filter(|product| matches_lowered(query, &needle, product))
        .collect()
}

/// Orders products in place; stable, so equal keys keep their input order
pub fn sort(products: &mut [&Product], mode: SortMode) {
    match mode {
        SortMode::FitScore => products.sort_by(|a, b| {
            b.fit_score
                .total_cmp(&a.fit_score)
                .then_with(|| a.price.total_cmp(&b.price))
        }),
        SortMode::PriceLow => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceHigh => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
}

/// Filters the catalog, then sorts the matches
pub fn evaluate(query: &ProductQuery, catalog: &Catalog, mode: SortMode) -> Vec<Product> {
    let mut matched = filter(query, catalog.products());
    sort(&mut matched, mode);
    matched.into_iter().cloned().collect()
}
