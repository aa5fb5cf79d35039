use crate::{
    error::AppResult,
    models::{Product, SearchRequest, SortMode},
    services::{catalog::CatalogSource, matcher, normalizer},
};

/// Runs one product search
///
/// The request is validated before the catalog is touched, so a bad form
/// never costs a catalog fetch. "No results" is an empty list, not an error.
pub async fn search_products(
    source: &dyn CatalogSource,
    request: &SearchRequest,
    sort: SortMode,
) -> AppResult<Vec<Product>> {
    let query = normalizer::normalize(request)?;

    tracing::debug!(
        product_type = %query.product_type(),
        budget_min = query.budget().min(),
        budget_max = query.budget().max(),
        feature_count = query.features().len(),
        "Normalized search query"
    );

    let catalog = source.fetch_all().await?;
    let products = matcher::evaluate(&query, &catalog, sort);

    tracing::info!(
        source = source.name(),
        catalog_size = catalog.len(),
        match_count = products.len(),
        sort = ?sort,
        "Search completed"
    );

    Ok(products)
}
