use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{Feature, FeatureInfo, Product, SearchRequest, SortMode},
    services::search_products,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SortParams {
    #[serde(default)]
    pub sort: SortMode,
}

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub success: bool,
    pub products: Vec<Product>,
}

impl From<Vec<Product>> for ProductsResponse {
    fn from(products: Vec<Product>) -> Self {
        Self {
            success: true,
            products,
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Feature vocabulary for the search form
pub async fn list_features() -> Json<Vec<FeatureInfo>> {
    Json(Feature::ALL.into_iter().map(FeatureInfo::from).collect())
}

/// Full catalog, in catalog order
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<ProductsResponse>> {
    let catalog = state.catalog.fetch_all().await?;
    Ok(Json(catalog.products().to_vec().into()))
}

/// Filters the catalog against the submitted search form
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    params: Result<Query<SortParams>, QueryRejection>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> AppResult<Json<ProductsResponse>> {
    let Query(params) = params?;
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!(request_id = %request_id, error = %rejection, "Rejected search body");
        AppError::from(rejection)
    })?;

    tracing::info!(
        request_id = %request_id,
        product_type = %request.product_type,
        selected_feature_count = request.selected_features.len(),
        sort = ?params.sort,
        "Processing search request"
    );

    let products = search_products(state.catalog.as_ref(), &request, params.sort)
        .await
        .inspect_err(|e| tracing::warn!(request_id = %request_id, error = %e, "Search failed"))?;

    tracing::info!(
        request_id = %request_id,
        match_count = products.len(),
        "Search request completed"
    );

    Ok(Json(products.into()))
}
