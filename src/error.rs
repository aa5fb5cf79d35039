use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::ScoreScale;

const UPSTREAM_MESSAGE: &str = "Product catalog is temporarily unavailable. Please try again.";
const INTERNAL_MESSAGE: &str = "Internal server error";
const TIMEOUT_MESSAGE: &str = "The request took too long. Please try again.";

/// Rejected search input
///
/// Always the user's to fix; each variant maps to one form field.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please specify a product type")]
    EmptyProductType,

    #[error("Please select at least one feature")]
    NoFeaturesSelected,

    #[error("Invalid budget range [{min}, {max}]: bounds must be non-negative with min <= max")]
    InvalidBudgetRange { min: f64, max: f64 },

    #[error("Unknown feature: {0}")]
    UnknownFeature(String),
}

impl ValidationError {
    /// Name of the request field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyProductType => "productType",
            ValidationError::NoFeaturesSelected | ValidationError::UnknownFeature(_) => {
                "selectedFeatures"
            }
            ValidationError::InvalidBudgetRange { .. } => "budget",
        }
    }
}

/// Catalog construction errors
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate product id {0}")]
    DuplicateId(u64),

    #[error("Product {id} has invalid price {price}")]
    InvalidPrice { id: u64, price: f64 },

    #[error("Product {id} has fit score {score} outside the {scale:?} scale")]
    ScoreOutOfScale { id: u64, score: f64, scale: ScoreScale },

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed request body: {0}")]
    MalformedJson(#[from] JsonRejection),

    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Request timed out")]
    RequestTimeout,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, field) = match &self {
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string(), Some(err.field())),
            AppError::MalformedJson(rejection) => (rejection.status(), rejection.body_text(), None),
            AppError::InvalidQuery(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text(), None),
            AppError::HttpClient(_) | AppError::Upstream(_) => {
                tracing::error!(error = %self, "Catalog fetch failed");
                (StatusCode::BAD_GATEWAY, UPSTREAM_MESSAGE.to_string(), None)
            }
            AppError::RequestTimeout => {
                tracing::warn!("Request timed out");
                (StatusCode::REQUEST_TIMEOUT, TIMEOUT_MESSAGE.to_string(), None)
            }
            AppError::Internal(_) => {
                tracing::error!(error = %self, "Unhandled internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string(), None)
            }
        };

        let body = match field {
            Some(field) => json!({ "success": false, "message": message, "field": field }),
            None => json!({ "success": false, "message": message }),
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
