mod catalog;
mod feature;
mod product;
mod query;

pub use catalog::{Catalog, CatalogDocument, ScoreScale};
pub use feature::{Feature, FeatureInfo, UnknownFeatureId};
pub use product::Product;
pub use query::{BudgetRange, ProductQuery, SearchRequest, SortMode};
