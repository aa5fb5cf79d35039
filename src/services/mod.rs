pub mod catalog;
pub mod matcher;
pub mod normalizer;
pub mod search;

pub use catalog::{CatalogSource, HttpCatalog, StaticCatalog};
pub use search::search_products;
