//! Public types for the catalog API
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

#[derive(Deserialize)]
pub struct ProductsQuery {
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ProductsResponse {
    pub category: Option<String>,
    pub products: Vec<Product>,
}
