//! Public types for the selection API
use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductId};
use crate::selection::SelectionSet;

#[derive(Deserialize)]
pub struct ToggleRequest {
    pub id: ProductId,
}

#[derive(Serialize, Deserialize)]
pub struct SelectionResponse {
    pub ids: Vec<ProductId>,
    pub products: Vec<Product>,
}

impl From<SelectionSet> for SelectionResponse {
    fn from(selection: SelectionSet) -> Self {
        Self {
            ids: selection.ids(),
            products: selection.products().to_vec(),
        }
    }
}
