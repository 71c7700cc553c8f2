//! Form bodies posted by the server rendered page
use serde::Deserialize;

use crate::catalog::ProductId;

#[derive(Deserialize)]
pub struct FilterForm {
    // Absent when the placeholder option is still selected
    #[serde(default)]
    pub category: String,
}

#[derive(Deserialize)]
pub struct ProductForm {
    pub id: ProductId,
}

#[derive(Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
}
