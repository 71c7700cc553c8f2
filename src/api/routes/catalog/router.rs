//! Router for the catalog API

use axum::{Router, extract::State, response::Json};
use axum_extra::extract::Query;

use super::public;
use crate::app::Controller;

/// List products. Passing `category` also sets it as the current
/// filter, the same as choosing it on the page.
async fn products(
    State(controller): State<Controller>,
    Query(params): Query<public::ProductsQuery>,
) -> Json<public::ProductsResponse> {
    let products = match &params.category {
        Some(category) => controller.set_filter(category),
        None => controller.products(),
    };
    Json(public::ProductsResponse {
        category: params.category,
        products,
    })
}

/// Create the catalog router
pub fn router() -> Router<Controller> {
    Router::new().route("/products", axum::routing::get(products))
}
