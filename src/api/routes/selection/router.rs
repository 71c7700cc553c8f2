//! Router for the selection API

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};

use super::public::{SelectionResponse, ToggleRequest};
use crate::api::public::ApiError;
use crate::app::Controller;
use crate::catalog::ProductId;

async fn selection_get(State(controller): State<Controller>) -> Json<SelectionResponse> {
    Json(controller.selection().into())
}

async fn selection_toggle(
    State(controller): State<Controller>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let selection = controller.toggle(payload.id).await?;
    Ok(Json(selection.into()))
}

async fn selection_remove(
    State(controller): State<Controller>,
    Path(id): Path<ProductId>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let selection = controller.remove(id).await?;
    Ok(Json(selection.into()))
}

async fn selection_clear(
    State(controller): State<Controller>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let selection = controller.clear().await?;
    Ok(Json(selection.into()))
}

/// Create the selection router
pub fn router() -> Router<Controller> {
    Router::new()
        .route("/", get(selection_get).delete(selection_clear))
        .route("/toggle", post(selection_toggle))
        .route("/{id}", delete(selection_remove))
}
