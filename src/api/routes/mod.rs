//! API routes module

pub mod catalog;
pub mod chat;
pub mod selection;
pub mod web;

use axum::Router;

use crate::app::Controller;

/// Create the combined API router
pub fn router() -> Router<Controller> {
    Router::new()
        // Catalog routes
        .nest("/catalog", catalog::router())
        // Selection routes
        .nest("/selection", selection::router())
        // Chat routes
        .nest("/chat", chat::router())
}
