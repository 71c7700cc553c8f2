//! Router for the server rendered page. Every action mutates the
//! state and answers with the whole page rendered again.

use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};

use super::public;
use crate::api::public::ApiError;
use crate::app::{Controller, RoutineError};

type PageResult = Result<Html<String>, ApiError>;

fn page(controller: &Controller) -> PageResult {
    Ok(Html(controller.render_page(None)?))
}

async fn index(State(controller): State<Controller>) -> PageResult {
    page(&controller)
}

async fn filter(
    State(controller): State<Controller>,
    Form(form): Form<public::FilterForm>,
) -> PageResult {
    controller.set_filter(&form.category);
    page(&controller)
}

async fn toggle_selection(
    State(controller): State<Controller>,
    Form(form): Form<public::ProductForm>,
) -> PageResult {
    controller.toggle(form.id).await?;
    page(&controller)
}

async fn remove_selection(
    State(controller): State<Controller>,
    Form(form): Form<public::ProductForm>,
) -> PageResult {
    controller.remove(form.id).await?;
    page(&controller)
}

async fn clear_selection(State(controller): State<Controller>) -> PageResult {
    controller.clear().await?;
    page(&controller)
}

async fn toggle_details(
    State(controller): State<Controller>,
    Form(form): Form<public::ProductForm>,
) -> PageResult {
    controller.toggle_details(form.id);
    page(&controller)
}

async fn generate_routine(
    State(controller): State<Controller>,
) -> Result<impl IntoResponse, ApiError> {
    match controller.generate_routine().await {
        Ok(_) => Ok(page(&controller)?.into_response()),
        Err(RoutineError::EmptySelection) => {
            let notice = RoutineError::EmptySelection.to_string();
            let html = controller.render_page(Some(&notice))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
        Err(RoutineError::Other(e)) => Err(e.into()),
    }
}

async fn chat(
    State(controller): State<Controller>,
    Form(form): Form<public::ChatForm>,
) -> PageResult {
    controller.ask_follow_up(&form.message).await?;
    page(&controller)
}

/// Create the page router
pub fn router() -> Router<Controller> {
    Router::new()
        .route("/", get(index))
        .route("/filter", post(filter))
        .route("/selection/toggle", post(toggle_selection))
        .route("/selection/remove", post(remove_selection))
        .route("/selection/clear", post(clear_selection))
        .route("/details/toggle", post(toggle_details))
        .route("/routine", post(generate_routine))
        .route("/chat", post(chat))
}
