//! Router for the chat API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use super::public;
use crate::api::public::ApiError;
use crate::app::{Controller, RoutineError};

/// Get the visible chat thread
async fn chat_thread(State(controller): State<Controller>) -> Json<public::ChatThreadResponse> {
    Json(public::ChatThreadResponse {
        thread: controller.thread().entries().to_vec(),
        context_len: controller.context_len(),
        current_routine: controller.current_routine(),
    })
}

/// Generate a routine for the current selection
async fn routine_handler(
    State(controller): State<Controller>,
) -> Result<impl IntoResponse, ApiError> {
    match controller.generate_routine().await {
        Ok(exchange) => Ok(Json(exchange).into_response()),
        Err(RoutineError::EmptySelection) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(public::ChatErrorResponse {
                error: RoutineError::EmptySelection.to_string(),
            }),
        )
            .into_response()),
        Err(RoutineError::Other(e)) => Err(e.into()),
    }
}

/// Ask a follow-up question
async fn chat_handler(
    State(controller): State<Controller>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    match controller.ask_follow_up(&payload.message).await? {
        Some(exchange) => Ok(Json(exchange).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Create the chat router
pub fn router() -> Router<Controller> {
    Router::new()
        .route("/", get(chat_thread).post(chat_handler))
        .route("/routine", post(routine_handler))
}
