//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::conversation::{Routine, ThreadEntry};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct ChatThreadResponse {
    pub thread: Vec<ThreadEntry>,
    pub context_len: usize,
    pub current_routine: Option<Routine>,
}
