//! The conversation context sent to the remote advisor and the chat
//! thread shown to the user. These are kept apart: the thread shows
//! what the user typed and any apologies, the context holds the full
//! prompts and replies that the advisor needs for continuity.

use serde::Serialize;

use crate::advisor::{Message, Role};
use crate::catalog::Product;

pub const DEFAULT_CONTEXT_WINDOW: usize = 10;

/// The last generated routine along with the products it covers.
#[derive(Clone, Debug, Serialize)]
pub struct Routine {
    pub text: String,
    pub products: Vec<Product>,
}

#[derive(Clone, Debug, Default)]
pub struct ConversationContext {
    turns: Vec<Message>,
    current_routine: Option<Routine>,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a completed exchange. Only successful exchanges are
    /// recorded so a failed call never leaves half a turn behind.
    pub fn push_exchange(&mut self, user: &str, assistant: &str) {
        self.turns.push(Message::new(Role::User, user));
        self.turns.push(Message::new(Role::Assistant, assistant));
    }

    pub fn set_routine(&mut self, routine: Routine) {
        self.current_routine = Some(routine);
    }

    pub fn current_routine(&self) -> Option<&Routine> {
        self.current_routine.as_ref()
    }

    /// The most recent `size` turns, oldest first.
    pub fn window(&self, size: usize) -> &[Message] {
        let start = self.turns.len().saturating_sub(size);
        &self.turns[start..]
    }

    pub fn turns(&self) -> &[Message] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThreadEntry {
    pub role: Role,
    pub content: String,
}

/// What the chat window displays, in order.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ChatThread(Vec<ThreadEntry>);

impl ChatThread {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, role: Role, content: &str) {
        self.0.push(ThreadEntry {
            role,
            content: content.to_string(),
        });
    }

    pub fn entries(&self) -> &[ThreadEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
