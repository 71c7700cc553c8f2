use std::sync::{Arc, RwLock};

use anyhow::{Error, Result};
use handlebars::Handlebars;
use serde::Serialize;
use tokio::sync::Mutex;
use tokio_rusqlite::Connection;

use super::state::AppState;
use crate::advisor::prompt::{self, follow_up_system_prompt, routine_prompt, routine_system_prompt};
use crate::advisor::{AdvisorClient, Message, Role};
use crate::catalog::{Catalog, Product, ProductId};
use crate::conversation::{ChatThread, Routine};
use crate::core::AppConfig;
use crate::core::db::async_db;
use crate::render::{self, PageState};
use crate::selection::{SelectionSet, load_selection, save_selection};

pub const ROUTINE_APOLOGY: &str = "I apologize, but I'm having trouble generating your routine right now. Please try again in a moment.";
pub const CHAT_APOLOGY: &str =
    "I apologize, but I'm having trouble responding right now. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum RoutineError {
    #[error("Please select at least one product to generate a routine.")]
    EmptySelection,
    #[error(transparent)]
    Other(#[from] Error),
}

/// Outcome of one round trip to the remote advisor as shown in the
/// chat thread.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum Exchange {
    Answered(String),
    Failed(String),
}

/// The single owner of the application state. Cloning is cheap and
/// every clone shares the same state, which is how handlers get at it.
///
/// Calls to the remote advisor are serialized: a routine request and
/// a chat request issued at the same time run one after the other so
/// each sees the context committed by the previous one.
#[derive(Clone)]
pub struct Controller {
    state: Arc<RwLock<AppState>>,
    db: Connection,
    advisor: AdvisorClient,
    views: Arc<Handlebars<'static>>,
    prompts: Arc<Handlebars<'static>>,
    context_window: usize,
    advisor_lock: Arc<Mutex<()>>,
    selection_lock: Arc<Mutex<()>>,
}

impl Controller {
    /// Build the controller from config, loading the catalog and the
    /// persisted selection. A catalog that can't be read is logged and
    /// treated as empty so the app stays usable.
    pub async fn init(config: &AppConfig) -> Result<Self, Error> {
        let catalog = Catalog::load(&config.catalog_path).unwrap_or_else(|e| {
            tracing::error!("Error loading products from {}: {}", config.catalog_path, e);
            Catalog::default()
        });
        let db = async_db(&config.db_path).await?;
        Self::new(config, catalog, db).await
    }

    pub async fn new(config: &AppConfig, catalog: Catalog, db: Connection) -> Result<Self, Error> {
        let selection = load_selection(&db, &catalog).await?;
        tracing::debug!(
            "Loaded {} products, restored {} selected",
            catalog.products().len(),
            selection.len()
        );
        Ok(Self {
            state: Arc::new(RwLock::new(AppState::new(catalog, selection))),
            db,
            advisor: AdvisorClient::from_config(config),
            views: Arc::new(render::templates()),
            prompts: Arc::new(prompt::templates()),
            context_window: config.context_window,
            advisor_lock: Arc::new(Mutex::new(())),
            selection_lock: Arc::new(Mutex::new(())),
        })
    }

    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        let state = self.state.read().expect("Unable to read shared state");
        f(&state)
    }

    fn write<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut state = self.state.write().expect("Unable to write shared state");
        f(&mut state)
    }

    pub fn products(&self) -> Vec<Product> {
        self.read(|s| s.catalog.products().to_vec())
    }

    /// Set the category filter and return the matching products.
    pub fn set_filter(&self, category: &str) -> Vec<Product> {
        self.write(|s| {
            s.catalog.set_filter(category);
            s.catalog
                .visible()
                .unwrap_or_default()
                .into_iter()
                .cloned()
                .collect()
        })
    }

    pub fn selection(&self) -> SelectionSet {
        self.read(|s| s.selection.clone())
    }

    // Apply `f` to a copy of the selection, persist it, then commit. The
    // in-memory selection is unchanged when the write fails. The lock
    // keeps writes to the db in the same order as the mutations.
    async fn mutate_selection(
        &self,
        f: impl FnOnce(&mut SelectionSet, &Catalog),
    ) -> Result<SelectionSet, Error> {
        let _guard = self.selection_lock.lock().await;
        let next = self.read(|s| {
            let mut selection = s.selection.clone();
            f(&mut selection, &s.catalog);
            selection
        });
        save_selection(&self.db, &next).await?;
        self.write(|s| s.selection = next.clone());
        Ok(next)
    }

    pub async fn toggle(&self, id: ProductId) -> Result<SelectionSet, Error> {
        self.mutate_selection(|selection, catalog| {
            selection.toggle(id, catalog);
        })
        .await
    }

    pub async fn remove(&self, id: ProductId) -> Result<SelectionSet, Error> {
        self.mutate_selection(|selection, _| {
            selection.remove(id);
        })
        .await
    }

    pub async fn clear(&self) -> Result<SelectionSet, Error> {
        self.mutate_selection(|selection, _| selection.clear()).await
    }

    /// Expand the description of `id`, collapsing any other. Toggling
    /// the expanded product collapses it.
    pub fn toggle_details(&self, id: ProductId) {
        self.write(|s| {
            s.expanded = if s.expanded == Some(id) { None } else { Some(id) };
        });
    }

    pub fn thread(&self) -> ChatThread {
        self.read(|s| s.thread.clone())
    }

    pub fn context_len(&self) -> usize {
        self.read(|s| s.context.len())
    }

    pub fn current_routine(&self) -> Option<Routine> {
        self.read(|s| s.context.current_routine().cloned())
    }

    /// Ask the advisor for a routine covering the selected products.
    pub async fn generate_routine(&self) -> Result<Exchange, RoutineError> {
        let products = self.read(|s| s.selection.products().to_vec());
        if products.is_empty() {
            return Err(RoutineError::EmptySelection);
        }
        let prompt = routine_prompt(&self.prompts, &products)?;
        let messages = vec![
            Message::new(Role::System, &routine_system_prompt(&self.prompts)?),
            Message::new(Role::User, &prompt),
        ];
        self.write(|s| {
            s.thread.push(
                Role::User,
                &format!(
                    "Generate a personalized routine using these {} products.",
                    products.len()
                ),
            )
        });

        let _turn = self.advisor_lock.lock().await;

        match self.advisor.completion(&messages).await {
            Ok(reply) => {
                self.write(|s| {
                    s.context.push_exchange(&prompt, &reply);
                    s.context.set_routine(Routine {
                        text: reply.clone(),
                        products,
                    });
                    s.thread.push(Role::Assistant, &reply);
                });
                Ok(Exchange::Answered(reply))
            }
            Err(e) => {
                tracing::error!("Error generating routine: {}", e);
                self.write(|s| s.thread.push(Role::Assistant, ROUTINE_APOLOGY));
                Ok(Exchange::Failed(ROUTINE_APOLOGY.to_string()))
            }
        }
    }

    /// The messages sent for a follow-up question: the system
    /// instruction, the most recent context turns, then the question.
    pub fn follow_up_messages(&self, question: &str) -> Result<Vec<Message>, Error> {
        let (routine_products, history) = self.read(|s| {
            (
                s.context.current_routine().map(|r| r.products.clone()),
                s.context.window(self.context_window).to_vec(),
            )
        });
        let system = follow_up_system_prompt(&self.prompts, routine_products.as_deref())?;

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message::new(Role::System, &system));
        messages.extend(history);
        messages.push(Message::new(Role::User, question));
        Ok(messages)
    }

    /// Ask a follow-up question. Blank input does nothing and returns
    /// `None`.
    pub async fn ask_follow_up(&self, text: &str) -> Result<Option<Exchange>, Error> {
        let question = text.trim();
        if question.is_empty() {
            return Ok(None);
        }
        // The context window is read after any earlier exchange commits
        let _turn = self.advisor_lock.lock().await;
        let messages = self.follow_up_messages(question)?;
        self.write(|s| s.thread.push(Role::User, question));

        match self.advisor.completion(&messages).await {
            Ok(reply) => {
                self.write(|s| {
                    s.context.push_exchange(question, &reply);
                    s.thread.push(Role::Assistant, &reply);
                });
                Ok(Some(Exchange::Answered(reply)))
            }
            Err(e) => {
                tracing::error!("Error in chat: {}", e);
                self.write(|s| s.thread.push(Role::Assistant, CHAT_APOLOGY));
                Ok(Some(Exchange::Failed(CHAT_APOLOGY.to_string())))
            }
        }
    }

    /// Render the whole page from the current state.
    pub fn render_page(&self, notice: Option<&str>) -> Result<String, Error> {
        self.read(|s| {
            render::render_page(
                &self.views,
                &PageState {
                    catalog: &s.catalog,
                    selection: &s.selection,
                    thread: &s.thread,
                    expanded: s.expanded,
                    notice,
                },
            )
        })
    }
}
