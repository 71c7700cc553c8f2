use crate::catalog::{Catalog, ProductId};
use crate::conversation::{ChatThread, ConversationContext};
use crate::selection::SelectionSet;

/// All mutable application state. There is exactly one per process,
/// owned by the `Controller`.
#[derive(Debug, Default)]
pub struct AppState {
    pub catalog: Catalog,
    pub selection: SelectionSet,
    pub context: ConversationContext,
    pub thread: ChatThread,
    // Product whose description is expanded in the grid
    pub expanded: Option<ProductId>,
}

impl AppState {
    pub fn new(catalog: Catalog, selection: SelectionSet) -> Self {
        Self {
            catalog,
            selection,
            ..Default::default()
        }
    }
}
