use anyhow::{Error, Result};
use tokio_rusqlite::Connection;

use super::SelectionSet;
use crate::catalog::{Catalog, ProductId};
use crate::core::db::{kv_get, kv_set};

pub const SELECTION_KEY: &str = "selected-products";

/// Persist the identifiers of the selection as a JSON array.
pub async fn save_selection(db: &Connection, selection: &SelectionSet) -> Result<(), Error> {
    let data = serde_json::to_string(&selection.ids())?;
    kv_set(db, SELECTION_KEY, &data).await
}

/// Restore the persisted selection against `catalog`. A missing or
/// unreadable entry restores an empty selection.
pub async fn load_selection(db: &Connection, catalog: &Catalog) -> Result<SelectionSet, Error> {
    let Some(data) = kv_get(db, SELECTION_KEY).await? else {
        return Ok(SelectionSet::new());
    };
    let ids: Vec<ProductId> = match serde_json::from_str(&data) {
        Ok(ids) => ids,
        Err(e) => {
            tracing::warn!("Ignoring unreadable stored selection {}: {}", data, e);
            vec![]
        }
    };
    Ok(SelectionSet::restore(&ids, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use crate::core::db::async_db;

    #[tokio::test]
    async fn test_save_and_load() {
        let db = async_db(":memory:").await.unwrap();
        let catalog = sample_catalog();
        let mut selection = SelectionSet::new();
        selection.toggle(3, &catalog);
        selection.toggle(1, &catalog);
        save_selection(&db, &selection).await.unwrap();

        assert_eq!(
            kv_get(&db, SELECTION_KEY).await.unwrap(),
            Some("[3,1]".to_string())
        );
        // Restored in catalog order
        let restored = load_selection(&db, &catalog).await.unwrap();
        assert_eq!(restored.ids(), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_persisted_form() {
        let db = async_db(":memory:").await.unwrap();
        let catalog = sample_catalog();
        let mut selection = SelectionSet::new();
        selection.toggle(2, &catalog);
        save_selection(&db, &selection).await.unwrap();
        let before = kv_get(&db, SELECTION_KEY).await.unwrap();

        selection.toggle(4, &catalog);
        save_selection(&db, &selection).await.unwrap();
        selection.toggle(4, &catalog);
        save_selection(&db, &selection).await.unwrap();

        assert_eq!(kv_get(&db, SELECTION_KEY).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_load_drops_products_missing_from_catalog() {
        let db = async_db(":memory:").await.unwrap();
        kv_set(&db, SELECTION_KEY, "[1, 77, 3]").await.unwrap();
        let restored = load_selection(&db, &sample_catalog()).await.unwrap();
        assert_eq!(restored.ids(), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_load_empty_and_garbage() {
        let db = async_db(":memory:").await.unwrap();
        let catalog = sample_catalog();
        assert!(load_selection(&db, &catalog).await.unwrap().is_empty());

        kv_set(&db, SELECTION_KEY, "not json").await.unwrap();
        assert!(load_selection(&db, &catalog).await.unwrap().is_empty());
    }
}
