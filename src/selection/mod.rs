//! The ordered, duplicate-free set of products the user has chosen.

pub mod db;

use serde::Serialize;

use crate::catalog::{Catalog, Product, ProductId};

pub use db::{load_selection, save_selection};

#[derive(Clone, Debug, Default, Serialize)]
pub struct SelectionSet(Vec<Product>);

impl SelectionSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Rebuild a selection from persisted identifiers, in catalog
    /// order. Ids that no longer resolve against the catalog are dropped.
    pub fn restore(ids: &[ProductId], catalog: &Catalog) -> Self {
        Self(
            catalog
                .products()
                .iter()
                .filter(|p| ids.contains(&p.id))
                .cloned()
                .collect(),
        )
    }

    /// Add the product if absent, remove it if present. Returns
    /// whether the set changed.
    pub fn toggle(&mut self, id: ProductId, catalog: &Catalog) -> bool {
        if self.remove(id) {
            return true;
        }
        match catalog.find(id) {
            Some(product) => {
                self.0.push(product.clone());
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.0.len();
        self.0.retain(|p| p.id != id);
        self.0.len() != before
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.0.iter().any(|p| p.id == id)
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.0.iter().map(|p| p.id).collect()
    }

    pub fn products(&self) -> &[Product] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
