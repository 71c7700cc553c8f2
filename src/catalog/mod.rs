//! The static product catalog and the current category filter.

pub mod models;

use std::fs;

use anyhow::{Error, Result};

pub use models::{Category, Product, ProductId, ProductsDocument, UnknownCategory};

/// The current category filter. Until the user picks one the grid
/// shows a placeholder rather than an empty state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Filter {
    #[default]
    Unset,
    Category(Category),
    // A category name that matched nothing in the fixed set
    Unknown(String),
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    filter: Filter,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            filter: Filter::Unset,
        }
    }

    pub fn from_json(data: &str) -> Result<Self, Error> {
        let doc: ProductsDocument = serde_json::from_str(data)?;
        Ok(Self::new(doc.products))
    }

    /// Read the product document at `path` once.
    pub fn load(path: &str) -> Result<Self, Error> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Set the filter from user input. Names outside the fixed set of
    /// categories are kept so they render as an empty result, a blank
    /// name resets the filter.
    pub fn set_filter(&mut self, category: &str) {
        let category = category.trim();
        self.filter = if category.is_empty() {
            Filter::Unset
        } else {
            match category.parse::<Category>() {
                Ok(c) => Filter::Category(c),
                Err(_) => Filter::Unknown(category.to_string()),
            }
        };
    }

    /// Products matching the current filter. `None` when no filter
    /// has been chosen yet.
    pub fn visible(&self) -> Option<Vec<&Product>> {
        match &self.filter {
            Filter::Unset => None,
            Filter::Category(c) => Some(self.by_category(*c)),
            Filter::Unknown(_) => Some(vec![]),
        }
    }

    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn product(id: ProductId, name: &str, category: Category) -> Product {
        Product {
            id,
            name: name.to_string(),
            brand: "CeraVe".to_string(),
            category,
            description: format!("Description of {}", name),
            image: format!("https://example.com/{}.png", id),
        }
    }

    pub fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            product(1, "Foaming Facial Cleanser", Category::Cleanser),
            product(2, "Hydrating Cleanser", Category::Cleanser),
            product(3, "Moisturizing Cream", Category::Moisturizer),
            product(4, "Sunscreen SPF 50", Category::Suncare),
        ])
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("Cleanser".parse::<Category>().unwrap(), Category::Cleanser);
        assert_eq!("hair color".parse::<Category>().unwrap(), Category::HairColor);
        assert_eq!(
            " Men's Grooming ".parse::<Category>().unwrap(),
            Category::MensGrooming
        );
        assert_eq!(
            "skincare".parse::<Category>(),
            Err(UnknownCategory("skincare".to_string()))
        );
        assert_eq!(
            UnknownCategory("skincare".to_string()).to_string(),
            "Unknown category: skincare"
        );
    }

    #[test]
    fn test_from_json() {
        let data = r#"{"products": [{
            "id": 7,
            "name": "Elvive Shampoo",
            "brand": "L'Oréal Paris",
            "category": "haircare",
            "description": "Repairs damaged hair.",
            "image": "https://example.com/7.png"
        }]}"#;
        let catalog = Catalog::from_json(data).unwrap();
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.products()[0].category, Category::Haircare);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(
            &path,
            r#"{"products": [{"id": 1, "name": "Libre", "brand": "YSL",
                "category": "fragrance", "description": "Floral", "image": "libre.png"}]}"#,
        )
        .unwrap();

        let catalog = Catalog::load(path.to_str().unwrap()).unwrap();
        assert_eq!(catalog.find(1).unwrap().name, "Libre");
        assert!(Catalog::load(dir.path().join("missing.json").to_str().unwrap()).is_err());
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        let data = r#"{"products": [{"id": 1, "name": "x", "brand": "y",
            "category": "gadgets", "description": "", "image": ""}]}"#;
        assert!(Catalog::from_json(data).is_err());
    }

    #[test]
    fn test_filter_unset_has_no_visible_products() {
        let catalog = sample_catalog();
        assert_eq!(catalog.visible(), None);
    }

    #[test]
    fn test_filter_by_cleanser() {
        let mut catalog = sample_catalog();
        catalog.set_filter("Cleanser");
        let visible = catalog.visible().unwrap();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.category == Category::Cleanser));
    }

    #[test]
    fn test_filter_without_matches() {
        let mut catalog = sample_catalog();
        catalog.set_filter("fragrance");
        assert_eq!(catalog.visible(), Some(vec![]));

        catalog.set_filter("gadgets");
        assert_eq!(catalog.filter(), &Filter::Unknown("gadgets".to_string()));
        assert_eq!(catalog.visible(), Some(vec![]));
    }

    #[test]
    fn test_blank_filter_resets_to_unset() {
        let mut catalog = sample_catalog();
        catalog.set_filter("suncare");
        catalog.set_filter("  ");
        assert_eq!(catalog.filter(), &Filter::Unset);
        assert_eq!(catalog.visible(), None);
    }
}
