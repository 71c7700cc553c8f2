use anyhow::Result;
use serde_json::json;

use crate::catalog::Catalog;
use crate::core::AppConfig;

pub fn run(category: Option<String>, config: &AppConfig) -> Result<()> {
    let mut catalog = Catalog::load(&config.catalog_path)?;
    let products = match &category {
        Some(c) => {
            catalog.set_filter(c);
            catalog.visible().unwrap_or_default()
        }
        None => catalog.products().iter().collect(),
    };
    println!(
        "{}",
        json!({
            "category": category,
            "products": products,
        })
    );
    Ok(())
}
