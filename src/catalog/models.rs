use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub type ProductId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "cleanser")]
    Cleanser,
    #[serde(rename = "moisturizer")]
    Moisturizer,
    #[serde(rename = "haircare")]
    Haircare,
    #[serde(rename = "makeup")]
    Makeup,
    #[serde(rename = "hair color")]
    HairColor,
    #[serde(rename = "hair styling")]
    HairStyling,
    #[serde(rename = "men's grooming")]
    MensGrooming,
    #[serde(rename = "suncare")]
    Suncare,
    #[serde(rename = "fragrance")]
    Fragrance,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Cleanser,
        Category::Moisturizer,
        Category::Haircare,
        Category::Makeup,
        Category::HairColor,
        Category::HairStyling,
        Category::MensGrooming,
        Category::Suncare,
        Category::Fragrance,
    ];

    /// The key used in the product data file and in form values
    pub fn key(&self) -> &'static str {
        match self {
            Category::Cleanser => "cleanser",
            Category::Moisturizer => "moisturizer",
            Category::Haircare => "haircare",
            Category::Makeup => "makeup",
            Category::HairColor => "hair color",
            Category::HairStyling => "hair styling",
            Category::MensGrooming => "men's grooming",
            Category::Suncare => "suncare",
            Category::Fragrance => "fragrance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Cleanser => "Cleanser",
            Category::Moisturizer => "Moisturizer",
            Category::Haircare => "Haircare",
            Category::Makeup => "Makeup",
            Category::HairColor => "Hair Color",
            Category::HairStyling => "Hair Styling",
            Category::MensGrooming => "Men's Grooming",
            Category::Suncare => "Suncare",
            Category::Fragrance => "Fragrance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

// Accepts both the data file key ("hair color") and the display
// label ("Hair Color"), ignoring case and surrounding whitespace
impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.key() == needle || c.label().to_lowercase() == needle)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: Category,
    pub description: String,
    pub image: String,
}

/// Shape of the static product data file
#[derive(Deserialize)]
pub struct ProductsDocument {
    pub products: Vec<Product>,
}
