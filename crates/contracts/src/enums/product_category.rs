use serde::{Deserialize, Serialize};

/// Closed set of categories a product can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProductCategory {
    #[default]
    #[serde(rename = "men's clothing")]
    MensClothing,
    #[serde(rename = "women's clothing")]
    WomensClothing,
    #[serde(rename = "jewelery")]
    Jewelery,
    #[serde(rename = "electronics")]
    Electronics,
}

impl ProductCategory {
    /// Wire code, also used as the select option value
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::MensClothing => "men's clothing",
            ProductCategory::WomensClothing => "women's clothing",
            ProductCategory::Jewelery => "jewelery",
            ProductCategory::Electronics => "electronics",
        }
    }

    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::MensClothing => "Men's clothing",
            ProductCategory::WomensClothing => "Women's clothing",
            ProductCategory::Jewelery => "Jewelry",
            ProductCategory::Electronics => "Electronics",
        }
    }

    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::MensClothing,
            ProductCategory::WomensClothing,
            ProductCategory::Jewelery,
            ProductCategory::Electronics,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "men's clothing" => Some(ProductCategory::MensClothing),
            "women's clothing" => Some(ProductCategory::WomensClothing),
            "jewelery" => Some(ProductCategory::Jewelery),
            "electronics" => Some(ProductCategory::Electronics),
            _ => None,
        }
    }

    /// `(value, label)` pairs in the order the form select shows them
    pub fn select_options() -> Vec<(String, String)> {
        Self::all()
            .into_iter()
            .map(|c| (c.code().to_string(), c.display_name().to_string()))
            .collect()
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
