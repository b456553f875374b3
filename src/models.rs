use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Electronics,
    Fashion,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    Books,
    #[serde(rename = "Sports & Outdoors")]
    SportsAndOutdoors,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Fashion,
        Category::HomeAndGarden,
        Category::Books,
        Category::SportsAndOutdoors,
    ];

    /// Display name, as shown to shoppers and matched by category queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::HomeAndGarden => "Home & Garden",
            Category::Books => "Books",
            Category::SportsAndOutdoors => "Sports & Outdoors",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    // Case-insensitive on the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[schema(value_type = String, example = "79.99")]
    pub price: Decimal,
    pub description: String,
    pub image: String,
    pub rating: f64,
    pub category: Category,
    pub in_stock: bool,
}
