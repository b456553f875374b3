use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Category, Product};

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

impl<'a> FromIterator<&'a Product> for ProductList {
    fn from_iter<I: IntoIterator<Item = &'a Product>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().cloned().collect(),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<Category>)]
    pub items: Vec<Category>,
}
