use std::cmp::Ordering;

use crate::{
    models::{Category, Product},
    routes::params::{ProductQuery, ProductSortBy},
};

pub const DEFAULT_FEATURED_LIMIT: usize = 8;
pub const FEATURED_MIN_RATING: f64 = 4.3;

/// Read-only queries over the product set built at startup.
///
/// Every query returns products in repository (generation) order unless it
/// explicitly sorts.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    products: Vec<Product>,
}

impl ProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get_all(&self) -> &[Product] {
        &self.products
    }

    pub fn get_by_id(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring match on name, description and category.
    ///
    /// The empty query is a substring of every field and so matches all
    /// products.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.category.as_str().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Exact, case-insensitive match on the category display name.
    pub fn get_by_category(&self, category: &str) -> Vec<&Product> {
        match category.parse::<Category>() {
            Ok(category) => self.in_category(category),
            Err(_) => Vec::new(),
        }
    }

    pub fn in_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// The first `limit` products rated at least [`FEATURED_MIN_RATING`], in
    /// storage order. This is not a top-rated ranking.
    pub fn get_featured(&self, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.rating >= FEATURED_MIN_RATING)
            .take(limit)
            .collect()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for p in &self.products {
            if !seen.contains(&p.category) {
                seen.push(p.category);
            }
        }
        seen
    }

    /// Catalog browsing: optional term over name and description, optional
    /// category, then a stable sort. An unknown category matches nothing.
    pub fn browse(&self, query: &ProductQuery) -> Vec<&Product> {
        let term = query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let category = query
            .category
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let mut items: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| match &term {
                Some(term) => {
                    p.name.to_lowercase().contains(term)
                        || p.description.to_lowercase().contains(term)
                }
                None => true,
            })
            .filter(|p| match category {
                Some(name) => p.category.as_str().eq_ignore_ascii_case(name),
                None => true,
            })
            .collect();

        match query.sort_by.unwrap_or_default() {
            ProductSortBy::Name => {
                items.sort_by_cached_key(|p| p.name.to_lowercase());
            }
            ProductSortBy::PriceAsc => items.sort_by(|a, b| a.price.cmp(&b.price)),
            ProductSortBy::PriceDesc => items.sort_by(|a, b| b.price.cmp(&a.price)),
            ProductSortBy::Rating => items.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }),
        }

        items
    }
}
