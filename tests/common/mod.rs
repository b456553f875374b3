#![allow(dead_code)]

use ecombot::{
    catalog,
    services::{delivery::ChatDelivery, product_service::ProductRepository},
    state::AppState,
};

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_SEED: u64 = 42;

pub fn repository() -> ProductRepository {
    ProductRepository::new(catalog::generate(TEST_SEED, catalog::DEFAULT_CATALOG_SIZE))
}

pub fn test_state() -> AppState {
    AppState::new(repository(), ChatDelivery::immediate(), TEST_SECRET)
}
