use std::sync::Arc;

use crate::{
    catalog,
    config::AppConfig,
    services::{
        chat_service::IntentResponder, delivery::ChatDelivery,
        product_service::ProductRepository,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProductRepository>,
    pub responder: Arc<IntentResponder>,
    pub delivery: ChatDelivery,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(catalog: ProductRepository, delivery: ChatDelivery, jwt_secret: &str) -> Self {
        let catalog = Arc::new(catalog);
        let responder = Arc::new(IntentResponder::new(Arc::clone(&catalog)));
        Self {
            catalog,
            responder,
            delivery,
            jwt_secret: Arc::from(jwt_secret),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let products = catalog::generate(config.catalog_seed, config.catalog_size);
        Self::new(
            ProductRepository::new(products),
            config.chat_delivery(),
            &config.jwt_secret,
        )
    }
}
