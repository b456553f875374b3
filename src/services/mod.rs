pub mod auth_service;
pub mod cart_service;
pub mod chat_service;
pub mod delivery;
pub mod product_service;
