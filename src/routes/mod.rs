use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod cart;
pub mod chat;
pub mod doc;
pub mod health;
pub mod params;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/chat", chat::router())
        .nest("/cart", cart::router())
        .nest("/auth", auth::router())
}
