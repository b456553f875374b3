use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::cart::{CartRequest, CartSummary, CheckoutReceipt},
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", post(cart_summary))
        .route("/checkout", post(checkout))
}

#[utoipa::path(
    post,
    path = "/api/cart/summary",
    request_body = CartRequest,
    responses(
        (status = 200, description = "Priced cart with tax and promo discount", body = ApiResponse<CartSummary>),
        (status = 400, description = "Unknown product or invalid promo code"),
    ),
    tag = "Cart"
)]
pub async fn cart_summary(
    State(state): State<AppState>,
    Json(payload): Json<CartRequest>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    let resp = cart_service::price_cart(&state.catalog, payload)?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart/checkout",
    request_body = CartRequest,
    responses(
        (status = 200, description = "Order confirmation", body = ApiResponse<CheckoutReceipt>),
        (status = 400, description = "Empty cart, unknown product or invalid promo code"),
        (status = 401, description = "Login required"),
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn checkout(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CartRequest>,
) -> AppResult<Json<ApiResponse<CheckoutReceipt>>> {
    let resp = cart_service::checkout(&state.catalog, &user, payload)?;
    Ok(Json(resp))
}
