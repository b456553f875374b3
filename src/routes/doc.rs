use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse},
        cart::{CartLineRequest, CartLineSummary, CartRequest, CartSummary, CheckoutReceipt},
        chat::{ChatReply, ChatRequest, MessageKind, Welcome},
        products::{CategoryList, ProductList},
    },
    models::{Category, Product},
    response::{ApiResponse, Meta},
    routes::{auth, cart, chat, health, params, products},
    services::chat_service::Intent,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        products::list_products,
        products::search_products,
        products::featured_products,
        products::list_categories,
        products::products_by_category,
        products::get_product,
        chat::send_message,
        chat::welcome,
        cart::cart_summary,
        cart::checkout
    ),
    components(
        schemas(
            Product,
            Category,
            ProductList,
            CategoryList,
            Intent,
            MessageKind,
            ChatRequest,
            ChatReply,
            Welcome,
            CartLineRequest,
            CartRequest,
            CartLineSummary,
            CartSummary,
            CheckoutReceipt,
            LoginRequest,
            LoginResponse,
            params::Pagination,
            params::ProductSortBy,
            params::ProductQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<ChatReply>,
            ApiResponse<CartSummary>,
            ApiResponse<CheckoutReceipt>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog queries"),
        (name = "Chat", description = "Shopping assistant"),
        (name = "Cart", description = "Cart pricing and checkout"),
        (name = "Auth", description = "Demo login"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
