use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::products::{CategoryList, ProductList},
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::{FeaturedQuery, ProductQuery, SearchQuery},
    services::product_service::DEFAULT_FEATURED_LIMIT,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/search", get(search_products))
        .route("/featured", get(featured_products))
        .route("/categories", get(list_categories))
        .route("/category/{category}", get(products_by_category))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Browse the catalog", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<ApiResponse<ProductList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let matches = state.catalog.browse(&query);
    let total = matches.len();

    let data: ProductList = matches.into_iter().skip(offset).take(limit).collect();
    let meta = Meta::new(page, limit, total);
    Json(ApiResponse::success("Products", data, Some(meta)))
}

#[utoipa::path(
    get,
    path = "/api/products/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Products whose name, description or category contain the query", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<ApiResponse<ProductList>> {
    let data: ProductList = state.catalog.search(&query.q).into_iter().collect();
    let meta = Meta::total(data.items.len());
    Json(ApiResponse::success("Search results", data, Some(meta)))
}

#[utoipa::path(
    get,
    path = "/api/products/featured",
    params(FeaturedQuery),
    responses(
        (status = 200, description = "Highly rated products in catalog order", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn featured_products(
    State(state): State<AppState>,
    Query(query): Query<FeaturedQuery>,
) -> Json<ApiResponse<ProductList>> {
    let limit = query.limit.unwrap_or(DEFAULT_FEATURED_LIMIT);
    let data: ProductList = state.catalog.get_featured(limit).into_iter().collect();
    let meta = Meta::total(data.items.len());
    Json(ApiResponse::success("Featured products", data, Some(meta)))
}

#[utoipa::path(
    get,
    path = "/api/products/categories",
    responses(
        (status = 200, description = "Categories present in the catalog", body = ApiResponse<CategoryList>)
    ),
    tag = "Products"
)]
pub async fn list_categories(State(state): State<AppState>) -> Json<ApiResponse<CategoryList>> {
    let items = state.catalog.categories();
    let meta = Meta::total(items.len());
    Json(ApiResponse::success(
        "Categories",
        CategoryList { items },
        Some(meta),
    ))
}

#[utoipa::path(
    get,
    path = "/api/products/category/{category}",
    params(
        ("category" = String, Path, description = "Category display name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Products in the category", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn products_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<ApiResponse<ProductList>> {
    let data: ProductList = state.catalog.get_by_category(&category).into_iter().collect();
    let meta = Meta::total(data.items.len());
    Json(ApiResponse::success("Products", data, Some(meta)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = u32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    Path(id): Path<u32>,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = match state.catalog.get_by_id(id) {
        Some(p) => p.clone(),
        None => return Err(AppError::NotFound),
    };
    Ok(Json(ApiResponse::success("Product", product, None)))
}
