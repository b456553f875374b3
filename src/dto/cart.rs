use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Product;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CartLineRequest {
    pub product_id: u32,
    pub quantity: u32,
}

/// Cart contents held by the caller and sent with every pricing request.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CartRequest {
    pub items: Vec<CartLineRequest>,
    pub promo_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartLineSummary {
    pub product: Product,
    pub quantity: u32,
    #[schema(value_type = String)]
    pub line_total: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartSummary {
    pub items: Vec<CartLineSummary>,
    pub item_count: u64,
    pub promo_code: Option<String>,
    #[schema(value_type = String)]
    pub discount_rate: Decimal,
    #[schema(value_type = String)]
    pub subtotal: Decimal,
    #[schema(value_type = String)]
    pub discount: Decimal,
    #[schema(value_type = String)]
    pub tax: Decimal,
    #[schema(value_type = String)]
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CheckoutReceipt {
    pub reference: Uuid,
    pub placed_by: String,
    pub placed_at: DateTime<Utc>,
    pub summary: CartSummary,
}
