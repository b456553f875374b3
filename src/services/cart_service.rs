use std::str::FromStr;

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::{
    dto::cart::{CartLineSummary, CartRequest, CartSummary, CheckoutReceipt},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Product,
    response::{ApiResponse, Meta},
    services::product_service::ProductRepository,
};

/// Sales tax applied to the pre-discount subtotal.
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// A shopper's cart. Owned by the caller; the server never stores one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units, merging with an existing line for the product.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            }),
        }
    }

    /// Sets the quantity of an existing line; zero removes it. Returns
    /// `false` when the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: u32, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product_id);
        }
        match self.lines.iter_mut().find(|l| l.product.id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, product_id: u32) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() != before
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoCode {
    Save10,
    Welcome20,
    First15,
}

impl PromoCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromoCode::Save10 => "SAVE10",
            PromoCode::Welcome20 => "WELCOME20",
            PromoCode::First15 => "FIRST15",
        }
    }

    pub fn rate(&self) -> Decimal {
        match self {
            PromoCode::Save10 => Decimal::new(10, 2),
            PromoCode::Welcome20 => Decimal::new(20, 2),
            PromoCode::First15 => Decimal::new(15, 2),
        }
    }
}

impl FromStr for PromoCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SAVE10" => Ok(PromoCode::Save10),
            "WELCOME20" => Ok(PromoCode::Welcome20),
            "FIRST15" => Ok(PromoCode::First15),
            _ => Err(AppError::BadRequest("Invalid promo code".to_string())),
        }
    }
}

fn cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn summarize(cart: &Cart, promo: Option<PromoCode>) -> CartSummary {
    let subtotal = cents(cart.subtotal());
    let discount_rate = promo.map(|p| p.rate()).unwrap_or(Decimal::ZERO);
    let discount = cents(subtotal * discount_rate);
    let tax = cents(subtotal * TAX_RATE);
    let total = subtotal + tax - discount;

    CartSummary {
        items: cart
            .lines()
            .iter()
            .map(|line| CartLineSummary {
                product: line.product.clone(),
                quantity: line.quantity,
                line_total: cents(line.line_total()),
            })
            .collect(),
        item_count: cart.item_count(),
        promo_code: promo.map(|p| p.as_str().to_string()),
        discount_rate,
        subtotal,
        discount,
        tax,
        total,
    }
}

/// Resolves caller-held lines against the catalog. Zero quantities are
/// dropped; unknown product ids are rejected.
pub fn build_cart(catalog: &ProductRepository, request: &CartRequest) -> AppResult<Cart> {
    let mut cart = Cart::new();
    for line in &request.items {
        let product = catalog.get_by_id(line.product_id).ok_or_else(|| {
            AppError::BadRequest(format!("product {} not found", line.product_id))
        })?;
        cart.add(product, line.quantity);
    }
    Ok(cart)
}

fn parse_promo(request: &CartRequest) -> AppResult<Option<PromoCode>> {
    request
        .promo_code
        .as_deref()
        .filter(|code| !code.trim().is_empty())
        .map(str::parse)
        .transpose()
}

pub fn price_cart(
    catalog: &ProductRepository,
    request: CartRequest,
) -> AppResult<ApiResponse<CartSummary>> {
    let promo = parse_promo(&request)?;
    let cart = build_cart(catalog, &request)?;
    let summary = summarize(&cart, promo);
    Ok(ApiResponse::success("Cart summary", summary, Some(Meta::empty())))
}

/// Confirms an order for an authenticated shopper. Nothing is reserved or
/// recorded.
pub fn checkout(
    catalog: &ProductRepository,
    user: &AuthUser,
    request: CartRequest,
) -> AppResult<ApiResponse<CheckoutReceipt>> {
    let promo = parse_promo(&request)?;
    let cart = build_cart(catalog, &request)?;
    if cart.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }

    let summary = summarize(&cart, promo);
    let receipt = CheckoutReceipt {
        reference: Uuid::new_v4(),
        placed_by: user.email.clone(),
        placed_at: Utc::now(),
        summary,
    };

    tracing::info!(
        reference = %receipt.reference,
        user = %user.email,
        total = %receipt.summary.total,
        "checkout confirmed"
    );

    Ok(ApiResponse::success(
        "Order placed successfully!",
        receipt,
        Some(Meta::empty()),
    ))
}
