use ecombot::{
    dto::cart::{CartLineRequest, CartRequest},
    error::AppError,
    middleware::auth::AuthUser,
    services::cart_service::{self, Cart, PromoCode},
};
use rust_decimal::Decimal;

mod common;

fn line(product_id: u32, quantity: u32) -> CartLineRequest {
    CartLineRequest {
        product_id,
        quantity,
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().expect("decimal literal")
}

#[test]
fn adding_same_product_merges_quantity() {
    let repo = common::repository();
    let headphones = repo.get_by_id(1).expect("seed product");

    let mut cart = Cart::new();
    cart.add(headphones, 1);
    cart.add(headphones, 2);
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.item_count(), 3);

    cart.add(headphones, 0);
    assert_eq!(cart.item_count(), 3);
}

#[test]
fn zero_quantity_update_removes_line() {
    let repo = common::repository();
    let mut cart = Cart::new();
    cart.add(repo.get_by_id(1).expect("seed"), 1);
    cart.add(repo.get_by_id(17).expect("seed"), 1);

    assert!(cart.update_quantity(17, 4));
    assert_eq!(cart.item_count(), 5);

    assert!(cart.update_quantity(1, 0));
    assert_eq!(cart.lines().len(), 1);
    assert!(!cart.update_quantity(99, 2));
    assert!(!cart.remove(1));
    assert!(cart.remove(17));
    assert!(cart.is_empty());
}

#[test]
fn promo_codes_are_case_insensitive() {
    assert_eq!("save10".parse::<PromoCode>().ok(), Some(PromoCode::Save10));
    assert_eq!(" WELCOME20 ".parse::<PromoCode>().ok(), Some(PromoCode::Welcome20));
    assert_eq!("First15".parse::<PromoCode>().ok(), Some(PromoCode::First15));
    assert!(matches!(
        "FREE100".parse::<PromoCode>(),
        Err(AppError::BadRequest(_))
    ));
}

#[test]
fn summary_applies_tax_and_discount() {
    let repo = common::repository();
    let request = CartRequest {
        items: vec![line(1, 2), line(17, 1), line(1, 1)],
        promo_code: Some("save10".into()),
    };

    let summary = cart_service::price_cart(&repo, request)
        .expect("priced")
        .data
        .expect("summary");

    assert_eq!(summary.items.len(), 2);
    assert_eq!(summary.item_count, 4);
    assert_eq!(summary.items[0].line_total, dec("239.97"));
    assert_eq!(summary.subtotal, dec("269.96"));
    assert_eq!(summary.tax, dec("21.60"));
    assert_eq!(summary.discount, dec("27.00"));
    assert_eq!(summary.total, dec("264.56"));
    assert_eq!(summary.promo_code.as_deref(), Some("SAVE10"));
}

#[test]
fn summary_without_promo_has_no_discount() {
    let repo = common::repository();
    let cart = cart_service::build_cart(
        &repo,
        &CartRequest {
            items: vec![line(16, 1), line(18, 0)],
            promo_code: None,
        },
    )
    .expect("cart");
    assert_eq!(cart.lines().len(), 1);

    let summary = cart_service::summarize(&cart, None);
    assert_eq!(summary.discount, Decimal::ZERO);
    assert_eq!(summary.tax, dec("4.00"));
    assert_eq!(summary.total, dec("53.99"));
}

#[test]
fn unknown_products_and_codes_are_rejected() {
    let repo = common::repository();
    let unknown = cart_service::price_cart(
        &repo,
        CartRequest {
            items: vec![line(9999, 1)],
            promo_code: None,
        },
    );
    assert!(matches!(unknown, Err(AppError::BadRequest(_))));

    let bad_code = cart_service::price_cart(
        &repo,
        CartRequest {
            items: vec![line(1, 1)],
            promo_code: Some("NOPE".into()),
        },
    );
    assert!(matches!(bad_code, Err(AppError::BadRequest(msg)) if msg == "Invalid promo code"));
}

#[test]
fn checkout_requires_items() {
    let repo = common::repository();
    let user = AuthUser {
        email: "shopper@example.com".into(),
    };

    let empty = cart_service::checkout(&repo, &user, CartRequest::default());
    assert!(matches!(empty, Err(AppError::BadRequest(msg)) if msg == "Cart is empty"));

    let receipt = cart_service::checkout(
        &repo,
        &user,
        CartRequest {
            items: vec![line(5, 1)],
            promo_code: Some("WELCOME20".into()),
        },
    )
    .expect("checkout");
    assert_eq!(receipt.message, "Order placed successfully!");
    let receipt = receipt.data.expect("receipt");
    assert_eq!(receipt.placed_by, "shopper@example.com");
    // 699.99 + 56.00 tax - 140.00 discount
    assert_eq!(receipt.summary.total, dec("615.99"));
}

#[test]
fn item_count_does_not_overflow_at_max_quantities() {
    let repo = common::repository();
    let request = CartRequest {
        items: vec![line(1, u32::MAX), line(2, u32::MAX)],
        promo_code: None,
    };

    let summary = cart_service::price_cart(&repo, request)
        .expect("priced")
        .data
        .expect("summary");
    assert_eq!(summary.item_count, 2 * u64::from(u32::MAX));

    let mut cart = Cart::new();
    cart.add(repo.get_by_id(1).expect("seed"), u32::MAX);
    cart.add(repo.get_by_id(1).expect("seed"), 1);
    assert_eq!(cart.item_count(), u64::from(u32::MAX));
}
