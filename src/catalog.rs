//! Builds the fixed product set served for the lifetime of the process.
//!
//! The catalog is the hand-curated seed list followed by synthetic filler
//! products. Filler attributes come from a seeded [`StdRng`], so the same
//! seed always yields the same catalog.

use rand::{Rng, SeedableRng, rngs::StdRng};
use rust_decimal::Decimal;

use crate::models::{Category, Product};

pub const DEFAULT_CATALOG_SIZE: u32 = 120;
pub const DEFAULT_CATALOG_SEED: u64 = 42;

const ADJECTIVES: [&str; 8] = [
    "Premium",
    "Deluxe",
    "Professional",
    "Essential",
    "Advanced",
    "Compact",
    "Wireless",
    "Smart",
];

const NOUNS: [&str; 8] = [
    "Device",
    "Tool",
    "Accessory",
    "Kit",
    "Set",
    "System",
    "Solution",
    "Collection",
];

const IMAGE_BASE: &str = "https://images.unsplash.com/photo-";

// (name, price in cents, description, photo id, rating, category, in stock)
type SeedRow = (&'static str, i64, &'static str, &'static str, f64, Category, bool);

const SEED_ROWS: [SeedRow; 20] = [
    (
        "Wireless Bluetooth Headphones",
        7999,
        "High-quality wireless headphones with noise cancellation and 30-hour battery life.",
        "1505740420928-5e560c06d30e",
        4.5,
        Category::Electronics,
        true,
    ),
    (
        "4K Smart TV 55-inch",
        64999,
        "Ultra HD Smart TV with HDR, built-in streaming apps, and voice control.",
        "1593359677879-a4bb92f829d1",
        4.3,
        Category::Electronics,
        true,
    ),
    (
        "Gaming Mechanical Keyboard",
        12999,
        "RGB backlit mechanical keyboard with blue switches, perfect for gaming.",
        "1587829741301-dc798b83add3",
        4.7,
        Category::Electronics,
        true,
    ),
    (
        "Wireless Gaming Mouse",
        5999,
        "High-precision wireless gaming mouse with customizable RGB lighting.",
        "1527864550417-7fd91fc51a46",
        4.4,
        Category::Electronics,
        true,
    ),
    (
        "Smartphone 128GB",
        69999,
        "Latest smartphone with triple camera system and 5G connectivity.",
        "1511707171634-5f897ff02aa9",
        4.6,
        Category::Electronics,
        false,
    ),
    (
        "Classic Denim Jacket",
        8999,
        "Timeless denim jacket perfect for casual and semi-formal occasions.",
        "1551698618-1dfe5d97d256",
        4.2,
        Category::Fashion,
        true,
    ),
    (
        "Running Sneakers",
        11999,
        "Comfortable running shoes with excellent cushioning and breathable material.",
        "1542291026-7eec264c27ff",
        4.5,
        Category::Fashion,
        true,
    ),
    (
        "Leather Handbag",
        15999,
        "Elegant leather handbag with multiple compartments and adjustable strap.",
        "1553062407-98eeb64c6a62",
        4.3,
        Category::Fashion,
        true,
    ),
    (
        "Cotton T-Shirt Pack (3)",
        3499,
        "Pack of 3 premium cotton t-shirts in different colors.",
        "1521572163474-6864f9cf17ab",
        4.1,
        Category::Fashion,
        true,
    ),
    (
        "Winter Wool Coat",
        19999,
        "Warm and stylish wool coat perfect for cold weather.",
        "1539533018447-63fcce2678e3",
        4.4,
        Category::Fashion,
        true,
    ),
    (
        "Robot Vacuum Cleaner",
        29999,
        "Smart robot vacuum with mapping technology and app control.",
        "1558618047-3c8c76ca7d13",
        4.6,
        Category::HomeAndGarden,
        true,
    ),
    (
        "Air Purifier HEPA Filter",
        17999,
        "Advanced air purifier with HEPA filter for clean, fresh air.",
        "1585338447937-7082f8fc763d",
        4.5,
        Category::HomeAndGarden,
        true,
    ),
    (
        "Coffee Maker with Grinder",
        14999,
        "All-in-one coffee maker with built-in grinder and programmable settings.",
        "1495474472287-4d71bcdd2085",
        4.3,
        Category::HomeAndGarden,
        true,
    ),
    (
        "Garden Tool Set",
        7999,
        "Complete 15-piece garden tool set with storage case.",
        "1416879595882-3373a0480b5b",
        4.2,
        Category::HomeAndGarden,
        true,
    ),
    (
        "Smart Thermostat",
        19999,
        "Wi-Fi enabled smart thermostat with energy-saving features.",
        "1545259741-2ea3ebf61fa3",
        4.7,
        Category::HomeAndGarden,
        false,
    ),
    (
        "The Art of Programming",
        4999,
        "Comprehensive guide to modern programming practices and algorithms.",
        "1544716278-ca5e3f4abd8c",
        4.8,
        Category::Books,
        true,
    ),
    (
        "Mystery Novel Collection",
        2999,
        "Set of 5 bestselling mystery novels from acclaimed authors.",
        "1507003211169-0a1dd7228f2d",
        4.4,
        Category::Books,
        true,
    ),
    (
        "Cookbook: World Cuisines",
        3999,
        "Explore 200+ recipes from different cultures around the world.",
        "1466637574441-749b8f19452f",
        4.6,
        Category::Books,
        true,
    ),
    (
        "Yoga Mat Premium",
        4999,
        "Non-slip premium yoga mat with alignment lines and carrying strap.",
        "1544367567-0f2fcb009e0b",
        4.5,
        Category::SportsAndOutdoors,
        true,
    ),
    (
        "Camping Tent 4-Person",
        19999,
        "Waterproof 4-person camping tent with easy setup system.",
        "1504851149312-7a075b496cc7",
        4.3,
        Category::SportsAndOutdoors,
        true,
    ),
];

/// The hand-curated products, ids `1..=20`.
pub fn seed_products() -> Vec<Product> {
    SEED_ROWS
        .iter()
        .zip(1u32..)
        .map(
            |(&(name, cents, description, photo, rating, category, in_stock), id)| Product {
                id,
                name: name.to_string(),
                price: Decimal::new(cents, 2),
                description: description.to_string(),
                image: format!("{IMAGE_BASE}{photo}?w=500"),
                rating,
                category,
                in_stock,
            },
        )
        .collect()
}

/// Seed products followed by synthetic filler up to and including `size`.
///
/// A `size` smaller than the seed list still returns every seed product.
pub fn generate(seed: u64, size: u32) -> Vec<Product> {
    let mut products = seed_products();
    let first_synthetic = products.len() as u32 + 1;
    let mut rng = StdRng::seed_from_u64(seed);

    for id in first_synthetic..=size {
        products.push(synthetic_product(&mut rng, id));
    }

    tracing::debug!(seed, count = products.len(), "catalog generated");
    products
}

fn synthetic_product(rng: &mut StdRng, id: u32) -> Product {
    let category = Category::ALL[rng.random_range(0..Category::ALL.len())];
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let whole: u32 = rng.random_range(0..500);
    // Uniform over 3.0..=5.0 in tenths; the endpoints are not half-weighted.
    let tenths: u32 = rng.random_range(30..=50);

    Product {
        id,
        name: format!("{adjective} {noun} {id}"),
        price: Decimal::from(whole) + Decimal::new(1999, 2),
        description: format!(
            "High-quality {} {} designed for optimal performance and durability.",
            adjective.to_lowercase(),
            noun.to_lowercase()
        ),
        image: format!("{IMAGE_BASE}{}?w=500", 1_500_000_000_000u64 + u64::from(id)),
        rating: f64::from(tenths) / 10.0,
        category,
        in_stock: rng.random_bool(0.9),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_sequential() {
        let seeds = seed_products();
        assert_eq!(seeds.len(), 20);
        for (idx, p) in seeds.iter().enumerate() {
            assert_eq!(p.id as usize, idx + 1);
        }
    }

    #[test]
    fn synthetic_fields_stay_in_range() {
        for p in generate(7, DEFAULT_CATALOG_SIZE).iter().skip(20) {
            assert!((3.0..=5.0).contains(&p.rating));
            assert!(p.price >= Decimal::new(1999, 2));
            assert!(p.price < Decimal::new(51999, 2));
            assert!(p.name.ends_with(&format!(" {}", p.id)));
            assert!(p.image.contains(&(1_500_000_000_000u64 + u64::from(p.id)).to_string()));
        }
    }

    #[test]
    fn size_below_seed_list_keeps_seeds() {
        assert_eq!(generate(1, 5).len(), 20);
    }
}
