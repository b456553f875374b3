use ecombot::{
    catalog,
    models::Category,
    routes::params::{ProductQuery, ProductSortBy},
    services::product_service::{DEFAULT_FEATURED_LIMIT, FEATURED_MIN_RATING, ProductRepository},
};
use proptest::prelude::*;

mod common;

#[test]
fn same_seed_generates_same_catalog() {
    assert_eq!(catalog::generate(9, 120), catalog::generate(9, 120));
}

#[test]
fn ids_are_unique_and_ascending() {
    let repo = common::repository();
    let ids: Vec<u32> = repo.get_all().iter().map(|p| p.id).collect();
    assert_eq!(ids, (1..=120).collect::<Vec<_>>());
}

#[test]
fn get_all_starts_with_seed_products() {
    let repo = common::repository();
    let all = repo.get_all();
    assert_eq!(all[0].name, "Wireless Bluetooth Headphones");
    assert_eq!(all[19].name, "Camping Tent 4-Person");
    assert_eq!(all[0].price.to_string(), "79.99");
}

#[test]
fn get_by_id_finds_present_ids_only() {
    let repo = common::repository();
    assert_eq!(repo.get_by_id(13).map(|p| p.name.as_str()), Some("Coffee Maker with Grinder"));
    assert!(repo.get_by_id(0).is_none());
    assert!(repo.get_by_id(121).is_none());
}

#[test]
fn empty_search_matches_everything() {
    let repo = common::repository();
    assert_eq!(repo.search("").len(), repo.len());
}

#[test]
fn search_is_case_insensitive_and_covers_category() {
    let repo = common::repository();
    let upper = repo.search("HEADPHONES");
    assert!(upper.iter().any(|p| p.id == 1));

    let by_category = repo.search("garden");
    assert!(by_category.iter().all(|p| {
        p.name.to_lowercase().contains("garden")
            || p.description.to_lowercase().contains("garden")
            || p.category == Category::HomeAndGarden
    }));
    assert!(by_category.iter().any(|p| p.id == 11));
}

#[test]
fn search_returns_known_ids() {
    let repo = common::repository();
    let ids = |q: &str| repo.search(q).iter().map(|p| p.id).collect::<Vec<_>>();

    // "coffee" and "grinder" appear in both name and description of one product.
    assert_eq!(ids("coffee"), vec![13]);
    assert_eq!(ids("Grinder"), vec![13]);
    assert_eq!(ids("gaming mouse"), vec![4]);

    let seeds = ProductRepository::new(catalog::seed_products());
    let wireless: Vec<u32> = seeds.search("wireless").iter().map(|p| p.id).collect();
    assert_eq!(wireless, vec![1, 4]);
}

#[test]
fn category_lookup_is_case_insensitive() {
    let repo = common::repository();
    let exact = repo.get_by_category("Home & Garden");
    let lower = repo.get_by_category("home & garden");
    assert_eq!(exact, lower);
    assert!(exact.iter().all(|p| p.category == Category::HomeAndGarden));
    assert!(repo.get_by_category("Toys").is_empty());
}

#[test]
fn featured_is_storage_order_then_truncate() {
    let repo = common::repository();
    let featured = repo.get_featured(DEFAULT_FEATURED_LIMIT);
    assert_eq!(featured.len(), DEFAULT_FEATURED_LIMIT);

    // 6 (4.2) and 9 (4.1) fall below the threshold.
    let ids: Vec<u32> = featured.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 7, 8, 10]);
    assert!(featured.iter().all(|p| p.rating >= FEATURED_MIN_RATING));
    assert!(repo.get_featured(0).is_empty());
}

#[test]
fn categories_follow_first_appearance() {
    let repo = common::repository();
    assert_eq!(repo.categories(), Category::ALL.to_vec());
}

#[test]
fn browse_filters_and_sorts() {
    let repo = common::repository();
    let query = ProductQuery {
        category: Some("books".into()),
        sort_by: Some(ProductSortBy::PriceAsc),
        ..Default::default()
    };
    let items = repo.browse(&query);
    assert!(!items.is_empty());
    assert!(items.iter().all(|p| p.category == Category::Books));
    assert!(items.windows(2).all(|w| w[0].price <= w[1].price));
}

#[test]
fn browse_term_ignores_category_name() {
    let repo = common::repository();
    let query = ProductQuery {
        q: Some("Electronics".into()),
        ..Default::default()
    };
    // No name or description mentions "electronics".
    assert!(repo.browse(&query).is_empty());
    assert!(!repo.search("Electronics").is_empty());
}

#[test]
fn browse_defaults_to_name_order() {
    let repo = common::repository();
    let items = repo.browse(&ProductQuery::default());
    assert_eq!(items.len(), repo.len());
    assert!(
        items
            .windows(2)
            .all(|w| w[0].name.to_lowercase() <= w[1].name.to_lowercase())
    );

    let by_rating = repo.browse(&ProductQuery {
        sort_by: Some(ProductSortBy::Rating),
        ..Default::default()
    });
    assert!(by_rating.windows(2).all(|w| w[0].rating >= w[1].rating));
}

proptest! {
    #[test]
    fn search_has_no_false_positives_or_negatives(q in "[a-zA-Z &]{0,4}") {
        let repo = common::repository();
        let needle = q.to_lowercase();
        let matches = |p: &ecombot::models::Product| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.category.as_str().to_lowercase().contains(&needle)
        };

        let found = repo.search(&q);
        prop_assert!(found.iter().all(|p| matches(*p)));

        let expected: Vec<u32> = repo
            .get_all()
            .iter()
            .filter(|p| matches(*p))
            .map(|p| p.id)
            .collect();
        let actual: Vec<u32> = found.iter().map(|p| p.id).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn get_by_id_agrees_with_get_all(id in 0u32..200) {
        let repo = common::repository();
        let present = repo.get_all().iter().filter(|p| p.id == id).count();
        prop_assert!(present <= 1);
        prop_assert_eq!(repo.get_by_id(id).is_some(), present == 1);
    }

    #[test]
    fn featured_respects_limit(limit in 0usize..130) {
        let repo = common::repository();
        let featured = repo.get_featured(limit);
        prop_assert!(featured.len() <= limit);
        prop_assert!(featured.iter().all(|p| p.rating >= FEATURED_MIN_RATING));
        prop_assert!(featured.windows(2).all(|w| w[0].id < w[1].id));
    }
}
