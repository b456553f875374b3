//! Rule-based shopping assistant.
//!
//! [`IntentResponder::respond`] lowercases the input once and walks an
//! ordered list of [`Rule`]s; the first rule whose guard matches produces the
//! reply. Guards are plain substring checks, so "hi" also fires inside
//! "this". Product lists attached to a reply never exceed
//! [`MAX_SUGGESTIONS`] and keep repository order.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    models::{Category, Product},
    services::product_service::ProductRepository,
};

pub const MAX_SUGGESTIONS: usize = 4;

pub const SEARCH_TRIGGERS: [&str; 3] = ["search", "find", "looking for"];
pub const SEARCH_TERMS: [&str; 8] = [
    "headphones",
    "laptop",
    "phone",
    "shoes",
    "jacket",
    "book",
    "coffee",
    "camera",
];

/// Raw keyword to canonical category, checked in this order.
pub const CATEGORY_KEYWORDS: [(&str, Category); 7] = [
    ("electronics", Category::Electronics),
    ("fashion", Category::Fashion),
    ("home", Category::HomeAndGarden),
    ("garden", Category::HomeAndGarden),
    ("books", Category::Books),
    ("sports", Category::SportsAndOutdoors),
    ("outdoors", Category::SportsAndOutdoors),
];

const BUDGET_KEYWORDS: [&str; 3] = ["cheap", "budget", "under"];
const PREMIUM_KEYWORDS: [&str; 3] = ["expensive", "premium", "luxury"];
const RECOMMEND_KEYWORDS: [&str; 3] = ["recommend", "suggest", "popular"];
const GREETING_KEYWORDS: [&str; 3] = ["hello", "hi", "hey"];

pub const GREETING_MESSAGE: &str = "Hello! I'm here to help you find the perfect products. You can ask me to search for specific items, browse categories, or get recommendations. What are you looking for today?";
pub const HELP_MESSAGE: &str = "I can help you with:\n• Finding specific products (e.g., 'find headphones')\n• Browsing categories (e.g., 'show me electronics')\n• Price-based searches (e.g., 'budget items under $50')\n• Getting recommendations (e.g., 'what's popular?')\n\nWhat would you like to do?";
pub const THANKS_MESSAGE: &str =
    "You're welcome! Is there anything else I can help you find today?";
pub const BUDGET_MESSAGE: &str = "Here are some great budget-friendly options under $50:";
pub const PREMIUM_MESSAGE: &str = "Here are some premium products for you:";
pub const RECOMMEND_MESSAGE: &str = "Here are our most popular and highly-rated products:";
pub const FALLBACK_MESSAGE: &str = "I'm not sure I understand that request, but here are some popular products you might like. You can also try asking me to 'search for [item]' or 'show me [category]' for more specific results.";

/// Opening message shown before the shopper has typed anything.
pub const WELCOME_MESSAGE: &str = "Hi! I'm your AI shopping assistant. I can help you find products, compare prices and get personalized recommendations. What are you looking for today?";
pub const QUICK_ACTIONS: [&str; 4] = [
    "Show trending products",
    "Budget-friendly items",
    "Top rated products",
    "What's new today?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Search,
    Category,
    Budget,
    Premium,
    Recommendation,
    Greeting,
    Help,
    Gratitude,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ChatResponse {
    pub intent: Intent,
    pub message: String,
    pub products: Vec<Product>,
}

impl ChatResponse {
    fn text(intent: Intent, message: &str) -> Self {
        Self {
            intent,
            message: message.to_string(),
            products: Vec::new(),
        }
    }

    fn with_products<'a>(
        intent: Intent,
        message: impl Into<String>,
        products: impl IntoIterator<Item = &'a Product>,
    ) -> Self {
        Self {
            intent,
            message: message.into(),
            products: products
                .into_iter()
                .take(MAX_SUGGESTIONS)
                .cloned()
                .collect(),
        }
    }
}

/// Guard: inspects lowercased input and yields the keyword it matched.
pub type Guard = fn(&str) -> Option<&'static str>;
/// Handler: builds the reply from the catalog and the matched keyword.
pub type Handler = fn(&ProductRepository, &'static str) -> ChatResponse;

#[derive(Clone, Copy)]
pub struct Rule {
    pub intent: Intent,
    pub guard: Guard,
    pub handler: Handler,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("intent", &self.intent).finish()
    }
}

fn first_of(text: &str, keywords: &[&'static str]) -> Option<&'static str> {
    keywords.iter().copied().find(|k| text.contains(k))
}

/// Canonical category for a raw keyword from [`CATEGORY_KEYWORDS`].
pub fn category_for_keyword(keyword: &str) -> Option<Category> {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, c)| *c)
}

fn search_guard(text: &str) -> Option<&'static str> {
    first_of(text, &SEARCH_TRIGGERS)?;
    first_of(text, &SEARCH_TERMS)
}

fn search_handler(repo: &ProductRepository, term: &'static str) -> ChatResponse {
    let found = repo.search(term);
    ChatResponse::with_products(
        Intent::Search,
        format!(
            "I found {} products related to \"{}\". Here are some top recommendations:",
            found.len(),
            term
        ),
        found,
    )
}

fn category_guard(text: &str) -> Option<&'static str> {
    CATEGORY_KEYWORDS
        .iter()
        .map(|(k, _)| *k)
        .find(|k| text.contains(k))
}

fn category_handler(repo: &ProductRepository, keyword: &'static str) -> ChatResponse {
    let Some(category) = category_for_keyword(keyword) else {
        return fallback_handler(repo, keyword);
    };
    ChatResponse::with_products(
        Intent::Category,
        format!(
            "Here are some popular {} products:",
            category.as_str().to_lowercase()
        ),
        repo.in_category(category),
    )
}

fn budget_handler(repo: &ProductRepository, _: &'static str) -> ChatResponse {
    let ceiling = Decimal::from(50);
    ChatResponse::with_products(
        Intent::Budget,
        BUDGET_MESSAGE,
        repo.get_all().iter().filter(|p| p.price < ceiling),
    )
}

fn premium_handler(repo: &ProductRepository, _: &'static str) -> ChatResponse {
    let floor = Decimal::from(200);
    ChatResponse::with_products(
        Intent::Premium,
        PREMIUM_MESSAGE,
        repo.get_all().iter().filter(|p| p.price > floor),
    )
}

fn recommend_handler(repo: &ProductRepository, _: &'static str) -> ChatResponse {
    ChatResponse::with_products(
        Intent::Recommendation,
        RECOMMEND_MESSAGE,
        repo.get_featured(MAX_SUGGESTIONS),
    )
}

fn fallback_handler(repo: &ProductRepository, _: &'static str) -> ChatResponse {
    ChatResponse::with_products(
        Intent::Fallback,
        FALLBACK_MESSAGE,
        repo.get_featured(MAX_SUGGESTIONS),
    )
}

/// The built-in rule list in evaluation order.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            intent: Intent::Search,
            guard: search_guard,
            handler: search_handler,
        },
        Rule {
            intent: Intent::Category,
            guard: category_guard,
            handler: category_handler,
        },
        Rule {
            intent: Intent::Budget,
            guard: |text| first_of(text, &BUDGET_KEYWORDS),
            handler: budget_handler,
        },
        Rule {
            intent: Intent::Premium,
            guard: |text| first_of(text, &PREMIUM_KEYWORDS),
            handler: premium_handler,
        },
        Rule {
            intent: Intent::Recommendation,
            guard: |text| first_of(text, &RECOMMEND_KEYWORDS),
            handler: recommend_handler,
        },
        Rule {
            intent: Intent::Greeting,
            guard: |text| first_of(text, &GREETING_KEYWORDS),
            handler: |_, _| ChatResponse::text(Intent::Greeting, GREETING_MESSAGE),
        },
        Rule {
            intent: Intent::Help,
            guard: |text| first_of(text, &["help"]),
            handler: |_, _| ChatResponse::text(Intent::Help, HELP_MESSAGE),
        },
        Rule {
            intent: Intent::Gratitude,
            guard: |text| first_of(text, &["thank"]),
            handler: |_, _| ChatResponse::text(Intent::Gratitude, THANKS_MESSAGE),
        },
    ]
}

#[derive(Debug, Clone)]
pub struct IntentResponder {
    catalog: Arc<ProductRepository>,
    rules: Vec<Rule>,
}

impl IntentResponder {
    pub fn new(catalog: Arc<ProductRepository>) -> Self {
        Self {
            catalog,
            rules: default_rules(),
        }
    }

    /// Appends a rule after the existing ones, ahead of the fallback.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classifies `text` and builds the reply. Total over all inputs:
    /// anything no rule claims gets the featured fallback.
    pub fn respond(&self, text: &str) -> ChatResponse {
        let lowered = text.to_lowercase();
        let matched = self
            .rules
            .iter()
            .find_map(|rule| (rule.guard)(&lowered).map(|keyword| (rule, keyword)));

        let response = match matched {
            Some((rule, keyword)) => (rule.handler)(&self.catalog, keyword),
            None => fallback_handler(&self.catalog, ""),
        };

        tracing::debug!(
            intent = ?response.intent,
            products = response.products.len(),
            "chat message classified"
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keywords_map_to_canonical_names() {
        let expected = [
            ("electronics", "Electronics"),
            ("fashion", "Fashion"),
            ("home", "Home & Garden"),
            ("garden", "Home & Garden"),
            ("books", "Books"),
            ("sports", "Sports & Outdoors"),
            ("outdoors", "Sports & Outdoors"),
        ];
        assert_eq!(CATEGORY_KEYWORDS.len(), expected.len());
        for (keyword, name) in expected {
            let category = category_for_keyword(keyword).expect("mapped keyword");
            assert_eq!(category.as_str(), name);
        }
        assert_eq!(category_for_keyword("toys"), None);
    }

    #[test]
    fn search_guard_needs_trigger_and_term() {
        assert_eq!(search_guard("find headphones"), Some("headphones"));
        assert_eq!(search_guard("headphones please"), None);
        assert_eq!(search_guard("search for dinosaurs"), None);
        // First vocabulary term in list order wins, not first in the text.
        assert_eq!(search_guard("looking for a camera or a laptop"), Some("laptop"));
    }

    #[test]
    fn greeting_guard_is_a_substring_check() {
        assert_eq!(first_of("this", &GREETING_KEYWORDS), Some("hi"));
    }
}
