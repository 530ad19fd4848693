//! # Catalog Filter
//!
//! The catalog discovery engine: a multi-predicate filter applied reactively
//! to the in-memory product collection.
//!
//! ## Filter Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Filter Flow                                │
//! │                                                                         │
//! │  User types "tea" / picks a category / drags the price slider          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI replaces its FilterCriteria snapshot wholesale                     │
//! │  (criteria.with_search("tea"), never field-patched in place)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter_products(&products, &criteria)  ← THIS MODULE                  │
//! │       │                                                                 │
//! │       ├── name contains search text (case-folded)?       AND           │
//! │       ├── category matches or sentinel All?              AND           │
//! │       ├── location matches or sentinel All?              AND           │
//! │       └── price inside inclusive range?                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<&Product> in input order ──► product card grid                    │
//! │                                                                         │
//! │  Runs on every keystroke: one linear scan, no allocation per product,  │
//! │  no sorting, never panics for well-typed input.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Category, PriceRange, Product};

// =============================================================================
// Criteria Sentinels
// =============================================================================

/// Category criterion: the "All Categories" sentinel or one category.
///
/// The wire form is exactly what the category select emits: the sentinel
/// string "all", or a bare category name like "honey".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Match every category ("all" on the wire).
    #[default]
    All,
    /// Match exactly one category (its bare lowercase name on the wire).
    #[serde(untagged)]
    Only(Category),
}

impl CategoryFilter {
    fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

/// Location criterion: the "All Locations" sentinel or one origin label.
///
/// Locations are free text, so the match is exact string equality. Inconsistent
/// casing or spelling at data-entry time silently misses; constraining entry to
/// [`KNOWN_LOCATIONS`](crate::KNOWN_LOCATIONS) is the mitigation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum LocationFilter {
    /// Match every location ("all" on the wire).
    #[default]
    All,
    /// Match exactly one origin label (the bare label on the wire; any
    /// string other than the sentinel deserializes here).
    #[serde(untagged)]
    Only(String),
}

impl LocationFilter {
    fn matches(&self, location: &str) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Only(wanted) => wanted == location,
        }
    }
}

// =============================================================================
// Filter Criteria
// =============================================================================

/// The user's current search/filter parameters.
///
/// ## Lifecycle
/// Created with [`FilterCriteria::default`] when the discovery view mounts.
/// Each user interaction replaces the whole snapshot via a `with_*`
/// constructor; criteria are never partially mutated in place, which keeps
/// re-evaluation trigger-able and testable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against product names.
    ///
    /// Matched literally: whitespace is significant and never trimmed, so a
    /// search of "  " only matches names containing two spaces.
    pub search: String,

    /// Category criterion, defaulting to the All sentinel.
    pub category: CategoryFilter,

    /// Location criterion, defaulting to the All sentinel.
    pub location: LocationFilter,

    /// Inclusive price bounds, defaulting to the full slider range.
    /// `min <= max` is a caller precondition; see [`PriceRange`].
    pub price: PriceRange,
}

impl FilterCriteria {
    /// Returns a snapshot with the search text replaced.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Returns a snapshot with the category criterion replaced.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Returns a snapshot with the location criterion replaced.
    pub fn with_location(mut self, location: LocationFilter) -> Self {
        self.location = location;
        self
    }

    /// Returns a snapshot with the price bounds replaced.
    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    /// Checks whether a single product satisfies all four predicates.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_folded(product, &self.search.to_lowercase())
    }

    /// Inner predicate taking the already case-folded search text, so a full
    /// scan folds it once instead of once per product.
    fn matches_folded(&self, product: &Product, folded_search: &str) -> bool {
        let matches_search =
            folded_search.is_empty() || product.name.to_lowercase().contains(folded_search);

        matches_search
            && self.category.matches(product.category)
            && self.location.matches(&product.location)
            && self.price.contains(product.price)
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Selects the products matching the criteria.
///
/// Pure function: same inputs always produce the same output, in the same
/// relative order as the input collection (stable filter, no re-sorting).
/// An empty collection yields an empty result, not an error.
///
/// ## Example
/// ```rust
/// use bazaar_core::catalog::{filter_products, sample_products, FilterCriteria};
///
/// let products = sample_products();
/// let everything = filter_products(&products, &FilterCriteria::default());
/// assert_eq!(everything.len(), products.len());
/// ```
pub fn filter_products<'a>(
    products: &'a [Product],
    criteria: &FilterCriteria,
) -> Vec<&'a Product> {
    let folded_search = criteria.search.to_lowercase();
    products
        .iter()
        .filter(|product| criteria.matches_folded(product, &folded_search))
        .collect()
}

// =============================================================================
// Sample Catalog
// =============================================================================

/// The storefront's seeded demo catalog.
///
/// Used by the demo build and as the shared fixture for filter tests.
pub fn sample_products() -> Vec<Product> {
    fn product(
        id: u32,
        name: &str,
        category: Category,
        price: u32,
        location: &str,
        rating: f32,
        featured: bool,
    ) -> Product {
        Product {
            id,
            name: name.to_string(),
            category,
            price,
            location: location.to_string(),
            rating,
            featured,
        }
    }

    vec![
        product(1, "Himalayan Wild Honey", Category::Honey, 599, "Uttarakhand", 4.8, true),
        product(2, "Organic Darjeeling Tea", Category::Tea, 349, "West Bengal", 4.6, false),
        product(3, "Premium Kashmiri Saffron", Category::Spices, 1299, "Kashmir", 4.9, true),
        product(4, "Herbal Tulsi Mix", Category::Herbs, 249, "Himachal Pradesh", 4.3, false),
        product(5, "Fresh Himalayan Apples", Category::Fruits, 399, "Himachal Pradesh", 4.5, false),
        product(6, "Handcrafted Wooden Artifacts", Category::Handicrafts, 1499, "Uttarakhand", 4.7, false),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
