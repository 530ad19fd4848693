//! # Domain Types
//!
//! Core domain types used throughout the Bazaar storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │   PriceRange    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  Honey          │   │  min (u32)      │       │
//! │  │  name           │   │  Tea            │   │  max (u32)      │       │
//! │  │  category       │   │  Herbs          │   │  inclusive on   │       │
//! │  │  price          │   │  Spices         │   │  both ends      │       │
//! │  │  location       │   │  Fruits         │   └─────────────────┘       │
//! │  │  rating         │   │  Vegetables     │                              │
//! │  │  featured       │   │  Handicrafts    │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  Products are externally supplied and never mutated by this crate:     │
//! │  the catalog filter is a pure projection over them.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{PRICE_RANGE_MAX, PRICE_RANGE_MIN};

// =============================================================================
// Category
// =============================================================================

/// The fixed set of product categories the storefront sells.
///
/// The wire form is the lowercase name ("honey", "tea", ...), matching what
/// the frontend's category select sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Honey,
    Tea,
    Herbs,
    Spices,
    Fruits,
    Vegetables,
    Handicrafts,
}

impl Category {
    /// All categories, in the order the storefront lists them.
    pub const ALL: [Category; 7] = [
        Category::Honey,
        Category::Tea,
        Category::Herbs,
        Category::Spices,
        Category::Fruits,
        Category::Vegetables,
        Category::Handicrafts,
    ];

    /// Returns the lowercase wire name of the category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Honey => "honey",
            Category::Tea => "tea",
            Category::Herbs => "herbs",
            Category::Spices => "spices",
            Category::Fruits => "fruits",
            Category::Vegetables => "vegetables",
            Category::Handicrafts => "handicrafts",
        }
    }
}

// =============================================================================
// Price Range
// =============================================================================

/// An inclusive price interval in whole currency units.
///
/// ## Caller Precondition
/// The filter does not validate `min <= max`. A reversed range is treated
/// literally and matches nothing; views that take raw slider output should
/// call [`PriceRange::normalized`] before building criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    /// Creates a price range from raw bounds.
    #[inline]
    pub const fn new(min: u32, max: u32) -> Self {
        PriceRange { min, max }
    }

    /// The full slider range. Shares its bounds with the slider default so
    /// the two literals cannot drift apart.
    #[inline]
    pub const fn full() -> Self {
        PriceRange {
            min: PRICE_RANGE_MIN,
            max: PRICE_RANGE_MAX,
        }
    }

    /// Checks whether a price falls inside the range, inclusive on both ends.
    /// `min == max` is a valid range matching only exact-price products.
    #[inline]
    pub const fn contains(&self, price: u32) -> bool {
        price >= self.min && price <= self.max
    }

    /// Returns the range with bounds swapped into order if reversed.
    #[inline]
    pub fn normalized(self) -> Self {
        if self.min > self.max {
            PriceRange {
                min: self.max,
                max: self.min,
            }
        } else {
            self
        }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        PriceRange::full()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product listed in the catalog.
///
/// Externally supplied (static seed data or a fetch the UI performs before
/// filtering begins) and read-only inside this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, stable for the product's lifetime.
    pub id: u32,

    /// Display name shown on the product card.
    pub name: String,

    /// One of the fixed category set.
    pub category: Category,

    /// Price in whole currency units (rupees).
    pub price: u32,

    /// Free-text origin label, typically one of
    /// [`KNOWN_LOCATIONS`](crate::KNOWN_LOCATIONS).
    pub location: String,

    /// Customer rating in [0, 5]. Presentation only, never filtered on.
    pub rating: f32,

    /// Shows the "Featured" badge. Presentation only, never filtered on.
    #[serde(default)]
    pub featured: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================
