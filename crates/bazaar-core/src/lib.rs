//! # bazaar-core: Pure Business Logic for the Bazaar Storefront
//!
//! This crate is the **heart** of the Bazaar storefront. It contains the two
//! pieces of the system where correctness rules (not layout rules) govern
//! behavior, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront UI (TypeScript)                      │   │
//! │  │   Search box ──► Category/Location selects ──► Price slider    │   │
//! │  │   Contact form ──► Producer listing form                        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ criteria / form values                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │   forms   │  │   error   │  │   │
//! │  │   │  Product  │  │  criteria │  │  schemas  │  │violations │  │   │
//! │  │   │ PriceRange│  │  filter   │  │  validate │  │ messages  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ filtered view / validation verdicts    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              bazaar-contact (submission boundary)               │   │
//! │  │          HTTP POST of accepted contact messages                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, PriceRange)
//! - [`catalog`] - Filter criteria and the catalog filter
//! - [`forms`] - Schema-driven form validation
//! - [`error`] - Typed rule violations and their user-facing messages
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Errors As Data**: Validation verdicts are returned, never thrown
//! 4. **Replace, Don't Patch**: Criteria and form values are snapshots; the
//!    UI replaces them wholesale and re-invokes the pure function
//!
//! ## Example Usage
//!
//! ```rust
//! use bazaar_core::catalog::{filter_products, sample_products, FilterCriteria};
//!
//! let products = sample_products();
//! let criteria = FilterCriteria::default().with_search("honey");
//!
//! let matches = filter_products(&products, &criteria);
//! assert!(matches.iter().all(|p| p.name.to_lowercase().contains("honey")));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod forms;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bazaar_core::Product` instead of
// `use bazaar_core::types::Product`

pub use catalog::{filter_products, FilterCriteria};
pub use error::{CoreResult, RuleViolation};
pub use forms::{AcceptedForm, FormErrors, FormSchema, FormValue};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lower bound of the price slider AND of the default filter range.
///
/// ## Why a shared constant?
/// The slider default and the filter default used to be duplicated literals
/// that could drift apart. Both now read from here.
pub const PRICE_RANGE_MIN: u32 = 0;

/// Upper bound of the price slider AND of the default filter range.
pub const PRICE_RANGE_MAX: u32 = 2000;

/// Origin labels the storefront currently offers in its location select.
///
/// Locations are free text on products, not an enumerated set; this list
/// exists so data-entry UIs can constrain input and keep exact-match
/// location filtering useful.
pub const KNOWN_LOCATIONS: &[&str] = &[
    "Uttarakhand",
    "Himachal Pradesh",
    "Kashmir",
    "West Bengal",
    "Nepal Border",
];
