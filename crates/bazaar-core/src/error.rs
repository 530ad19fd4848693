//! # Error Types
//!
//! Typed rule violations for bazaar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bazaar-core errors (this file)                                        │
//! │  └── RuleViolation   - One form rule failed for one field              │
//! │                                                                         │
//! │  bazaar-contact errors (separate crate)                                │
//! │  └── SubmitError     - Outbound submission failures                    │
//! │                                                                         │
//! │  Flow: RuleViolation ──Display──► FormErrors entry ──► inline text     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` rendering IS the user-facing message - the strings the
//!    storefront shows inline next to a field come straight from here
//! 3. Violations are enum variants with context, never bare strings
//! 4. Validation never throws: violations are collected into a
//!    [`FormErrors`](crate::forms::FormErrors) map and returned as data

use thiserror::Error;

// =============================================================================
// Rule Violation
// =============================================================================

/// A single failed form rule, scoped to one field.
///
/// The `label` fields carry the human-facing field label ("Name", "Subject"),
/// not the wire key ("name", "subject"), because the rendering is shown to
/// the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// A required field is empty.
    #[error("{label} is required")]
    Required { label: String },

    /// Field value has fewer characters than the rule's minimum.
    #[error("{label} must be at least {min} characters")]
    TooShort { label: String, min: usize },

    /// Value does not look like an email address.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Value is not a non-negative number.
    #[error("{label} must be a non-negative number")]
    NotANumber { label: String },

    /// Value is not a whole number greater than zero.
    #[error("{label} must be a positive whole number")]
    NotAPositiveInteger { label: String },

    /// Value is a placeholder or otherwise outside the allowed set.
    #[error("Please select a {label}")]
    NotSelected { label: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for fallible core operations.
pub type CoreResult<T> = Result<T, RuleViolation>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages() {
        let err = RuleViolation::TooShort {
            label: "Name".to_string(),
            min: 2,
        };
        assert_eq!(err.to_string(), "Name must be at least 2 characters");

        let err = RuleViolation::InvalidEmail;
        assert_eq!(err.to_string(), "Please enter a valid email address");

        let err = RuleViolation::Required {
            label: "Description".to_string(),
        };
        assert_eq!(err.to_string(), "Description is required");

        let err = RuleViolation::NotSelected {
            label: "category".to_string(),
        };
        assert_eq!(err.to_string(), "Please select a category");
    }
}
