//! # Form Validation
//!
//! Schema-driven form validation for the storefront's intake forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Form Validation Flow                               │
//! │                                                                         │
//! │  FormSchema (declarative)          FormValue (field → string)          │
//! │  ────────────────────────          ──────────────────────────          │
//! │  name:    [MinLen(2)]              name:    "Al"                       │
//! │  email:   [Email]                  email:   "bad-email"                │
//! │  subject: [MinLen(3)]              subject: "Hi"                       │
//! │  message: [MinLen(10)]             message: "short"                    │
//! │           │                                 │                           │
//! │           └────────────┬────────────────────┘                           │
//! │                        ▼                                                │
//! │            schema.validate(&value)                                      │
//! │                        │                                                │
//! │       per field, declaration order:                                     │
//! │       first failing rule's message wins, rest of the field skipped     │
//! │                        │                                                │
//! │          ┌─────────────┴─────────────┐                                  │
//! │          ▼                           ▼                                  │
//! │   Ok(AcceptedForm)            Err(FormErrors)                           │
//! │   value unchanged,            field → one message each,                 │
//! │   ready to submit             rendered inline by the UI                 │
//! │                                                                         │
//! │  NEVER coerces or trims: whitespace that fails a length rule fails.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! New fields and rules are added by editing a schema, not the evaluation
//! engine: a rule is a (predicate, message) pair and the engine only knows
//! how to run predicates in order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RuleViolation;
use crate::types::Category;

/// Transport methods the producer listing form offers.
pub const TRANSPORT_METHODS: &[&str] = &[
    "local-truck",
    "return-shipment",
    "third-party",
    "air-freight",
];

// =============================================================================
// Constraints and Rules
// =============================================================================

/// A predicate over a single field's string value.
///
/// The set is closed but the engine treats every variant uniformly through
/// [`Constraint::holds`]; adding a variant never touches the evaluation loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Non-empty, matched literally (no trimming).
    Required,
    /// At least `n` characters, counted as chars rather than bytes.
    MinLen(usize),
    /// Well-formed email shape: local-part, one `@`, domain with a dot.
    Email,
    /// Parses as a finite number `>= 0`.
    NonNegativeNumber,
    /// Parses as a whole number `> 0`.
    PositiveInteger,
    /// Exactly one of the allowed values (rejects select placeholders).
    OneOf(Vec<String>),
}

impl Constraint {
    /// Evaluates the predicate against a raw field value.
    pub fn holds(&self, value: &str) -> bool {
        match self {
            Constraint::Required => !value.is_empty(),
            Constraint::MinLen(min) => value.chars().count() >= *min,
            Constraint::Email => is_valid_email(value),
            Constraint::NonNegativeNumber => matches!(
                value.parse::<f64>(),
                Ok(number) if number.is_finite() && number >= 0.0
            ),
            Constraint::PositiveInteger => {
                matches!(value.parse::<u64>(), Ok(number) if number > 0)
            }
            Constraint::OneOf(allowed) => allowed.iter().any(|candidate| candidate == value),
        }
    }
}

/// Checks the email shape: local-part "@" domain-with-dot, no whitespace,
/// no second "@", and non-empty segments on both sides of the final dot.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// One (predicate, message) pair in a field's rule list.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    constraint: Constraint,
    message: String,
}

impl Rule {
    /// Creates a rule with an explicit message.
    pub fn new(constraint: Constraint, message: impl Into<String>) -> Self {
        Rule {
            constraint,
            message: message.into(),
        }
    }

    /// Required-field rule with the canonical message.
    pub fn required(label: &str) -> Self {
        let violation = RuleViolation::Required {
            label: label.to_string(),
        };
        Rule::new(Constraint::Required, violation.to_string())
    }

    /// Minimum-length rule with the canonical message.
    pub fn min_len(label: &str, min: usize) -> Self {
        let violation = RuleViolation::TooShort {
            label: label.to_string(),
            min,
        };
        Rule::new(Constraint::MinLen(min), violation.to_string())
    }

    /// Email-shape rule with the canonical message.
    pub fn email() -> Self {
        Rule::new(Constraint::Email, RuleViolation::InvalidEmail.to_string())
    }

    /// Non-negative number rule with the canonical message.
    pub fn non_negative_number(label: &str) -> Self {
        let violation = RuleViolation::NotANumber {
            label: label.to_string(),
        };
        Rule::new(Constraint::NonNegativeNumber, violation.to_string())
    }

    /// Positive whole number rule with the canonical message.
    pub fn positive_integer(label: &str) -> Self {
        let violation = RuleViolation::NotAPositiveInteger {
            label: label.to_string(),
        };
        Rule::new(Constraint::PositiveInteger, violation.to_string())
    }

    /// Allowed-set rule with the canonical message. Used to reject the
    /// "select_category" / "select_transport" placeholder options.
    pub fn one_of(label: &str, allowed: &[&str]) -> Self {
        let violation = RuleViolation::NotSelected {
            label: label.to_string(),
        };
        Rule::new(
            Constraint::OneOf(allowed.iter().map(|s| s.to_string()).collect()),
            violation.to_string(),
        )
    }
}

// =============================================================================
// Schema
// =============================================================================

/// One named field and its ordered rule list.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    name: String,
    rules: Vec<Rule>,
}

impl FieldSpec {
    /// Creates a field spec. An empty rule list is valid: such a field is
    /// always accepted (the listing form's optional "benefits" field).
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        FieldSpec {
            name: name.into(),
            rules,
        }
    }

    /// The field's wire name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An ordered mapping from field name to rule list.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Creates a schema from its field specs, kept in declaration order.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        FormSchema { fields }
    }

    /// The schema's field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    /// Validates a value set against this schema.
    ///
    /// Evaluates every field's rule list in declaration order; for a field,
    /// the FIRST failing rule's message is recorded and evaluation moves to
    /// the next field (one error per field). A field with no failing rule
    /// contributes no entry. Accepted iff no field has an entry; the accepted
    /// value is the input unchanged in content.
    ///
    /// A schema field absent from the value map is evaluated as the empty
    /// string; value entries outside the schema are ignored.
    pub fn validate(&self, value: &FormValue) -> Result<AcceptedForm, FormErrors> {
        let mut errors = FormErrors::default();

        for field in &self.fields {
            let field_value = value.get(&field.name);
            if let Some(rule) = field.rules.iter().find(|r| !r.constraint.holds(field_value)) {
                errors.0.insert(field.name.clone(), rule.message.clone());
            }
        }

        if errors.is_empty() {
            Ok(AcceptedForm(value.clone()))
        } else {
            Err(errors)
        }
    }
}

// =============================================================================
// Values and Errors
// =============================================================================

/// The current string value of every field in a form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValue(BTreeMap<String, String>);

impl FormValue {
    /// Creates a value set for a schema with every field present and empty,
    /// the shape the form has from its first render.
    pub fn for_schema(schema: &FormSchema) -> Self {
        FormValue(
            schema
                .field_names()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
        )
    }

    /// Returns a field's current value, empty string if absent.
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    /// Replaces a field's value wholesale.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Resets every present field to the empty string.
    pub fn clear(&mut self) {
        for value in self.0.values_mut() {
            value.clear();
        }
    }

    /// True when every field is the empty string.
    pub fn is_blank(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    /// Iterates (field, value) pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Field → at-most-one-message map of the current validation verdict.
///
/// Derived, never hand-edited - except that a single field's entry is
/// cleared the instant its value changes (optimistic clear-on-edit), with
/// full re-validation deferred to the next submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    /// Returns the message for a field, if it currently has one.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Removes a field's entry without re-running its rules.
    /// Returns true if an entry was present.
    pub fn clear_field(&mut self, field: &str) -> bool {
        self.0.remove(field).is_some()
    }

    /// True when no field has a message.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields currently carrying a message.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates (field, message) pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A value set that passed validation, unchanged in content.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedForm(FormValue);

impl AcceptedForm {
    /// Returns a field's accepted value, empty string if absent.
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field)
    }

    /// Unwraps the accepted value set.
    pub fn into_value(self) -> FormValue {
        self.0
    }
}

// =============================================================================
// Storefront Schemas
// =============================================================================

/// The contact form schema: name >= 2, email shape, subject >= 3,
/// message >= 10.
pub fn contact_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::new("name", vec![Rule::min_len("Name", 2)]),
        FieldSpec::new("email", vec![Rule::email()]),
        FieldSpec::new("subject", vec![Rule::min_len("Subject", 3)]),
        FieldSpec::new("message", vec![Rule::min_len("Message", 10)]),
    ])
}

/// The producer listing form schema ("Add New Product").
///
/// The category and transport selects ship with placeholder options
/// ("select_category", "select_transport"); the OneOf rules reject those by
/// only accepting real values.
pub fn listing_schema() -> FormSchema {
    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();

    FormSchema::new(vec![
        FieldSpec::new("name", vec![Rule::required("Product name")]),
        FieldSpec::new("description", vec![Rule::required("Description")]),
        FieldSpec::new("category", vec![Rule::one_of("category", &categories)]),
        // Optional free-text field: always accepted.
        FieldSpec::new("benefits", vec![]),
        FieldSpec::new("price", vec![Rule::non_negative_number("Price")]),
        FieldSpec::new("quantity", vec![Rule::positive_integer("Quantity")]),
        FieldSpec::new(
            "transportMethod",
            vec![Rule::one_of("transport method", TRANSPORT_METHODS)],
        ),
    ])
}

// =============================================================================
// Unit Tests
// =============================================================================
