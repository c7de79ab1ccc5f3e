//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── ValidationError  - Field validation failures                      │
//! │  └── ParseSkip        - One typed-in count was unusable (non-fatal)    │
//! │                                                                         │
//! │  stockroom-store errors (separate crate)                               │
//! │  └── StoreError       - Inventory file load/save failures              │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── AppError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → AppError → stderr                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## ParseSkip Is Not a Failure
//! Daily entry, ordering and waste logging all read one number per item.
//! A bad number skips that item and the loop carries on; nothing aborts.
//! `ParseSkip` is the typed `Err` side of that per-entry result.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No item matches a menu selection (by number or name).
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// An order was finished without any accepted lines.
    #[error("Order has no lines")]
    EmptyOrder,

    /// A subtotal, tax or total no longer fits in a `Decimal`.
    #[error("Amount is too large")]
    AmountTooLarge,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors.
///
/// Raised while turning raw text (file fields, configuration values) into
/// domain values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: String, max: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Parse Skip
// =============================================================================

/// Why a single typed-in count was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Not a whole number at all (`"abc"`, `"2.5"`, empty line).
    NotANumber,

    /// A whole number below zero.
    Negative,

    /// Zero where at least one is required (order quantities).
    Zero,

    /// The item has no unit price because `units_per_box` is zero.
    NoUnitPrice,

    /// The count is valid but the resulting amount would overflow.
    TooLarge,
}

/// A per-entry input that could not be used.
///
/// ## User Workflow
/// ```text
/// Daily Entry: "2. Cheese Slice - Boxes on hand: " ← "ten"
///      │
///      ▼
/// parse_count("ten") → Err(ParseSkip { reason: NotANumber, .. })
///      │
///      ▼
/// "Invalid input, skipping."   quantity unchanged, next item
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("skipped '{input}': {reason}")]
pub struct ParseSkip {
    /// The raw text as typed (trimmed).
    pub input: String,

    /// Why it was rejected.
    pub reason: SkipReason,
}

impl ParseSkip {
    pub fn new(input: impl Into<String>, reason: SkipReason) -> Self {
        ParseSkip {
            input: input.into(),
            reason,
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SkipReason::NotANumber => "not a whole number",
            SkipReason::Negative => "must not be negative",
            SkipReason::Zero => "must be greater than zero",
            SkipReason::NoUnitPrice => "item has no units per box",
            SkipReason::TooLarge => "amount is too large",
        };
        f.write_str(text)
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotFound("7".to_string());
        assert_eq!(err.to_string(), "Item not found: 7");
        assert_eq!(CoreError::AmountTooLarge.to_string(), "Amount is too large");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_parse_skip_message() {
        let skip = ParseSkip::new("ten", SkipReason::NotANumber);
        assert_eq!(skip.to_string(), "skipped 'ten': not a whole number");
    }
}
