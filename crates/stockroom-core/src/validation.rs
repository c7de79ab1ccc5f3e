//! # Validation Module
//!
//! Turns raw text into domain values.
//!
//! ## Two Kinds of Input
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Inventory file fields (parse_field_*)                                 │
//! │  ├── quantity, units_per_box, critical_level: whole numbers >= 0       │
//! │  ├── price: decimal >= 0                                               │
//! │  └── Failure → ValidationError → fatal LoadError                       │
//! │                                                                         │
//! │  Typed-in counts (parse_count / parse_order_quantity)                  │
//! │  ├── whole numbers >= 0 (orders: >= 1)                                 │
//! │  └── Failure → ParseSkip → that item is skipped, loop continues        │
//! │                                                                         │
//! │  Configuration (parse_tax_rate)                                        │
//! │  └── Failure → ValidationError → fatal ConfigError                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{ParseSkip, SkipReason, ValidationError};
use crate::money::Money;
use crate::types::TaxRate;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Typed-In Counts
// =============================================================================

/// Parses a typed-in box or unit count.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must be a whole number (`"3"`, not `"3.0"` or `"three"`)
/// - Must not be negative
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_count;
/// use stockroom_core::SkipReason;
///
/// assert_eq!(parse_count(" 12 "), Ok(12));
/// assert_eq!(parse_count("0"), Ok(0));
/// assert_eq!(parse_count("-1").unwrap_err().reason, SkipReason::Negative);
/// assert_eq!(parse_count("ten").unwrap_err().reason, SkipReason::NotANumber);
/// ```
pub fn parse_count(input: &str) -> Result<u32, ParseSkip> {
    let trimmed = input.trim();

    match trimmed.parse::<u32>() {
        Ok(value) => Ok(value),
        Err(_) if is_negative_integer(trimmed) => {
            Err(ParseSkip::new(trimmed, SkipReason::Negative))
        }
        Err(_) => Err(ParseSkip::new(trimmed, SkipReason::NotANumber)),
    }
}

/// Parses a typed-in order quantity: like [`parse_count`], but zero boxes
/// is also rejected.
pub fn parse_order_quantity(input: &str) -> Result<u32, ParseSkip> {
    match parse_count(input)? {
        0 => Err(ParseSkip::new(input.trim(), SkipReason::Zero)),
        qty => Ok(qty),
    }
}

fn is_negative_integer(text: &str) -> bool {
    text.strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

// =============================================================================
// File Fields
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Parses a whole-number file field (`quantity`, `units_per_box`,
/// `critical_level`).
pub fn parse_field_count(field: &str, value: &str) -> ValidationResult<u32> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    value.parse::<u32>().map_err(|_| {
        if is_negative_integer(value) {
            ValidationError::Negative {
                field: field.to_string(),
            }
        } else {
            ValidationError::InvalidFormat {
                field: field.to_string(),
                reason: format!("'{value}' is not a whole number"),
            }
        }
    })
}

/// Parses the `price` file field.
///
/// ## Rules
/// - Must be a decimal number (`7.85`, `12`, `12.00`)
/// - Must not be negative
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_field_price;
///
/// assert_eq!(parse_field_price("7.85").unwrap().to_string(), "$7.85");
/// assert!(parse_field_price("0").is_ok());
/// assert!(parse_field_price("-1.00").is_err());
/// assert!(parse_field_price("$7.85").is_err());
/// ```
pub fn parse_field_price(value: &str) -> ValidationResult<Money> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let price = Money::from_str(value).map_err(|_| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: format!("'{value}' is not a decimal number"),
    })?;

    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(price)
}

// =============================================================================
// Configuration
// =============================================================================

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: "0".to_string(),
            max: "1".to_string(),
        });
    }

    Ok(())
}

/// Parses a tax rate written as a fraction (`"0.05"` for 5%).
///
/// Rates finer than one basis point are rejected rather than rounded.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_tax_rate;
///
/// assert_eq!(parse_tax_rate("0.05").unwrap().bps(), 500);
/// assert_eq!(parse_tax_rate("0.0825").unwrap().bps(), 825);
/// assert!(parse_tax_rate("5%").is_err());
/// assert!(parse_tax_rate("1.5").is_err());
/// ```
pub fn parse_tax_rate(value: &str) -> ValidationResult<TaxRate> {
    let value = value.trim();
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "tax_rate".to_string(),
        reason: reason.to_string(),
    };

    let fraction = Decimal::from_str(value).map_err(|_| invalid("not a decimal fraction"))?;
    if fraction.is_sign_negative() && !fraction.is_zero() {
        return Err(ValidationError::Negative {
            field: "tax_rate".to_string(),
        });
    }

    let bps = fraction * Decimal::from(10_000u32);
    if !bps.fract().is_zero() {
        return Err(invalid("finer than one basis point"));
    }

    let bps = bps.to_u32().ok_or_else(|| ValidationError::OutOfRange {
        field: "tax_rate".to_string(),
        min: "0".to_string(),
        max: "1".to_string(),
    })?;
    validate_tax_rate_bps(bps)?;

    Ok(TaxRate::from_bps(bps))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("5"), Ok(5));
        assert_eq!(parse_count("  42\n"), Ok(42));
        assert_eq!(parse_count("0"), Ok(0));

        assert_eq!(parse_count("").unwrap_err().reason, SkipReason::NotANumber);
        assert_eq!(parse_count("2.5").unwrap_err().reason, SkipReason::NotANumber);
        assert_eq!(parse_count("five").unwrap_err().reason, SkipReason::NotANumber);
        assert_eq!(parse_count("-3").unwrap_err().reason, SkipReason::Negative);
        assert_eq!(parse_count("-").unwrap_err().reason, SkipReason::NotANumber);
    }

    #[test]
    fn test_parse_count_keeps_trimmed_input() {
        let skip = parse_count("  abc ").unwrap_err();
        assert_eq!(skip.input, "abc");
    }

    #[test]
    fn test_parse_order_quantity() {
        assert_eq!(parse_order_quantity("3"), Ok(3));
        assert_eq!(parse_order_quantity("0").unwrap_err().reason, SkipReason::Zero);
        assert_eq!(parse_order_quantity("x").unwrap_err().reason, SkipReason::NotANumber);
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("burger bun").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_parse_field_count() {
        assert_eq!(parse_field_count("quantity", "5"), Ok(5));
        assert_eq!(
            parse_field_count("quantity", "-5"),
            Err(ValidationError::Negative {
                field: "quantity".to_string()
            })
        );
        assert!(matches!(
            parse_field_count("units_per_box", "1.5"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_field_count("critical_level", ""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_parse_field_price() {
        assert_eq!(
            parse_field_price("12.00").unwrap().amount().to_string(),
            "12.00"
        );
        assert!(parse_field_price("").is_err());
        assert!(parse_field_price("abc").is_err());
        assert_eq!(
            parse_field_price("-0.01"),
            Err(ValidationError::Negative {
                field: "price".to_string()
            })
        );
    }

    #[test]
    fn test_parse_tax_rate() {
        assert_eq!(parse_tax_rate("0.05").unwrap().bps(), 500);
        assert_eq!(parse_tax_rate("0").unwrap().bps(), 0);
        assert_eq!(parse_tax_rate("1").unwrap().bps(), 10_000);
        assert_eq!(parse_tax_rate("0.13").unwrap().bps(), 1_300);

        assert!(parse_tax_rate("").is_err());
        assert!(parse_tax_rate("-0.05").is_err());
        assert!(parse_tax_rate("0.00001").is_err());
        assert!(parse_tax_rate("2").is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(825).is_ok());
        assert!(validate_tax_rate_bps(10_000).is_ok());
        assert!(validate_tax_rate_bps(10_001).is_err());
    }
}
