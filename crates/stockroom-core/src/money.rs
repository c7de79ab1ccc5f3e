//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    1.385 is stored as 1.38499999999999989...                           │
//! │    format!("{:.2}", 1.385) = "1.38"  ❌ WRONG!                          │
//! │                                                                         │
//! │  Integer cents cannot hold per-unit prices:                            │
//! │    $7.85 per box / 144 buns = $0.05451388... per bun                   │
//! │                                                                         │
//! │  OUR SOLUTION: Exact base-10 decimals (rust_decimal)                    │
//! │    All arithmetic is exact. Rounding happens ONLY for display,         │
//! │    half away from zero: $29.085 → $29.09                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//! use std::str::FromStr;
//!
//! let price = Money::from_str("7.85").unwrap();
//! let doubled = price.checked_mul(2).unwrap(); // $15.70
//! assert_eq!(doubled.to_string(), "$15.70");
//! ```
//!
//! ## Overflow
//! `Decimal` holds 96 bits of mantissa. A price read from the inventory file
//! can sit right at that ceiling, so every operation that can grow an amount
//! is checked and returns `None` instead of panicking.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::TaxRate;
use crate::CURRENCY_DISPLAY_DP;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact decimal amount of the local currency.
///
/// ## Design Decisions
/// - **Decimal, not f64**: `0.1 + 0.2 == 0.3` holds, and `1.385` is really `1.385`
/// - **Scale is preserved**: `"12.00"` parses and prints back as `12.00`, which
///   keeps the inventory file byte-stable across a load/save round-trip
/// - **Rounding only at the edges**: [`Money::round_dp`] and `Display`
///
/// ## Where Money is Used
/// ```text
/// Item.price ──┬──► OrderLine.line_subtotal ──► Receipt.subtotal ──► tax ──► total
///              │
///              └──► Item::unit_price() ──► WasteLine.loss ──► WasteLog::total()
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(1200);
    /// assert_eq!(price.to_string(), "$12.00");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Calculates tax exactly, without rounding.
    ///
    /// ## Implementation
    /// `amount * bps / 10000`. Decimal division by a power of ten is exact,
    /// so `$27.70` at 5% is exactly `$1.385`; the half cent is only resolved
    /// when the amount is displayed.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    /// use stockroom_core::types::TaxRate;
    /// use rust_decimal::Decimal;
    ///
    /// let subtotal = Money::from_cents(2770);
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(500)).unwrap();
    /// assert_eq!(tax.amount(), Decimal::new(1385, 3));
    /// assert_eq!(tax.to_string(), "$1.39");
    /// ```
    ///
    /// Returns `None` if `amount * bps` does not fit in a `Decimal`.
    pub fn calculate_tax(&self, rate: TaxRate) -> Option<Money> {
        self.0
            .checked_mul(Decimal::from(rate.bps()))?
            .checked_div(Decimal::from(10_000u32))
            .map(Money)
    }

    /// Multiplies money by a box or unit count, `None` on overflow.
    #[inline]
    pub fn checked_mul(&self, qty: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Sums `amounts`, stopping at the first overflow.
    ///
    /// An empty iterator sums to zero.
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |total, amount| total.checked_add(amount))
    }

    /// Splits the amount into `parts` equal shares.
    ///
    /// Returns `None` when `parts` is zero; the caller decides what an
    /// undefined share means (see `Item::unit_price`).
    pub fn divide_into(&self, parts: u32) -> Option<Self> {
        if parts == 0 {
            return None;
        }
        Some(Money(self.0 / Decimal::from(parts)))
    }

    /// Rounds to `dp` decimal places, half away from zero.
    ///
    /// ## Rounding Policy
    /// ```text
    ///  29.085  → 29.09
    ///  29.084  → 29.08
    ///   0.0545 →  0.055   (dp = 3)
    /// ```
    /// The result always carries exactly `dp` decimal places, so `5` rounds
    /// to `5.00`.
    pub fn round_dp(&self, dp: u32) -> Money {
        let mut rounded = self
            .0
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(dp);
        Money(rounded)
    }

    /// Formats the amount with a currency symbol at `dp` decimal places.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    /// use std::str::FromStr;
    ///
    /// let unit = Money::from_str("0.0545138").unwrap();
    /// assert_eq!(unit.format_with("$", 3), "$0.055");
    /// ```
    pub fn format_with(&self, symbol: &str, dp: u32) -> String {
        let rounded = self.round_dp(dp).0;
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-{}{}", symbol, rounded.abs())
        } else {
            format!("{}{}", symbol, rounded.abs())
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount rounded to cents, e.g. `$29.09`.
///
/// ## Note
/// This uses the `$` symbol. The CLI formats with the configured symbol via
/// [`Money::format_with`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$", CURRENCY_DISPLAY_DP))
    }
}

/// Parses a plain decimal such as `7.85` (no currency symbol).
impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Money)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_str_preserves_scale() {
        let price = Money::from_str("12.00").unwrap();
        assert_eq!(price.amount().to_string(), "12.00");

        let price = Money::from_str(" 7.85 ").unwrap();
        assert_eq!(price.amount(), dec!(7.85));

        assert!(Money::from_str("seven").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::new(dec!(5)).to_string(), "$5.00");
        assert_eq!(Money::new(dec!(-5.5)).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(Money::new(dec!(29.085)).to_string(), "$29.09");
        assert_eq!(Money::new(dec!(29.084)).to_string(), "$29.08");
        assert_eq!(Money::new(dec!(1.385)).to_string(), "$1.39");
        assert_eq!(Money::new(dec!(0.545)).to_string(), "$0.55");
        assert_eq!(Money::new(dec!(-0.005)).to_string(), "-$0.01");
    }

    #[test]
    fn test_tiny_negative_rounds_to_plain_zero() {
        assert_eq!(Money::new(dec!(-0.001)).to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b).unwrap().amount(), dec!(15.00));
        assert_eq!(a.checked_mul(3).unwrap().amount(), dec!(30.00));

        let total = Money::checked_sum([a, b, b]).unwrap();
        assert_eq!(total, Money::from_cents(2000));
        assert_eq!(Money::checked_sum(Vec::new()), Some(Money::zero()));
    }

    #[test]
    fn test_overflow_returns_none() {
        let max = Money::new(Decimal::MAX);

        assert!(max.checked_mul(2).is_none());
        assert!(max.checked_add(Money::from_cents(100)).is_none());
        assert!(Money::checked_sum([max, max]).is_none());
        assert!(max.calculate_tax(TaxRate::from_bps(500)).is_none());

        assert_eq!(max.checked_mul(1), Some(max));
        assert_eq!(max.checked_add(Money::zero()), Some(max));
    }

    #[test]
    fn test_tax_is_exact() {
        // $27.70 at 5% = $1.385, not rounded during computation
        let tax = Money::new(dec!(27.70))
            .calculate_tax(TaxRate::from_bps(500))
            .unwrap();
        assert_eq!(tax.amount(), dec!(1.385));

        // $10.00 at 8.25% = $0.825
        let tax = Money::from_cents(1000)
            .calculate_tax(TaxRate::from_bps(825))
            .unwrap();
        assert_eq!(tax.amount(), dec!(0.825));
        assert_eq!(tax.to_string(), "$0.83");
    }

    #[test]
    fn test_divide_into() {
        let per_unit = Money::new(dec!(7.85)).divide_into(144).unwrap();
        assert_eq!(per_unit.round_dp(4).amount(), dec!(0.0545));
        assert_eq!(per_unit.format_with("$", 3), "$0.055");

        assert!(Money::new(dec!(7.85)).divide_into(0).is_none());
    }

    #[test]
    fn test_round_dp_pads_scale() {
        assert_eq!(Money::new(dec!(5)).round_dp(2).amount().to_string(), "5.00");
        assert_eq!(Money::new(dec!(0.1)).round_dp(3).amount().to_string(), "0.100");
    }

    #[test]
    fn test_zero_and_checks() {
        assert_eq!(Money::default(), Money::zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::new(dec!(-1)).is_negative());
        assert!(!Money::new(dec!(1)).is_negative());
    }
}
