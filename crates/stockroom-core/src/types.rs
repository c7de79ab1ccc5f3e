//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────────┐          ┌─────────────────┐              │
//! │  │         Item            │          │    TaxRate      │              │
//! │  │  ─────────────────────  │          │  ─────────────  │              │
//! │  │  name                   │          │  bps (u32)      │              │
//! │  │  quantity        boxes  │          │  500 = 5% GST   │              │
//! │  │  price           /box   │          └─────────────────┘              │
//! │  │  units_per_box          │                                            │
//! │  │  critical_level  boxes  │                                            │
//! │  │  ┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄  │                                            │
//! │  │  unit_price()  derived  │                                            │
//! │  └─────────────────────────┘                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5% (the default GST)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    pub fn percentage(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2).normalize()
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::from_bps(crate::DEFAULT_GST_BPS)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A stocked product, one row of the inventory file.
///
/// ## Identity
/// `name` is the business key, but uniqueness is advisory: the store keeps
/// duplicates in file order and only reports them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, stored verbatim.
    pub name: String,

    /// Boxes currently in stock.
    pub quantity: u32,

    /// Price per box.
    pub price: Money,

    /// Individual units in one box. Expected to be positive.
    pub units_per_box: u32,

    /// Box count at or below which the item is low on stock.
    pub critical_level: u32,
}

impl Item {
    /// Creates a new item.
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        price: Money,
        units_per_box: u32,
        critical_level: u32,
    ) -> Self {
        Item {
            name: name.into(),
            quantity,
            price,
            units_per_box,
            critical_level,
        }
    }

    /// Price of a single unit (`price / units_per_box`).
    ///
    /// Returns `None` when `units_per_box` is zero. Such rows are accepted
    /// from the file but have no per-unit cost.
    #[inline]
    pub fn unit_price(&self) -> Option<Money> {
        self.price.divide_into(self.units_per_box)
    }

    /// Checks if the item is at or below its critical level.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::{Item, Money};
    ///
    /// let mut bun = Item::new("bun", 5, Money::from_cents(785), 144, 2);
    /// assert!(!bun.is_low_stock());
    ///
    /// bun.critical_level = 6;
    /// assert!(bun.is_low_stock());
    /// ```
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.critical_level
    }

    /// Name for menus and receipts: each word capitalised.
    ///
    /// `"burger bun"` becomes `"Burger Bun"`. The stored name is untouched.
    pub fn display_name(&self) -> String {
        title_case(&self.name)
    }
}

/// Capitalises the first letter of each word and lowercases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = !c.is_numeric();
        }
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bun() -> Item {
        Item::new("burger bun", 5, Money::new(dec!(7.85)), 144, 2)
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert_eq!(rate.percentage(), dec!(8.25));
        assert_eq!(TaxRate::from_bps(500).percentage().to_string(), "5");
    }

    #[test]
    fn test_tax_rate_default_is_gst() {
        assert_eq!(TaxRate::default().bps(), 500);
    }

    #[test]
    fn test_unit_price() {
        let unit = bun().unit_price().unwrap();
        assert_eq!(unit.amount(), dec!(7.85) / dec!(144));
        assert_eq!(unit.round_dp(4).amount(), dec!(0.0545));
    }

    #[test]
    fn test_unit_price_guards_zero_units() {
        let mut item = bun();
        item.units_per_box = 0;
        assert!(item.unit_price().is_none());
    }

    #[test]
    fn test_low_stock_threshold_is_inclusive() {
        let mut item = bun();
        assert!(!item.is_low_stock());

        item.quantity = 2;
        assert!(item.is_low_stock());

        item.quantity = 3;
        assert!(!item.is_low_stock());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(bun().display_name(), "Burger Bun");

        let item = Item::new("BEEF patty 4oz", 1, Money::zero(), 1, 0);
        assert_eq!(item.display_name(), "Beef Patty 4oz");

        let item = Item::new("ketchup-packets", 1, Money::zero(), 1, 0);
        assert_eq!(item.display_name(), "Ketchup-Packets");
    }
}
