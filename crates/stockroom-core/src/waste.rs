//! # Waste Module
//!
//! Puts a dollar figure on spoiled or dropped product.
//!
//! Waste is counted in **units** (buns, patties, slices), not boxes, and
//! priced at `price / units_per_box`. Like orders, a waste log is a report
//! only: stock quantities are not reduced.

use serde::{Deserialize, Serialize};

use crate::error::{ParseSkip, SkipReason};
use crate::money::Money;
use crate::types::Item;
use crate::validation::parse_count;

/// Loss recorded for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteLine {
    pub name: String,
    pub units: u32,
    pub unit_price: Money,
    /// `units × unit_price`, exact.
    pub loss: Money,
}

/// Per-item waste entries for one pass over the inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteLog {
    lines: Vec<WasteLine>,
    total: Money,
}

impl WasteLog {
    pub fn new() -> Self {
        WasteLog::default()
    }

    /// Records `input` wasted units of `item`.
    ///
    /// ## Behavior
    /// - `input` must be a whole number of units (zero is accepted, loss $0)
    /// - An item with `units_per_box == 0` has no unit price and is skipped
    ///   with [`SkipReason::NoUnitPrice`]
    /// - A loss, or a running total, that does not fit in a `Decimal` is
    ///   skipped with [`SkipReason::TooLarge`]
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::{Item, Money, WasteLog};
    ///
    /// let bun = Item::new("bun", 5, Money::from_cents(785), 144, 2);
    /// let mut log = WasteLog::new();
    ///
    /// let line = log.record(&bun, "10").unwrap();
    /// assert_eq!(line.loss.to_string(), "$0.55"); // exact: 0.5451388...
    /// ```
    pub fn record(&mut self, item: &Item, input: &str) -> Result<&WasteLine, ParseSkip> {
        let units = parse_count(input)?;
        let skip = |reason| ParseSkip::new(input.trim(), reason);
        let unit_price = item
            .unit_price()
            .ok_or_else(|| skip(SkipReason::NoUnitPrice))?;

        // multiplied before dividing to keep full precision
        let loss = item
            .price
            .checked_mul(units)
            .ok_or_else(|| skip(SkipReason::TooLarge))?
            .divide_into(item.units_per_box)
            .ok_or_else(|| skip(SkipReason::NoUnitPrice))?;
        self.total = self
            .total
            .checked_add(loss)
            .ok_or_else(|| skip(SkipReason::TooLarge))?;

        self.lines.push(WasteLine {
            name: item.name.clone(),
            units,
            unit_price,
            loss,
        });

        Ok(&self.lines[self.lines.len() - 1])
    }

    pub fn lines(&self) -> &[WasteLine] {
        &self.lines
    }

    /// Grand total loss across all recorded items.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Total wasted units across all recorded items.
    pub fn total_units(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.units)).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
