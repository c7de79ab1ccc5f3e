//! # Order Module
//!
//! Prices a supplier order: which items, how many boxes, what it costs with GST.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Place Order                                    │
//! │                                                                         │
//! │  OrderBuilder::new(gst)        rate fixed at construction              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  add_line(idx, &item, "2")  ──► OrderLine { boxes: 2, line_subtotal }  │
//! │  add_line(idx, &item, "x")  ──► ParseSkip (line ignored)               │
//! │  add_line(idx, &item, "3")  ──► replaces the earlier line for idx      │
//! │  add_line(idx, &huge, "2")  ──► ParseSkip(TooLarge), order unchanged   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  finish() ──► Receipt { subtotal, tax = subtotal × rate, total }       │
//! │                                                                         │
//! │  Stock quantities are NEVER touched. An order is only a price.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::iter;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ParseSkip, SkipReason};
use crate::money::Money;
use crate::types::{Item, TaxRate};
use crate::validation::parse_order_quantity;

// =============================================================================
// Order Line
// =============================================================================

/// One accepted line of an order.
///
/// Name and box price are copied from the item when the line is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Position of the item in the inventory.
    pub index: usize,

    /// Item name at time of ordering.
    pub name: String,

    /// Boxes ordered (always > 0).
    pub boxes: u32,

    /// Price per box at time of ordering.
    pub box_price: Money,

    /// `boxes × box_price`.
    pub line_subtotal: Money,
}

impl OrderLine {
    /// Builds a line for `boxes` boxes of `item`.
    ///
    /// Fails with [`CoreError::AmountTooLarge`] if `boxes × price` overflows.
    pub fn new(index: usize, item: &Item, boxes: u32) -> CoreResult<Self> {
        let line_subtotal = item
            .price
            .checked_mul(boxes)
            .ok_or(CoreError::AmountTooLarge)?;

        Ok(OrderLine {
            index,
            name: item.name.clone(),
            boxes,
            box_price: item.price,
            line_subtotal,
        })
    }
}

// =============================================================================
// Order Builder
// =============================================================================

/// Collects order lines and prices them with a fixed GST rate.
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    tax_rate: TaxRate,
    lines: Vec<OrderLine>,
}

impl OrderBuilder {
    /// Starts an empty order taxed at `tax_rate`.
    pub fn new(tax_rate: TaxRate) -> Self {
        OrderBuilder {
            tax_rate,
            lines: Vec::new(),
        }
    }

    /// Adds (or replaces) the line for the item at `index`.
    ///
    /// ## Behavior
    /// - `input` must be a whole number of boxes greater than zero
    /// - A line whose subtotal, or the order total it would produce, does not
    ///   fit in a `Decimal` is skipped with [`SkipReason::TooLarge`]
    /// - On `Err(ParseSkip)` the order is unchanged
    /// - If the item is already in the order, its line is replaced in place
    pub fn add_line(
        &mut self,
        index: usize,
        item: &Item,
        input: &str,
    ) -> Result<&OrderLine, ParseSkip> {
        let boxes = parse_order_quantity(input)?;
        let too_large = || ParseSkip::new(input.trim(), SkipReason::TooLarge);
        let line = OrderLine::new(index, item, boxes).map_err(|_| too_large())?;

        // totals must stay computable with the new line in place
        let kept = self.lines.iter().filter(|l| l.index != index);
        totals(kept.chain(iter::once(&line)), self.tax_rate).ok_or_else(too_large)?;

        let position = match self.lines.iter().position(|l| l.index == index) {
            Some(position) => {
                self.lines[position] = line;
                position
            }
            None => {
                self.lines.push(line);
                self.lines.len() - 1
            }
        };

        Ok(&self.lines[position])
    }

    /// Prices the order.
    ///
    /// ## Returns
    /// - `Ok(Receipt)` with at least one line
    /// - `Err(CoreError::EmptyOrder)` if no line was accepted
    /// - `Err(CoreError::AmountTooLarge)` if the totals overflow
    pub fn finish(self) -> CoreResult<Receipt> {
        if self.lines.is_empty() {
            return Err(CoreError::EmptyOrder);
        }
        Receipt::new(self.lines, self.tax_rate)
    }
}

/// `(subtotal, tax, total)` for `lines`, or `None` if any step overflows.
fn totals<'a, I>(lines: I, tax_rate: TaxRate) -> Option<(Money, Money, Money)>
where
    I: IntoIterator<Item = &'a OrderLine>,
{
    let subtotal = Money::checked_sum(lines.into_iter().map(|l| l.line_subtotal))?;
    let tax = subtotal.calculate_tax(tax_rate)?;
    let total = subtotal.checked_add(tax)?;
    Some((subtotal, tax, total))
}

// =============================================================================
// Receipt
// =============================================================================

/// A priced order.
///
/// All amounts are exact; rounding to cents happens when printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<OrderLine>,
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub total: Money,
}

impl Receipt {
    /// Totals `lines` and applies `tax_rate` to the subtotal.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::{Item, Money, OrderLine, Receipt, TaxRate};
    ///
    /// let bun = Item::new("bun", 0, Money::from_cents(785), 144, 2);
    /// let cheese = Item::new("cheese", 0, Money::from_cents(1200), 200, 1);
    ///
    /// let lines = vec![
    ///     OrderLine::new(0, &bun, 2).unwrap(),
    ///     OrderLine::new(1, &cheese, 1).unwrap(),
    /// ];
    /// let receipt = Receipt::new(lines, TaxRate::from_bps(500)).unwrap();
    ///
    /// assert_eq!(receipt.subtotal.to_string(), "$27.70");
    /// assert_eq!(receipt.total.to_string(), "$29.09"); // exact: 29.085
    /// ```
    pub fn new(lines: Vec<OrderLine>, tax_rate: TaxRate) -> CoreResult<Self> {
        let (subtotal, tax, total) = totals(&lines, tax_rate).ok_or(CoreError::AmountTooLarge)?;

        Ok(Receipt {
            lines,
            subtotal,
            tax_rate,
            tax,
            total,
        })
    }

    /// Total boxes across all lines.
    pub fn total_boxes(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.boxes)).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
