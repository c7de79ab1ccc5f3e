//! # Inventory Module
//!
//! The in-memory record sequence and the read/write operations over it.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Inventory (ordered Vec<Item>)                      │
//! │                                                                         │
//! │  Stock Query (read only)                                               │
//! │  ├── list_all()   every item + derived unit price, file order          │
//! │  └── low_stock()  quantity <= critical_level, file order               │
//! │                                                                         │
//! │  Daily Entry (the ONLY mutation)                                       │
//! │  └── Item::record_count("12")  quantity = 12   (overwrite, not +=)     │
//! │      Item::record_count("x")   ParseSkip, quantity unchanged           │
//! │                                                                         │
//! │  Selection (for orders)                                                │
//! │  └── resolve("2") / resolve("cheese slice") → index                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Order is significant everywhere: it is the file order, used for the
//! numbered listing and for save-back.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ParseSkip};
use crate::money::Money;
use crate::types::Item;
use crate::validation::parse_count;

// =============================================================================
// Stock Row
// =============================================================================

/// One line of the inventory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockRow<'a> {
    /// 1-based position, as shown in menus.
    pub number: usize,

    /// The underlying record.
    pub item: &'a Item,

    /// `price / units_per_box`, or `None` when `units_per_box` is zero.
    pub unit_price: Option<Money>,
}

impl<'a> StockRow<'a> {
    fn new(index: usize, item: &'a Item) -> Self {
        StockRow {
            number: index + 1,
            item,
            unit_price: item.unit_price(),
        }
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// The ordered sequence of item records for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Creates an inventory from records in file order.
    pub fn new(items: Vec<Item>) -> Self {
        Inventory { items }
    }

    /// All records, in order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every item with its computed unit price, in order.
    pub fn list_all(&self) -> impl Iterator<Item = StockRow<'_>> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| StockRow::new(index, item))
    }

    /// Items at or below their critical level, in order.
    ///
    /// ## User Workflow
    /// ```text
    /// Startup ──► load ──► low_stock() ──► "!!! LOW STOCK ALERTS !!!"
    /// Menu 1  ──────────► low_stock() ──► alerts, then the listing
    /// ```
    pub fn low_stock(&self) -> Vec<StockRow<'_>> {
        self.list_all().filter(|row| row.item.is_low_stock()).collect()
    }

    /// Resolves a menu selection to an index.
    ///
    /// ## Accepted Forms
    /// - A 1-based item number: `"2"`
    /// - An item name, case-insensitive: `"Cheese Slice"`
    ///
    /// With duplicate names the first match wins.
    pub fn resolve(&self, selection: &str) -> CoreResult<usize> {
        let selection = selection.trim();
        let not_found = || CoreError::ItemNotFound(selection.to_string());

        if !selection.is_empty() && selection.chars().all(|c| c.is_ascii_digit()) {
            return match selection.parse::<usize>() {
                Ok(number) if (1..=self.items.len()).contains(&number) => Ok(number - 1),
                _ => Err(not_found()),
            };
        }

        let wanted = selection.to_lowercase();
        self.items
            .iter()
            .position(|item| item.name.trim().to_lowercase() == wanted)
            .ok_or_else(not_found)
    }

    /// Names that appear more than once (case-insensitive), in first-seen order.
    ///
    /// Uniqueness is advisory, so this is reported, never enforced.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen: Vec<String> = Vec::new();
        let mut duplicates: Vec<&str> = Vec::new();

        for item in &self.items {
            let key = item.name.trim().to_lowercase();
            if seen.contains(&key) {
                if !duplicates
                    .iter()
                    .any(|d| d.trim().to_lowercase() == key)
                {
                    duplicates.push(&item.name);
                }
            } else {
                seen.push(key);
            }
        }

        duplicates
    }
}

// =============================================================================
// Daily Entry
// =============================================================================

impl Item {
    /// Replaces the box count with a typed-in value.
    ///
    /// ## Behavior
    /// - Valid whole number: `quantity` is overwritten (not incremented)
    /// - Anything else: `Err(ParseSkip)` and `quantity` is left as it was
    pub fn record_count(&mut self, input: &str) -> Result<u32, ParseSkip> {
        let count = parse_count(input)?;
        self.quantity = count;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Inventory {
        Inventory::new(vec![
            Item::new("burger bun", 5, Money::new(dec!(7.85)), 144, 2),
            Item::new("cheese slice", 1, Money::new(dec!(12.00)), 200, 1),
            Item::new("beef patty", 0, Money::new(dec!(55.10)), 80, 3),
            Item::new("ketchup", 9, Money::new(dec!(20.00)), 0, 2),
        ])
    }

    #[test]
    fn test_list_all_preserves_order_and_computes_unit_price() {
        let inventory = sample();
        let rows: Vec<_> = inventory.list_all().collect();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[0].item.name, "burger bun");
        assert_eq!(rows[3].number, 4);

        for row in &rows {
            match row.item.units_per_box {
                0 => assert!(row.unit_price.is_none()),
                units => assert_eq!(
                    row.unit_price.unwrap().amount(),
                    row.item.price.amount() / rust_decimal::Decimal::from(units)
                ),
            }
        }
    }

    #[test]
    fn test_low_stock_is_ordered_subset() {
        let inventory = sample();
        let low: Vec<_> = inventory
            .low_stock()
            .iter()
            .map(|row| row.item.name.as_str())
            .collect();

        // cheese: 1 <= 1, patty: 0 <= 3; bun 5 > 2, ketchup 9 > 2
        assert_eq!(low, vec!["cheese slice", "beef patty"]);

        let all: Vec<_> = inventory.list_all().collect();
        for row in inventory.low_stock() {
            assert!(all.contains(&row));
            assert!(row.item.quantity <= row.item.critical_level);
        }
    }

    #[test]
    fn test_low_stock_scenario_critical_level_change() {
        let mut inventory = Inventory::new(vec![Item::new(
            "bun",
            5,
            Money::new(dec!(7.85)),
            144,
            2,
        )]);
        assert!(inventory.low_stock().is_empty());

        inventory.items[0].critical_level = 6;
        assert_eq!(inventory.low_stock().len(), 1);
    }

    #[test]
    fn test_daily_entry_skips_bad_input_only() {
        let mut inventory = sample();
        let inputs = ["10", "lots", "4", "-2"];

        let mut skipped = Vec::new();
        for (index, input) in inputs.iter().enumerate() {
            let item = inventory.get_mut(index).unwrap();
            if item.record_count(input).is_err() {
                skipped.push(index);
            }
        }

        assert_eq!(skipped, vec![1, 3]);
        let quantities: Vec<u32> = inventory.items().iter().map(|i| i.quantity).collect();
        // cheese keeps 1, ketchup keeps 9
        assert_eq!(quantities, vec![10, 1, 4, 9]);
    }

    #[test]
    fn test_record_count_overwrites() {
        let mut item = Item::new("bun", 5, Money::zero(), 1, 0);
        assert_eq!(item.record_count(" 2 "), Ok(2));
        assert_eq!(item.quantity, 2);

        assert_eq!(item.record_count("0"), Ok(0));
        assert_eq!(item.quantity, 0);
    }

    #[test]
    fn test_resolve_by_number_and_name() {
        let inventory = sample();

        assert_eq!(inventory.resolve("1").unwrap(), 0);
        assert_eq!(inventory.resolve(" 4 ").unwrap(), 3);
        assert_eq!(inventory.resolve("Cheese Slice").unwrap(), 1);
        assert_eq!(inventory.resolve("BEEF PATTY").unwrap(), 2);

        assert!(inventory.resolve("0").is_err());
        assert!(inventory.resolve("5").is_err());
        assert!(inventory.resolve("").is_err());
        assert!(inventory.resolve("pickles").is_err());
    }

    #[test]
    fn test_duplicate_names() {
        let mut items = sample().items().to_vec();
        assert!(Inventory::new(items.clone()).duplicate_names().is_empty());

        items.push(Item::new("Burger Bun", 1, Money::zero(), 1, 0));
        items.push(Item::new("burger bun", 1, Money::zero(), 1, 0));
        let inventory = Inventory::new(items);
        assert_eq!(inventory.duplicate_names(), vec!["Burger Bun"]);
    }

    #[test]
    fn test_empty_inventory() {
        let inventory = Inventory::default();
        assert!(inventory.is_empty());
        assert_eq!(inventory.list_all().count(), 0);
        assert!(inventory.low_stock().is_empty());
    }
}
