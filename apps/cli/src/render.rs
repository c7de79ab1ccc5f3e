//! # Terminal Rendering
//!
//! Text layouts for the inventory table, low-stock alerts, receipts and the
//! waste total. Amounts are rounded here and nowhere else.

use std::io::{self, Write};

use stockroom_core::{
    title_case, Inventory, Money, Receipt, WasteLog, CURRENCY_DISPLAY_DP, UNIT_PRICE_DISPLAY_DP,
};

/// Formats amounts with the configured currency symbol.
#[derive(Debug, Clone)]
pub struct Renderer {
    symbol: String,
}

impl Renderer {
    pub fn new(symbol: impl Into<String>) -> Self {
        Renderer {
            symbol: symbol.into(),
        }
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with(&self.symbol, CURRENCY_DISPLAY_DP)
    }

    /// Numbered listing of every item.
    ///
    /// ```text
    /// No. Item                 Boxes    Box Price  Per Unit
    /// 1   Burger Bun           5        $7.85      $0.055
    /// ```
    pub fn inventory_table<W: Write>(&self, out: &mut W, inventory: &Inventory) -> io::Result<()> {
        writeln!(out, "\n======================== INVENTORY ========================")?;
        writeln!(out, "{:<3} {:<20} {:<8} {:<10} {}", "No.", "Item", "Boxes", "Box Price", "Per Unit")?;

        for row in inventory.list_all() {
            let per_unit = row
                .unit_price
                .map(|p| p.format_with(&self.symbol, UNIT_PRICE_DISPLAY_DP))
                .unwrap_or_else(|| "n/a".to_string());

            writeln!(
                out,
                "{:<3} {:<20} {:<8} {:<10} {}",
                row.number,
                row.item.display_name(),
                row.item.quantity,
                self.money(row.item.price),
                per_unit
            )?;
        }

        writeln!(out, "{}", "=".repeat(40))
    }

    /// The low-stock notification block.
    pub fn low_stock_alerts<W: Write>(&self, out: &mut W, inventory: &Inventory) -> io::Result<()> {
        writeln!(out, "\n !!! LOW STOCK ALERTS !!!")?;

        let low = inventory.low_stock();
        if low.is_empty() {
            return writeln!(out, "All products are sufficiently stocked.");
        }

        for row in low {
            writeln!(
                out,
                "- {}: Only {} boxes left (Critical: {})",
                row.item.display_name(),
                row.item.quantity,
                row.item.critical_level
            )?;
        }
        Ok(())
    }

    /// Order summary with subtotal, GST and total.
    pub fn receipt<W: Write>(&self, out: &mut W, receipt: &Receipt) -> io::Result<()> {
        writeln!(out, "\n=== Order Summary ===")?;
        writeln!(out, "{:<20} {:<6} {:<12} {}", "Item", "Boxes", "Unit Price", "Subtotal")?;

        for line in &receipt.lines {
            writeln!(
                out,
                "{:<20} {:<6} {:<12} {}",
                title_case(&line.name),
                line.boxes,
                self.money(line.box_price),
                self.money(line.line_subtotal)
            )?;
        }

        writeln!(out, "{}", "-".repeat(50))?;
        writeln!(out, "Subtotal: {}", self.money(receipt.subtotal))?;
        writeln!(
            out,
            "GST ({}%): {}",
            receipt.tax_rate.percentage(),
            self.money(receipt.tax)
        )?;
        writeln!(out, "Total: {}", self.money(receipt.total))
    }

    /// Grand total of a waste pass.
    pub fn waste_total<W: Write>(&self, out: &mut W, log: &WasteLog) -> io::Result<()> {
        writeln!(out, "Total cost of waste: {}", self.money(log.total()))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new("$")
    }
}
