//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom, the restaurant inventory tracker.
//! It contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (Menu Loop)                         │   │
//! │  │    View ──► Daily Entry ──► Place Order ──► Log Waste ──► Save  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │   money   │  │   order   │  │   waste   │  │   │
//! │  │   │ Inventory │  │   Money   │  │ Receipt   │  │ WasteLog  │  │   │
//! │  │   │ low_stock │  │  TaxRate  │  │ OrderLine │  │ WasteLine │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              stockroom-store (Flat-File Layer)                  │   │
//! │  │                inventory.csv load / save                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, TaxRate)
//! - [`money`] - Exact decimal Money and the display rounding policy
//! - [`error`] - Domain error types, including the per-entry [`ParseSkip`]
//! - [`validation`] - Input parsing and business rule validation
//! - [`inventory`] - The ordered record sequence, stock queries, daily counts
//! - [`order`] - Order pricing (subtotal, GST, total)
//! - [`waste`] - Waste loss calculation
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Item, Money, OrderBuilder, TaxRate};
//! use std::str::FromStr;
//!
//! let bun = Item::new("burger bun", 5, Money::from_str("7.85").unwrap(), 144, 2);
//!
//! let mut order = OrderBuilder::new(TaxRate::from_bps(500)); // 5% GST
//! order.add_line(0, &bun, "2").unwrap();
//!
//! let receipt = order.finish().unwrap();
//! assert_eq!(receipt.total.to_string(), "$16.49"); // 15.70 + 0.785
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;
pub mod waste;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ParseSkip, SkipReason, ValidationError};
pub use inventory::{Inventory, StockRow};
pub use money::Money;
pub use order::{OrderBuilder, OrderLine, Receipt};
pub use types::*;
pub use waste::{WasteLine, WasteLog};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default GST rate in basis points (5%).
pub const DEFAULT_GST_BPS: u32 = 500;

/// Decimal places used when printing currency amounts.
pub const CURRENCY_DISPLAY_DP: u32 = 2;

/// Decimal places used when printing per-unit prices.
///
/// Unit prices are usually fractions of a cent (7.85 / 144 = 0.0545...), so
/// the listing shows one extra digit.
pub const UNIT_PRICE_DISPLAY_DP: u32 = 3;
