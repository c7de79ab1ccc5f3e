//! # stockroom-store: Inventory File Layer for Stockroom
//!
//! This crate persists the inventory as a flat CSV file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Startup                                   Menu option 5               │
//! │       │                                         │                       │
//! │       ▼                                         ▼                       │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐        ┌────────────────────────────┐ │   │
//! │  │   │   InventoryFile    │        │          format            │ │   │
//! │  │   │   (file.rs)        │───────►│  read_inventory (rows →)   │ │   │
//! │  │   │   load() / save()  │        │  write_inventory (→ rows)  │ │   │
//! │  │   └────────────────────┘        └────────────────────────────┘ │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  inventory.csv                                                  │   │
//! │  │  name,quantity,price,units_per_box,critical_level              │   │
//! │  │  burger bun,5,7.85,144,2                                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`file`] - `InventoryFile`: load from / save to a path
//! - [`format`] - The CSV layout, independent of where bytes come from
//! - [`error`] - Load and save error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stockroom_store::InventoryFile;
//!
//! let mut file = InventoryFile::new("inventory.csv");
//! let mut inventory = file.load()?;
//!
//! // ... session mutates quantities ...
//!
//! file.save(&inventory)?;
//! # Ok::<(), stockroom_store::StoreError>(())
//! ```
//!
//! Saving is only ever done on request. Nothing here writes implicitly.
//! A file loaded with `\r\n` line endings is saved with `\r\n` again.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod format;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use file::InventoryFile;
pub use format::{read_inventory, write_inventory, LineEnding, COLUMNS};
