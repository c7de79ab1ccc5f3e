//! # Inventory File
//!
//! Loads the inventory from, and saves it to, a path on disk.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Startup          InventoryFile::load()                                │
//! │                   ├── missing file      → StoreError::NotFound (fatal) │
//! │                   ├── unreadable / bad  → StoreError::*        (fatal) │
//! │                   └── Ok(Inventory)     + warnings for odd rows        │
//! │                                                                         │
//! │  Menu option 5    InventoryFile::save(&inventory)                      │
//! │                   ├── Ok(())            → session ends                 │
//! │                   └── StoreError::Save  → reported, session continues  │
//! │                                                                         │
//! │  Any other exit   nothing is written                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Save overwrites in place. An interrupted save can leave a truncated file.
//! The line ending seen on load (`\n` or `\r\n`) is kept for the save.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use stockroom_core::Inventory;

use crate::error::{StoreError, StoreResult};
use crate::format::{read_inventory, write_inventory, LineEnding};

/// Handle to the inventory file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryFile {
    path: PathBuf,
    /// Ending found by the last load; `Lf` for a file never loaded.
    line_ending: LineEnding,
}

impl InventoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        InventoryFile {
            path: path.into(),
            line_ending: LineEnding::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Reads every record from the file.
    ///
    /// ## What This Does
    /// 1. Reads the file (`NotFound` if it does not exist)
    /// 2. Remembers its line ending for the next [`InventoryFile::save`]
    /// 3. Parses the header and every row (first bad row aborts)
    /// 4. Warns about duplicate names and rows with zero units per box;
    ///    both are still loaded
    pub fn load(&mut self) -> StoreResult<Inventory> {
        debug!(path = %self.path.display(), "Loading inventory");

        let bytes = fs::read(&self.path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound {
                path: self.path.clone(),
            },
            _ => StoreError::Read {
                path: self.path.clone(),
                source,
            },
        })?;

        let line_ending = LineEnding::detect(&bytes);
        debug!(?line_ending, "Detected line ending");

        let inventory = read_inventory(bytes.as_slice())?;
        self.line_ending = line_ending;

        for name in inventory.duplicate_names() {
            warn!(name = %name, "Duplicate item name in inventory file");
        }
        for item in inventory.items().iter().filter(|i| i.units_per_box == 0) {
            warn!(name = %item.name, "Item has zero units per box; unit price unavailable");
        }

        info!(
            path = %self.path.display(),
            items = inventory.len(),
            low_stock = inventory.low_stock().len(),
            "Inventory loaded"
        );

        Ok(inventory)
    }

    /// Overwrites the file with the header and every record.
    ///
    /// ## Errors
    /// Any failure to create or write the file is [`StoreError::Save`].
    /// The in-memory inventory is untouched either way.
    pub fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        self.write(inventory).map_err(|source| StoreError::Save {
            path: self.path.clone(),
            source,
        })?;

        info!(
            path = %self.path.display(),
            items = inventory.len(),
            "Inventory saved"
        );
        Ok(())
    }

    fn write(&self, inventory: &Inventory) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        write_inventory(&mut writer, inventory, self.line_ending)?;
        writer.flush()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
