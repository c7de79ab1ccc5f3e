//! # Store Error Types
//!
//! Error types for inventory file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / csv::Error / ValidationError                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds line numbers and categorization       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in cli)                                                     │
//! │       │                                                                 │
//! │       ├── on load: fatal, printed, exit code 1                         │
//! │       └── on save: printed, session keeps running                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Inventory file errors.
///
/// Everything except [`StoreError::Save`] is a load error and aborts startup.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The inventory file does not exist.
    #[error("inventory file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file has no header row at all.
    #[error("inventory file is empty (expected a header row)")]
    EmptyFile,

    /// The header row does not have the five expected columns.
    #[error("header has {found} columns, expected {expected}")]
    HeaderMismatch { found: usize, expected: usize },

    /// A data row is missing fields or has a field that does not parse.
    ///
    /// ## When This Occurs
    /// - Fewer or more than five fields
    /// - `quantity` / `units_per_box` / `critical_level` not a whole number
    /// - `price` not a non-negative decimal
    /// - empty `name`
    #[error("line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// The CSV reader failed (e.g., invalid UTF-8).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the file failed.
    #[error("failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Creates a MalformedRow error.
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        StoreError::MalformedRow {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
