//! # Stockroom CLI Library
//!
//! The interactive inventory tracker for a single restaurant stockroom.
//!
//! ## Module Organization
//! ```text
//! stockroom_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── STOCKROOM_* environment variables
//! ├── input.rs        ◄─── rustyline / piped line sources
//! ├── menu.rs         ◄─── Session state machine and the five actions
//! ├── render.rs       ◄─── Tables, alerts, receipts
//! └── error.rs        ◄─── AppError
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod menu;
pub mod render;

use std::io::{self, IsTerminal};

use tracing::info;
use tracing_subscriber::EnvFilter;

use stockroom_store::InventoryFile;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use menu::{Session, SessionEnd};

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging      tracing-subscriber → stderr, RUST_LOG      │
/// │  2. Load Configuration      STOCKROOM_* (fatal if invalid)             │
/// │  3. Load Inventory          inventory.csv (fatal if missing/malformed) │
/// │  4. Pick Input              terminal → rustyline, otherwise stdin      │
/// │  5. Run Session             until "Save and Exit", EOF or Ctrl-C       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<SessionEnd> {
    init_tracing();

    let config = AppConfig::from_env()?;
    info!(
        inventory = %config.inventory_path.display(),
        gst_bps = config.tax_rate.bps(),
        "Configuration loaded"
    );

    let mut file = InventoryFile::new(&config.inventory_path);
    let inventory = file.load()?;

    let end = if io::stdin().is_terminal() {
        let input = input::TerminalInput::new()?;
        Session::new(&config, file, inventory, input, io::stdout()).run()?
    } else {
        let input = input::ReaderInput::new(io::stdin().lock(), io::stdout());
        Session::new(&config, file, inventory, input, io::stdout()).run()?
    };

    info!(?end, "Session finished");
    Ok(end)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: WARN, so the menu stays readable
/// - `RUST_LOG=info` - Load/save summaries and per-action counts
/// - `RUST_LOG=stockroom_store=debug` - Row-level detail for one crate
///
/// Logs go to stderr; stdout carries only the menu.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
