//! # Stockroom Entry Point
//!
//! ```text
//! $ stockroom
//!  !!! LOW STOCK ALERTS !!!
//! - Cheese Slice: Only 1 boxes left (Critical: 1)
//!
//! ========== MENU ==========
//! 1. View Inventory
//! ...
//! ```
//!
//! Exit code 0 when the session ends (saved or not), 1 on a fatal error.

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for testability
    match stockroom_cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
