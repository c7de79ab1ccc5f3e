//! # Application Error Type
//!
//! Everything that can stop the program, wrapped in one enum.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ConfigError ──┐                                                        │
//! │  StoreError  ──┼──► AppError ──► main: "error: ..." on stderr, exit 1  │
//! │  InputError  ──┤                                                        │
//! │  io::Error   ──┘   (writing to the terminal)                           │
//! │                                                                         │
//! │  Not here: ParseSkip (handled inside each loop) and a failed save      │
//! │  (reported by the session, which keeps running).                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use thiserror::Error;

use stockroom_store::StoreError;

use crate::config::ConfigError;
use crate::input::InputError;

/// Fatal application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Input(#[from] InputError),

    /// Writing to the terminal failed.
    #[error("output failed: {0}")]
    Output(#[from] io::Error),
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
