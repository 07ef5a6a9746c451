//! # CLI Error Type
//!
//! Failures that end the program. Core errors raised while placing an order
//! never reach this type: the menu reports them and keeps going.

use stockroom_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The startup inventory could not be built.
    #[error("Inventory error: {0}")]
    Core(#[from] CoreError),
}
