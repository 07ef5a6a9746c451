//! # Stockroom CLI
//!
//! Thin orchestration layer around `stockroom-core`.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          run()                                          │
//! │                                                                         │
//! │  1. Load Configuration ─── STOCKROOM_* env vars, defaults               │
//! │  2. Initialize Tracing ─── RUST_LOG or STOCKROOM_LOG, written to stderr │
//! │  3. Build Store ────────── demo inventory or empty                      │
//! │  4. Run Menu ───────────── stdin/stdout until "4" or end of input       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod seed;

use std::io;

use stockroom_core::Store;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::menu::Menu;

/// Runs the interactive store menu on the process's stdin/stdout.
pub fn run() -> Result<(), CliError> {
    let config = CliConfig::from_env()?;
    init_tracing(&config);

    info!(store_name = %config.store_name, demo_inventory = config.demo_inventory, "Starting Stockroom");

    let mut store = if config.demo_inventory {
        seed::demo_inventory()?
    } else {
        Store::default()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut store, config.store_name, stdin.lock(), stdout.lock()).run()?;

    info!("Stockroom stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (menu choices, order lines)
/// - `RUST_LOG=stockroom_cli=info` - Startup and placed orders only
/// - Default: `STOCKROOM_LOG`, else `warn` (rejected orders)
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
