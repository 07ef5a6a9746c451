//! # Stockroom Entry Point
//!
//! The actual setup is in lib.rs for better testability.

fn main() -> Result<(), stockroom_cli::error::CliError> {
    stockroom_cli::run()
}
