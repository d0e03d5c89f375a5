//! # Pokepager CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! - `cli::setup`: clap definitions, logging init, and the startup binding step
//!   that loads config and the name index and builds the pager
//! - `cli::browse`: the interactive start/next/prev loop
//! - `cli::render`: card grid and status rendering through minijinja templates
//!
//! Everything below `cli/` is UI agnostic and lives in the library crate.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
