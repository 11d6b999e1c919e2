//! # Catalog CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/catalog/cli/)                               │
//! │  - clap argument parsing + logging setup (setup.rs)         │
//! │  - Context wiring and dispatch (commands.rs)                │
//! │  - Interactive menu loop (shell.rs)                         │
//! │  - Terminal output (print.rs)                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                 catalog::api::CatalogApi (library)
//! ```
//!
//! Errors that reach this file are fatal (I/O, bad config, or a rejected
//! one-shot `add`). They are printed to stderr and the process exits with 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
