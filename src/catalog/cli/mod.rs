//! # CLI Behavior
//!
//! This is **one possible UI client** for the catalog. It is the only place that
//! knows about terminal I/O, exit codes, and output formatting.
//!
//! ### Naked Execution (`catalog`)
//!
//! Running `catalog` with no subcommand starts the interactive shell, the same as
//! `catalog shell`.
//!
//! ### One-shot Commands
//!
//! - `catalog add <ID> <NAME> <PRICE> <QUANTITY>`: validate and add in one go.
//!   A rejected product is an error (exit code 1).
//! - `catalog list`: print every product.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `print`: Product lines, messages
//! - `setup`: Argument parsing via clap, logging
//! - `shell`: The interactive menu

mod commands;
mod print;
pub mod setup;
mod shell;

pub use commands::run;
