//! Context setup and per-command handlers.
//!
//! - `run()`: parse arguments, set up logging, dispatch
//! - `init_context()`: config file, `--file` override, then the API
//! - `handle_*()`: call the API and print the result

use super::print::{print_messages, print_products};
use super::setup::{init_logging, Cli, Commands};
use super::shell::Shell;
use catalog::api::CatalogApi;
use catalog::config::CatalogConfig;
use catalog::error::Result;
use catalog::store::fs::FileStorage;
use clap::Parser;
use std::io;

struct AppContext {
    api: CatalogApi<FileStorage>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            id,
            name,
            price,
            quantity,
        }) => handle_add(&mut ctx, &id, &name, &price, &quantity),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Shell) | None => handle_shell(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let mut config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    if let Some(file) = &cli.file {
        config = config.with_data_file(file);
    }
    tracing::debug!(data_file = %config.data_file.display(), "opening catalog");

    Ok(AppContext {
        api: CatalogApi::from_config(&config)?,
    })
}

fn handle_add(
    ctx: &mut AppContext,
    id: &str,
    name: &str,
    price: &str,
    quantity: &str,
) -> Result<()> {
    let result = ctx.api.add_product(id, name, price, quantity)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_products()?;
    print_products(&result.listed_products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut ctx.api, stdin.lock(), stdout.lock()).run()
}
