use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "catalog", bin_name = "catalog", version = get_version())]
#[command(about = "Manage a product catalog stored in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog data file (overrides the config file)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// JSON config file with limits and the data file location
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product
    #[command(alias = "a")]
    Add {
        /// Product ID (positive integer)
        #[arg(allow_hyphen_values = true)]
        id: String,

        /// Product name
        name: String,

        /// Unit price
        #[arg(allow_hyphen_values = true)]
        price: String,

        /// Quantity in stock
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// List all products
    #[command(alias = "ls")]
    List,

    /// Start the interactive menu (default)
    Shell,
}

fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Log to stderr so stdout stays clean for command output.
/// `RUST_LOG` wins over `-v` when set.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose).to_string().to_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["catalog"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn add_takes_four_raw_fields() {
        let cli =
            Cli::try_parse_from(["catalog", "add", "1", "Widget", "9.99", "5"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                id,
                name,
                price,
                quantity,
            }) => {
                assert_eq!(id, "1");
                assert_eq!(name, "Widget");
                assert_eq!(price, "9.99");
                assert_eq!(quantity, "5");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn add_requires_every_field() {
        assert!(Cli::try_parse_from(["catalog", "add", "1", "Widget"]).is_err());
    }

    #[test]
    fn negative_values_reach_the_validator() {
        let cli = Cli::try_parse_from(["catalog", "add", "-5", "Widget", "-1", "-2"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Add { ref id, .. }) if id == "-5"));
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["catalog", "ls", "--file", "stock.json", "-vv"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
        assert_eq!(cli.file, Some(PathBuf::from("stock.json")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(9), Level::TRACE);
    }
}
