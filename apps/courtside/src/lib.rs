//! # Courtside Library
//!
//! The terminal storefront: configuration, shared store state, commands and
//! the interactive session. `main.rs` only parses arguments and calls [`run`].
//!
//! ## Module Organization
//! ```text
//! courtside_lib/
//! ├── lib.rs          ◄─── You are here (CLI, tracing, run)
//! ├── catalog.rs      ◄─── Seed catalog and TOML catalog loader
//! ├── session.rs      ◄─── Command parsing, replies, the read/eval loop
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Lock-protected StoreManager
//! │   └── config.rs   ◄─── Configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── inventory.rs◄─── Stock listing
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   └── checkout.rs ◄─── Checkout and quit
//! └── error.rs        ◄─── ConfigError and ApiError
//! ```

pub mod catalog;
pub mod commands;
pub mod error;
pub mod session;
pub mod state;

use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use session::Session;
use state::{AppConfig, OutputFormat, StoreState};

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(
    name = "courtside",
    version = env!("CARGO_PKG_VERSION"),
    about = "Terminal storefront for tennis gear"
)]
pub struct Cli {
    /// TOML configuration file.
    #[clap(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// TOML catalog file; overrides `catalog_path` from the configuration.
    #[clap(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Print command responses as JSON lines instead of tables.
    #[clap(long)]
    pub json: bool,
}

impl Cli {
    /// Layers the command line flags over a loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(catalog) = &self.catalog {
            config.catalog_path = Some(catalog.clone());
        }
        if self.json {
            config.output = OutputFormat::Json;
        }
    }
}

/// Runs the storefront on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging (stderr, RUST_LOG overrides the default)         │
/// │  2. Load Configuration: defaults → --config file → COURTSIDE_* → flags  │
/// │  3. Build the Store from --catalog / catalog_path / seed catalog        │
/// │  4. Open a Session and run it until quit or EOF                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // An explicit config file must load; otherwise bad environment values
    // fall back to the defaults.
    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load(Some(path))?,
        None => AppConfig::load_or_default(None),
    };
    cli.apply(&mut config);
    info!(store = %config.store_name, output = %config.output, "Starting Courtside");

    let store = StoreState::new(catalog::build_store(&config)?);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = Session::open(&store, &config).run(stdin.lock(), stdout.lock())?;

    info!(
        checkouts = summary.checkouts,
        revenue = %summary.revenue,
        "Courtside closed"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with session output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - Default: warnings, plus INFO for this crate
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,courtside_lib=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_config() {
        let cli = Cli::parse_from(["courtside", "--catalog", "gear.toml", "--json"]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.catalog_path, Some(PathBuf::from("gear.toml")));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_cli_defaults_keep_config() {
        let cli = Cli::parse_from(["courtside"]);
        assert!(cli.config.is_none());

        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config, AppConfig::default());
    }
}
