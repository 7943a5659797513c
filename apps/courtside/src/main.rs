//! # Courtside Entry Point
//!
//! ```bash
//! courtside                          # seed catalog, table output
//! courtside --catalog gear.toml      # custom catalog
//! courtside --config shop.toml --json
//! ```

use clap::Parser;

use courtside_lib::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    courtside_lib::run(Cli::parse())
}
