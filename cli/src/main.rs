//! # council CLI
//!
//! Command-line interface for LLM Council.
//!
//! ## Usage
//!
//! - `council` - Load `./.env` and print the council configuration
//! - `council --env-file path/to/.env` - Use a different definitions file
//! - `council --format json` - Print the configuration as JSON
//! - `council --strict` - Fail if the chairman is not a council member

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod output;

use config::CliConfigLoader;
use output::OutputFormat;

/// council - Inspect the LLM Council configuration
#[derive(Parser)]
#[command(name = "council")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve and print the LLM Council configuration")]
#[command(long_about = None)]
struct Cli {
    /// Environment definitions file merged into the process environment
    #[arg(long, env = "COUNCIL_ENV_FILE")]
    env_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Fail if the chairman model is not a council member
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Working directory
    #[arg(long)]
    working_dir: Option<PathBuf>,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new().with_strict(cli.strict);

    if let Some(env_file) = &cli.env_file {
        loader = loader.with_env_file_override(env_file.clone());
    }

    loader
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if !cli.verbose && std::env::var_os("RUST_LOG").is_some() {
        council_core::init_tracing();
    } else {
        council_core::init_tracing_with_debug(cli.verbose);
    }

    // Change working directory if specified
    if let Some(working_dir) = &cli.working_dir {
        std::env::set_current_dir(working_dir)?;
    }

    let loaded = build_config_loader(&cli).load()?;
    println!("{}", output::render(&loaded, cli.format)?);

    Ok(())
}
