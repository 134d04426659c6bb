//! # ism CLI entry point
//!
//! Parses command-line arguments, loads configuration, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ism_cli::check::{run_check, CheckArgs};
use ism_cli::tokens::{run_tokens, TokensArgs};
use ism_core::IsmConfig;
use ism_marking::ValidationSession;

/// ISM security marking toolkit.
///
/// Lists controlled vocabularies and validates ISM attribute groups for
/// DDMS 2.0 through 5.0.
#[derive(Parser, Debug)]
#[command(name = "ism", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of one controlled vocabulary.
    Tokens(TokensArgs),

    /// Validate a YAML marking document.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = match IsmConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };

    tracing::debug!(cve_root = %config.cve_root.display(), "loaded configuration");

    let mut session = ValidationSession::from_config(&config);
    let mut stdout = std::io::stdout().lock();

    let result = match cli.command {
        Commands::Tokens(args) => run_tokens(&args, &session, &mut stdout),
        Commands::Check(args) => run_check(&args, &mut session, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
