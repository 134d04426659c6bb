//! # Tokens Subcommand
//!
//! Prints the controlled vocabulary for one key under one DDMS version,
//! one token per line in sorted order. With `--patterns`, regular
//! expression terms follow, prefixed with `~`.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use ism_core::{DdmsVersion, VocabularyKey};
use ism_marking::ValidationSession;

/// Arguments for the `ism tokens` subcommand.
#[derive(Args, Debug)]
pub struct TokensArgs {
    /// DDMS version (2.0, 3.0, 3.1, 4.0.1, 4.1 or 5.0). Defaults to the
    /// latest.
    #[arg(long = "ddms-version", value_name = "VERSION", default_value_t = DdmsVersion::latest())]
    pub version: DdmsVersion,

    /// Vocabulary key, e.g. `classification` or `SCIcontrols`.
    #[arg(long)]
    pub key: VocabularyKey,

    /// Also print pattern terms.
    #[arg(long)]
    pub patterns: bool,
}

/// Execute the tokens subcommand.
///
/// Returns exit code 0. A vocabulary that cannot be found is an
/// operational error.
pub fn run_tokens(args: &TokensArgs, session: &ValidationSession, out: &mut dyn Write) -> Result<u8> {
    let enumerations = session.enumerations();
    let tokens = enumerations
        .enumeration_tokens(args.version, args.key)
        .with_context(|| format!("cannot list {} for DDMS {}", args.key, args.version))?;

    tracing::info!(
        version = %args.version,
        key = %args.key,
        count = tokens.len(),
        "listing vocabulary"
    );

    for token in tokens.iter() {
        writeln!(out, "{token}")?;
    }

    if args.patterns {
        for pattern in enumerations.enumeration_patterns(args.version, args.key)? {
            writeln!(out, "~{pattern}")?;
        }
    }

    Ok(0)
}
