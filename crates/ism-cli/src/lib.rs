//! # ism-cli — ISM Marking Command-Line Interface
//!
//! ## Subcommands
//!
//! - `tokens`: print a controlled vocabulary
//! - `check`: validate a YAML marking document
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live here so tests can
//!   drive them with an in-memory writer.
//! - Handlers return an exit code. Operational failures propagate as
//!   `anyhow::Error` and map to exit code 2.

pub mod check;
pub mod tokens;
