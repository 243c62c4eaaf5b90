//! Top-level CLI wiring.
//!
//! Mirrors the shape of a `clap`-derived `Cli`/`Operations` pair: `Cli` is
//! the entry point parsed from `std::env::args`, `Operations` is the
//! single-variant subcommand enum dispatching into [`super::generate`].

use crate::CommandHandler;
use clap::{Parser, Subcommand};

/// Top-level CLI structure parsed from program arguments.
#[derive(Parser)]
#[command(version, about = "Generate php://filter stream-filter chain payloads")]
pub struct Cli {
    /// The operation to execute.
    #[command(subcommand)]
    pub operation: Operations,
}

impl Cli {
    /// Dispatch and execute the selected subcommand.
    pub fn handle(self) -> crate::error::Result<()> {
        self.operation.handle()
    }
}

/// Supported top-level operations.
///
/// Kept as a subcommand (rather than flattening its args directly onto
/// `Cli`) so a future operation can be added without a breaking CLI change.
#[derive(Debug, Subcommand)]
pub enum Operations {
    /// Generate a filter chain payload for a target file.
    #[command(name = "generate")]
    Generate(super::generate::GenerateArgs),
}

impl CommandHandler for Operations {
    fn handle(self) -> crate::error::Result<()> {
        match self {
            Operations::Generate(args) => args.handle(),
        }
    }
}
