//! The `generate` subcommand: reads CLI arguments, resolves PREFIX/SUFFIX
//! (inline or from file), runs the chain-synthesis algorithm, and writes the
//! resulting URI to the output file.

use std::path::PathBuf;

use clap::Args;

use crate::error::{ChainError, Result};
use crate::pipeline::build::{build_pipeline, render_uri, ChainInputs};
use crate::CommandHandler;

/// Parse a `--padding-character` value, requiring exactly one byte.
fn parse_padding_byte(raw: &str) -> std::result::Result<u8, String> {
    let bytes = raw.as_bytes();
    match bytes {
        [single] => Ok(*single),
        _ => Err(format!(
            "padding_character must be exactly one byte, got {} bytes ({raw:?})",
            bytes.len()
        )),
    }
}

/// Arguments for generating a single filter chain payload.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the target file, inserted verbatim into the resource= URI.
    pub path: PathBuf,

    /// Bytes to write before the contents of the file (or a file to load
    /// them from, with `--from-file`).
    pub prefix: String,

    /// Bytes to write after the contents of the file (or a file to load
    /// them from, with `--from-file`). Empty selects simple mode.
    pub suffix: String,

    /// Number of bytes to dump from the file. Rounded up to a multiple of 9.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub nb_bytes: u64,

    /// File to write the payload to.
    #[arg(short = 'o', long = "output", default_value = "chain.txt")]
    pub output: PathBuf,

    /// Single-byte character used to pad the prefix (and, internally, the
    /// suffix) to base64/alignment boundaries.
    #[arg(
        long = "padding-character",
        default_value = "M",
        value_parser = parse_padding_byte
    )]
    pub padding_character: u8,

    /// If set, `prefix` and `suffix` name files to load their value from
    /// instead of being literal values.
    #[arg(long = "from-file")]
    pub from_file: bool,
}

impl GenerateArgs {
    fn resolve_bytes(&self, value: &str, role: &str) -> Result<Vec<u8>> {
        if self.from_file {
            std::fs::read(value).map_err(|err| ChainError::io(format!("reading {role} file {value}"), err))
        } else {
            Ok(value.as_bytes().to_vec())
        }
    }
}

impl CommandHandler for GenerateArgs {
    fn handle(self) -> Result<()> {
        let prefix = self.resolve_bytes(&self.prefix, "prefix")?;
        let suffix = self.resolve_bytes(&self.suffix, "suffix")?;

        let inputs = ChainInputs {
            path: self.path.clone(),
            prefix,
            suffix,
            nb_bytes: self.nb_bytes,
            padding_byte: self.padding_character,
        };

        let built = build_pipeline(&inputs)?;
        let payload = render_uri(&built.pipeline, &inputs.path);

        std::fs::write(&self.output, payload.as_bytes()).map_err(|err| {
            ChainError::io(format!("writing output file {}", self.output.display()), err)
        })?;

        log::info!(
            "Wrote filter chain to {} (size={}).",
            self.output.display(),
            payload.len()
        );

        Ok(())
    }
}
