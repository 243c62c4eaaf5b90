//! Library crate backing the `chainwrap` binary.
//!
//! `chainwrap` builds a `php://filter` stream-filter chain URI that, fed to a
//! runtime supporting `convert.iconv.*`, `convert.base64-*`,
//! `convert.quoted-printable-encode` and `dechunk`, makes that runtime emit
//! `PREFIX || contents_of(F)[0..N] || SUFFIX` instead of the raw contents of
//! `F`.
//!
//! - [`pipeline`] holds the actual chain-synthesis algorithm: the
//!   character-injection catalogue, the base64/alignment primitives, and the
//!   prelude/suffix/prefix/postlude builders that assemble the final chain.
//! - [`commands`] is the CLI surface wired up with `clap`.
//! - [`error`] is the crate-wide error type.
pub mod commands;
pub mod error;
pub mod pipeline;

/// A thin abstraction implemented by CLI command structs to execute work.
///
/// Implementors perform whatever IO/processing the command represents inside
/// `handle`, consuming `self` so owned fields (paths, buffers) can move
/// without extra cloning.
pub trait CommandHandler {
    /// Execute the command, consuming the implementor.
    fn handle(self) -> crate::error::Result<()>;
}
