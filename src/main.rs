//! `chainwrap` binary entrypoint.
//!
//! Parses CLI arguments and dispatches to the `generate` command handler in
//! the `chainwrap` library crate. The binary itself stays a thin wrapper:
//! argument parsing, logging setup and dispatch happen here, while the
//! actual chain-synthesis work lives in `chainwrap::pipeline`.
//!
//! Example
//!
//! $ chainwrap generate /etc/passwd '{"message":"' '"}' 200
//! [INFO  chainwrap] Dumping 207 bytes from /etc/passwd.
//! [INFO  chainwrap] Wrote filter chain to chain.txt (size=152464).

use clap::Parser;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    if let Err(err) = chainwrap::commands::base::Cli::parse().handle() {
        eprintln!("chainwrap: {err}");
        std::process::exit(1);
    }
}
