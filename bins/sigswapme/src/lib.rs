//! `sigswapme`: decode, sign and substitute signatures of Ethereum transactions from
//! the command line.
/// Command line interface.
pub mod cmd;

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
