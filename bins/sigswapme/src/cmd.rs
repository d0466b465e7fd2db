//! Subcommands of `sigswapme`.

/// `parse` subcommand.
pub mod parse;
/// `recover` subcommand.
pub mod recover;
/// `search` subcommand.
pub mod search;
/// `sign` subcommand.
pub mod sign;
/// `substitute` subcommand.
pub mod substitute;

use clap::{Parser, Subcommand};
use serde::Serialize;
use sigswap::{
    primitives::SignatureError, LocalSignerError, RecoveryError, SubstitutionError, TxDecodeError,
};
use std::fmt::Display;

/// Decode, sign and substitute signatures of Ethereum transactions.
#[derive(Parser, Debug)]
#[command(name = "sigswapme", version, infer_subcommands = true)]
pub struct MainCmd {
    /// Log the recovered signers and encodings of every substitution.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of [`MainCmd`].
#[derive(Subcommand, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum Command {
    /// Decode a signed transaction and recover its signer.
    Parse(parse::Cmd),
    /// Recover the signer of a signed transaction.
    Recover(recover::Cmd),
    /// Replace the signature of a signed transaction.
    Substitute(substitute::Cmd),
    /// Replace the signature of a signed transaction with a random recoverable one.
    Search(search::Cmd),
    /// Build and sign a transaction with a private key.
    Sign(sign::Cmd),
}

/// Errors of the command line tool.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input is not a signed transaction.
    #[error(transparent)]
    Decode(#[from] TxDecodeError),
    /// Substitution failed.
    #[error(transparent)]
    Substitution(#[from] SubstitutionError),
    /// Signature does not recover a signer.
    #[error(transparent)]
    Recovery(#[from] RecoveryError),
    /// Supplied `v` has no known encoding or is for another chain.
    #[error(transparent)]
    Signature(#[from] SignatureError),
    /// Private key is invalid or signing failed.
    #[error(transparent)]
    Signer(#[from] LocalSignerError),
    /// Report could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Signature search gave up.
    #[error("no recoverable signature found in {0} attempts")]
    SearchExhausted(usize),
    /// Arguments are inconsistent.
    #[error("{0}")]
    InvalidArgument(&'static str),
}

impl MainCmd {
    /// Returns the default log level for the `-v` flag.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Runs the subcommand and prints its report.
    pub fn run(&self) -> Result<(), Error> {
        match &self.command {
            Command::Parse(cmd) => self.print(&cmd.run()?),
            Command::Recover(cmd) => self.print(&cmd.run()?),
            Command::Substitute(cmd) => self.print(&cmd.run()?),
            Command::Search(cmd) => self.print(&cmd.run()?),
            Command::Sign(cmd) => self.print(&cmd.run()?),
        }
    }

    fn print<T: Serialize + Display>(&self, report: &T) -> Result<(), Error> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(report)?);
        } else {
            println!("{report}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        MainCmd::command().debug_assert();
    }

    #[test]
    fn global_flags() {
        let cmd = MainCmd::try_parse_from(["sigswapme", "recover", "0xc0", "-v", "--json"]).unwrap();
        assert!(cmd.verbose);
        assert!(cmd.json);
        assert_eq!(cmd.log_level(), "debug");
        assert!(matches!(cmd.command, Command::Recover(_)));
    }

    #[test]
    fn inferred_subcommand() {
        let cmd = MainCmd::try_parse_from(["sigswapme", "subst", "0xc0", "--r", "1", "--s", "1"])
            .unwrap();
        assert!(matches!(cmd.command, Command::Substitute(_)));
        assert_eq!(cmd.log_level(), "info");
    }
}
