use super::Error;
use clap::Parser;
use serde::Serialize;
use sigswap::{
    parse,
    primitives::{Address, Bytes, B512},
    recovery::recover_public_key,
};
use std::fmt;

/// `recover` subcommand.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex encoded signed transaction.
    pub signed: Bytes,
}

/// Signer of a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveredSigner {
    /// Address of the signer.
    pub address: Address,
    /// Uncompressed public key, `x || y`.
    pub public_key: B512,
}

impl fmt::Display for RecoveredSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "address:    {}", self.address)?;
        write!(f, "public key: {}", self.public_key)
    }
}

impl Cmd {
    /// Runs the `recover` command.
    pub fn run(&self) -> Result<RecoveredSigner, Error> {
        let (tx, sig) = parse(&self.signed)?;
        let public_key = recover_public_key(&tx.signature_hash(), &sig)?;
        Ok(RecoveredSigner {
            address: public_key.address(),
            public_key: *public_key.as_b512(),
        })
    }
}
