use super::Error;
use clap::Parser;
use serde::Serialize;
use sigswap::{
    parse,
    primitives::{Bytes, Signature, U256},
    substitute_and_recover, CommonTxFields, Substitution, Transaction,
};
use std::fmt;
use tracing::info;

/// `substitute` subcommand.
///
/// The new signature is given either as `--r`, `--s` and `--v`, or as a 65 byte
/// `r || s || v` with `--signature`.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex encoded signed transaction.
    pub signed: Bytes,
    /// `r` of the new signature, decimal or `0x` prefixed hex.
    #[arg(long, required_unless_present = "signature", requires = "s")]
    pub r: Option<U256>,
    /// `s` of the new signature, decimal or `0x` prefixed hex.
    #[arg(long, required_unless_present = "signature", requires = "r")]
    pub s: Option<U256>,
    /// `v` of the new signature: `0`/`1`, `27`/`28` or an EIP-155 value.
    ///
    /// An EIP-155 value must encode the chain id of the transaction.
    #[arg(long, default_value_t = 27)]
    pub v: u128,
    /// New signature as 65 hex encoded bytes, `r || s || v`.
    #[arg(long, conflicts_with_all = ["r", "s"])]
    pub signature: Option<Bytes>,
}

impl Cmd {
    /// Returns the signature to substitute into `tx`.
    pub fn signature(&self, tx: &Transaction) -> Result<Signature, Error> {
        let (r, s, v) = match (&self.signature, self.r, self.s) {
            (Some(raw), _, _) => {
                if raw.len() != 65 {
                    return Err(Error::InvalidArgument("signature must be 65 bytes"));
                }
                (
                    U256::from_be_slice(&raw[..32]),
                    U256::from_be_slice(&raw[32..64]),
                    raw[64] as u128,
                )
            }
            (None, Some(r), Some(s)) => (r, s, self.v),
            _ => return Err(Error::InvalidArgument("missing r or s")),
        };
        Ok(Signature::from_rsv_for_chain(r, s, v, tx.chain_id())?)
    }

    /// Runs the `substitute` command.
    pub fn run(&self) -> Result<SubstitutionReport, Error> {
        let (tx, _) = parse(&self.signed)?;
        let substitution = substitute_and_recover(&self.signed, &self.signature(&tx)?)?;
        info!(sender = %substitution.substituted_signer, "substituted signature");
        Ok(SubstitutionReport(substitution))
    }
}

/// Printable [`Substitution`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubstitutionReport(pub Substitution);

impl fmt::Display for SubstitutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let substitution = &self.0;
        writeln!(f, "transaction:        {}", substitution.bytes)?;
        writeln!(f, "tx hash:            {}", substitution.tx_hash)?;
        match substitution.original_signer {
            Some(signer) => writeln!(f, "original signer:    {signer}")?,
            None => writeln!(f, "original signer:    not recoverable")?,
        }
        write!(f, "substituted signer: {}", substitution.substituted_signer)?;
        if let Some(contract) = substitution.contract_address {
            write!(f, "\ncontract address:   {contract}")?;
        }
        Ok(())
    }
}
