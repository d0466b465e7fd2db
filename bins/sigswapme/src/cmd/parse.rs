use super::Error;
use clap::Parser;
use serde::Serialize;
use sigswap::{
    parse,
    primitives::{Address, Bytes, Signature, TxKind, B256},
    recover_signer, CommonTxFields, Transaction,
};
use std::fmt;

/// `parse` subcommand.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex encoded signed transaction.
    pub signed: Bytes,
}

/// Decoded transaction with its signature and signer.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTransaction {
    /// Decoded transaction.
    pub transaction: Transaction,
    /// Attached signature.
    pub signature: Signature,
    /// Wire value of `v`.
    pub v: u128,
    /// Digest the signature is over.
    pub signature_hash: B256,
    /// Hash of the signed encoding.
    pub tx_hash: B256,
    /// Recovered signer, `None` if the signature does not recover.
    pub signer: Option<Address>,
}

impl ParsedTransaction {
    /// Decodes `signed` and recovers its signer.
    pub fn decode(signed: &[u8]) -> Result<Self, Error> {
        let (transaction, signature) = parse(signed)?;
        let v = match transaction {
            Transaction::Legacy(ref tx) => signature.v(tx.chain_id),
            _ => signature.y_parity as u128,
        };
        Ok(Self {
            v,
            signature_hash: transaction.signature_hash(),
            tx_hash: sigswap::primitives::keccak256(signed),
            signer: recover_signer(&transaction, &signature).ok(),
            transaction,
            signature,
        })
    }
}

impl fmt::Display for ParsedTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tx = &self.transaction;
        writeln!(f, "type:           {:?}", tx.tx_type())?;
        match tx.chain_id() {
            Some(chain_id) => writeln!(f, "chain id:       {chain_id}")?,
            None => writeln!(f, "chain id:       none")?,
        }
        writeln!(f, "nonce:          {}", tx.nonce())?;
        match tx {
            Transaction::Legacy(tx) => writeln!(f, "gas price:      {}", tx.gas_price)?,
            Transaction::Eip2930(tx) => writeln!(f, "gas price:      {}", tx.gas_price)?,
            Transaction::Eip1559(tx) => {
                writeln!(f, "priority fee:   {}", tx.max_priority_fee_per_gas)?;
                writeln!(f, "max fee:        {}", tx.max_fee_per_gas)?;
            }
        }
        writeln!(f, "gas limit:      {}", tx.gas_limit())?;
        match tx.kind() {
            TxKind::Create => writeln!(f, "to:             create")?,
            TxKind::Call(to) => writeln!(f, "to:             {to}")?,
        }
        writeln!(f, "value:          {}", tx.value())?;
        writeln!(f, "input:          {}", tx.input())?;
        let access_list = match tx {
            Transaction::Legacy(_) => None,
            Transaction::Eip2930(tx) => Some(&tx.access_list),
            Transaction::Eip1559(tx) => Some(&tx.access_list),
        };
        if let Some(access_list) = access_list {
            if access_list.is_empty() {
                writeln!(f, "access list:    empty")?;
            }
            for (address, slots) in access_list.iter() {
                writeln!(f, "access list:    {address} ({} slots)", slots.count())?;
            }
        }
        writeln!(f, "r:              {:#x}", self.signature.r)?;
        writeln!(f, "s:              {:#x}", self.signature.s)?;
        writeln!(f, "v:              {}", self.v)?;
        writeln!(f, "signature hash: {}", self.signature_hash)?;
        writeln!(f, "tx hash:        {}", self.tx_hash)?;
        match self.signer {
            Some(signer) => write!(f, "signer:         {signer}"),
            None => write!(f, "signer:         not recoverable"),
        }
    }
}

impl Cmd {
    /// Runs the `parse` command.
    pub fn run(&self) -> Result<ParsedTransaction, Error> {
        ParsedTransaction::decode(&self.signed)
    }
}
