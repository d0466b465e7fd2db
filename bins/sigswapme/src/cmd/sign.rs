use super::Error;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use sigswap::{
    primitives::{Address, Bytes, Signature, TxKind, B256, U256},
    transaction::AccessList,
    LocalSigner, Transaction, TxEip1559, TxEip2930, TxLegacy,
};
use std::fmt;
use tracing::info;

/// Transaction type built by the `sign` command.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TxType {
    /// Legacy transaction, EIP-155 protected when a chain id is set.
    #[default]
    Legacy,
    /// EIP-2930 access list transaction.
    Eip2930,
    /// EIP-1559 dynamic fee transaction.
    Eip1559,
}

/// `sign` subcommand.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex encoded 32 byte private key.
    #[arg(long, env = "SIGSWAP_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: B256,
    /// Chain id. Legacy transactions without it are not replay protected.
    #[arg(long, env = "SIGSWAP_CHAIN_ID")]
    pub chain_id: Option<u64>,
    /// Transaction type.
    #[arg(long, value_enum, default_value_t = TxType::Legacy)]
    pub tx_type: TxType,
    /// Nonce of the sender account.
    #[arg(long, default_value_t = 0)]
    pub nonce: u64,
    /// Gas price in wei, legacy and EIP-2930 transactions.
    #[arg(long, default_value_t = 0)]
    pub gas_price: u128,
    /// Maximum priority fee per gas in wei, EIP-1559 transactions.
    #[arg(long, default_value_t = 0)]
    pub max_priority_fee_per_gas: u128,
    /// Maximum fee per gas in wei, EIP-1559 transactions.
    #[arg(long, default_value_t = 0)]
    pub max_fee_per_gas: u128,
    /// Gas limit.
    #[arg(long, default_value_t = 21_000)]
    pub gas_limit: u64,
    /// Call target. Omitted for contract creation.
    #[arg(long)]
    pub to: Option<Address>,
    /// Amount of wei to transfer.
    #[arg(long, default_value_t = U256::ZERO)]
    pub value: U256,
    /// Hex encoded call data or init code.
    #[arg(long, default_value_t = Bytes::new())]
    pub data: Bytes,
}

/// Signed transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransaction {
    /// Address of the signing key.
    pub signer: Address,
    /// Signature over the signature hash.
    pub signature: Signature,
    /// Signed encoding.
    pub bytes: Bytes,
    /// Hash of the signed encoding.
    pub tx_hash: B256,
}

impl fmt::Display for SignedTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "transaction: {}", self.bytes)?;
        writeln!(f, "tx hash:     {}", self.tx_hash)?;
        write!(f, "signer:      {}", self.signer)
    }
}

impl Cmd {
    /// Builds the unsigned transaction from the arguments.
    pub fn transaction(&self) -> Result<Transaction, Error> {
        let to = self.to.map_or(TxKind::Create, TxKind::Call);
        let tx = match self.tx_type {
            TxType::Legacy => TxLegacy {
                chain_id: self.chain_id,
                nonce: self.nonce,
                gas_price: self.gas_price,
                gas_limit: self.gas_limit,
                to,
                value: self.value,
                input: self.data.clone(),
            }
            .into(),
            TxType::Eip2930 => TxEip2930 {
                chain_id: self.required_chain_id()?,
                nonce: self.nonce,
                gas_price: self.gas_price,
                gas_limit: self.gas_limit,
                to,
                value: self.value,
                input: self.data.clone(),
                access_list: AccessList::default(),
            }
            .into(),
            TxType::Eip1559 => TxEip1559 {
                chain_id: self.required_chain_id()?,
                nonce: self.nonce,
                max_priority_fee_per_gas: self.max_priority_fee_per_gas,
                max_fee_per_gas: self.max_fee_per_gas,
                gas_limit: self.gas_limit,
                to,
                value: self.value,
                input: self.data.clone(),
                access_list: AccessList::default(),
            }
            .into(),
        };
        Ok(tx)
    }

    fn required_chain_id(&self) -> Result<u64, Error> {
        self.chain_id
            .ok_or(Error::InvalidArgument("typed transactions require a chain id"))
    }

    /// Runs the `sign` command.
    pub fn run(&self) -> Result<SignedTransaction, Error> {
        let signer = LocalSigner::from_bytes(&self.private_key)?;
        let tx = self.transaction()?;
        let (signature, bytes) = tx.sign_with(&signer)?;
        info!(signer = %signer.address(), "signed transaction");
        Ok(SignedTransaction {
            signer: signer.address(),
            signature,
            tx_hash: sigswap::primitives::keccak256(&bytes),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigswap::{parse, primitives::address, recover_signer};

    const KEY: &str = "0x4646464646464646464646464646464646464646464646464646464646464646";

    fn cmd(args: &[&str]) -> Cmd {
        Cmd::try_parse_from(["sign", "--private-key", KEY].into_iter().chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn signs_deployment() {
        let signed = cmd(&[
            "--chain-id",
            "31337",
            "--gas-price",
            "900000000",
            "--gas-limit",
            "1000000",
            "--data",
            "0x6080",
        ])
        .run()
        .unwrap();
        assert_eq!(
            signed.signer,
            address!("9d8a62f656a8d1615c1294fd71e9cfb3e4855a4f")
        );

        let (tx, sig) = parse(&signed.bytes).unwrap();
        assert_eq!(sig, signed.signature);
        assert!(matches!(&tx, Transaction::Legacy(tx) if tx.to == TxKind::Create));
        assert_eq!(recover_signer(&tx, &sig), Ok(signed.signer));
    }

    #[test]
    fn signs_typed() {
        let signed = cmd(&[
            "--tx-type",
            "eip1559",
            "--chain-id",
            "1",
            "--max-fee-per-gas",
            "100",
            "--to",
            "0x3535353535353535353535353535353535353535",
        ])
        .run()
        .unwrap();
        assert_eq!(signed.bytes[0], 0x02);
        let (tx, _) = parse(&signed.bytes).unwrap();
        assert!(matches!(tx, Transaction::Eip1559(tx) if tx.max_fee_per_gas == 100));
    }

    #[test]
    fn typed_requires_chain_id() {
        let mut cmd = cmd(&["--tx-type", "eip2930"]);
        // `SIGSWAP_CHAIN_ID` may be set in the environment
        cmd.chain_id = None;
        assert!(matches!(cmd.run(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn invalid_key() {
        let cmd = Cmd::try_parse_from(["sign", "--private-key", &format!("{:#066x}", 0)]).unwrap();
        assert!(matches!(cmd.run(), Err(Error::Signer(_))));
    }
}
