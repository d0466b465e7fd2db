//! Access list transaction of [EIP-2930].
//!
//! [EIP-2930]: https://eips.ethereum.org/EIPS/eip-2930

use crate::{
    common::{
        decode_fields, decode_typed_signature, encode_enveloped, encode_typed_signature,
        typed_signature_length,
    },
    AccessList, CommonTxFields, TxDecodeError,
};
use primitives::{Bytes, Signature, TransactionType, TxKind, U256};
use rlp::{Decodable, Encodable};
use std::vec::Vec;

/// Access list transaction, envelope type `0x01`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TxEip2930 {
    /// Chain id the transaction is bound to.
    pub chain_id: u64,
    /// Nonce of the sender account.
    pub nonce: u64,
    /// Gas price in wei.
    pub gas_price: u128,
    /// Maximum amount of gas the transaction may use.
    pub gas_limit: u64,
    /// Call target, or [`TxKind::Create`] for contract creation.
    pub to: TxKind,
    /// Amount of wei transferred.
    pub value: U256,
    /// Call data, or init code of a contract creation.
    pub input: Bytes,
    /// Accounts and storage slots the transaction plans to access.
    pub access_list: AccessList,
}

impl TxEip2930 {
    /// Transaction type.
    pub const TX_TYPE: TransactionType = TransactionType::Eip2930;

    fn fields_length(&self) -> usize {
        self.chain_id.length()
            + self.nonce.length()
            + self.gas_price.length()
            + self.gas_limit.length()
            + self.to.length()
            + self.value.length()
            + self.input.length()
            + self.access_list.length()
    }

    fn encode_fields(&self, out: &mut Vec<u8>) {
        self.chain_id.encode(out);
        self.nonce.encode(out);
        self.gas_price.encode(out);
        self.gas_limit.encode(out);
        self.to.encode(out);
        self.value.encode(out);
        self.input.encode(out);
        self.access_list.encode(out);
    }

    /// Returns `0x01 || rlp([chainId, nonce, gasPrice, gasLimit, to, value, data, accessList])`.
    pub fn signing_payload(&self) -> Bytes {
        let payload_length = self.fields_length();
        let mut out = Vec::with_capacity(1 + rlp::list_length(payload_length));
        encode_enveloped(Self::TX_TYPE, payload_length, &mut out, |out| {
            self.encode_fields(out)
        });
        out.into()
    }

    /// Appends the type byte and the 11 signed fields to `out`.
    pub fn encode_signed(&self, sig: &Signature, out: &mut Vec<u8>) {
        let payload_length = self.fields_length() + typed_signature_length(sig);
        encode_enveloped(Self::TX_TYPE, payload_length, out, |out| {
            self.encode_fields(out);
            encode_typed_signature(sig, out);
        });
    }

    /// Decodes the 11 field list following the type byte.
    pub fn decode_signed_fields(buf: &mut &[u8]) -> Result<(Self, Signature), TxDecodeError> {
        let mut payload = decode_fields(buf, Self::TX_TYPE)?;
        let buf = &mut payload;

        let tx = Self {
            chain_id: Decodable::decode(buf)?,
            nonce: Decodable::decode(buf)?,
            gas_price: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            to: Decodable::decode(buf)?,
            value: Decodable::decode(buf)?,
            input: Decodable::decode(buf)?,
            access_list: Decodable::decode(buf)?,
        };
        let sig = decode_typed_signature(buf)?;
        Ok((tx, sig))
    }
}

impl CommonTxFields for TxEip2930 {
    fn tx_type(&self) -> TransactionType {
        Self::TX_TYPE
    }

    fn chain_id(&self) -> Option<u64> {
        Some(self.chain_id)
    }

    fn nonce(&self) -> u64 {
        self.nonce
    }

    fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    fn kind(&self) -> TxKind {
        self.to
    }

    fn value(&self) -> U256 {
        self.value
    }

    fn input(&self) -> &Bytes {
        &self.input
    }
}
