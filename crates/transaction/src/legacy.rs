//! Legacy transaction, optionally replay protected by [EIP-155].
//!
//! [EIP-155]: https://eips.ethereum.org/EIPS/eip-155

use crate::{
    common::{decode_fields, encode_enveloped},
    CommonTxFields, TxDecodeError,
};
use primitives::{
    Bytes, Signature, SignatureError, TransactionType, TxKind, LEGACY_V_OFFSET, U256,
};
use rlp::{Decodable, Encodable};
use std::vec::Vec;

/// Legacy transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TxLegacy {
    /// Chain id, `None` for transactions signed before EIP-155.
    pub chain_id: Option<u64>,
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
}

impl TxLegacy {
    /// Transaction type.
    pub const TX_TYPE: TransactionType = TransactionType::Legacy;

    fn fields_length(&self) -> usize {
        self.nonce.length()
            + self.gas_price.length()
            + self.gas_limit.length()
            + self.to.length()
            + self.value.length()
            + self.input.length()
    }

    fn encode_fields(&self, out: &mut Vec<u8>) {
        self.nonce.encode(out);
        self.gas_price.encode(out);
        self.gas_limit.encode(out);
        self.to.encode(out);
        self.value.encode(out);
        self.input.encode(out);
    }

    /// Length of the `(chainId, 0, 0)` trailer of the EIP-155 signing payload.
    fn eip155_fields_length(&self) -> usize {
        self.chain_id.map_or(0, |chain_id| chain_id.length() + 2)
    }

    /// Returns the bytes signed by the sender.
    ///
    /// `rlp([nonce, gasPrice, gasLimit, to, value, data])` without a chain id, with
    /// `chainId, 0, 0` appended to the list otherwise.
    pub fn signing_payload(&self) -> Bytes {
        let payload_length = self.fields_length() + self.eip155_fields_length();
        let mut out = Vec::with_capacity(rlp::list_length(payload_length));
        encode_enveloped(Self::TX_TYPE, payload_length, &mut out, |out| {
            self.encode_fields(out);
            if let Some(chain_id) = self.chain_id {
                chain_id.encode(out);
                0u8.encode(out);
                0u8.encode(out);
            }
        });
        out.into()
    }

    /// Appends `rlp([nonce, gasPrice, gasLimit, to, value, data, v, r, s])` to `out`.
    ///
    /// `v` is `27 + parity`, or `35 + 2 * chainId + parity` with a chain id.
    pub fn encode_signed(&self, sig: &Signature, out: &mut Vec<u8>) {
        let v = sig.v(self.chain_id);
        let payload_length = self.fields_length() + v.length() + sig.r.length() + sig.s.length();
        encode_enveloped(Self::TX_TYPE, payload_length, out, |out| {
            self.encode_fields(out);
            v.encode(out);
            sig.r.encode(out);
            sig.s.encode(out);
        });
    }

    /// Decodes the 9 field list of a signed legacy transaction.
    ///
    /// The chain id is taken from `v`. `v` values `0` and `1` belong to typed
    /// transactions and are rejected.
    pub fn decode_signed_fields(buf: &mut &[u8]) -> Result<(Self, Signature), TxDecodeError> {
        let mut payload = decode_fields(buf, Self::TX_TYPE)?;
        let buf = &mut payload;

        let nonce = Decodable::decode(buf)?;
        let gas_price = Decodable::decode(buf)?;
        let gas_limit = Decodable::decode(buf)?;
        let to = Decodable::decode(buf)?;
        let value = Decodable::decode(buf)?;
        let input = Decodable::decode(buf)?;

        let v = u128::decode(buf)?;
        if v < LEGACY_V_OFFSET as u128 {
            return Err(SignatureError::InvalidV(v).into());
        }
        let (y_parity, chain_id) = Signature::decode_v(v)?;
        let r = U256::decode(buf)?;
        let s = U256::decode(buf)?;

        let tx = Self {
            chain_id,
            nonce,
            gas_price,
            gas_limit,
            to,
            value,
            input,
        };
        Ok((tx, Signature::new(r, s, y_parity)))
    }
}

impl CommonTxFields for TxLegacy {
    fn tx_type(&self) -> TransactionType {
        Self::TX_TYPE
    }

    fn chain_id(&self) -> Option<u64> {
        self.chain_id
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

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::{address, b256, hex, keccak256};

    // https://eips.ethereum.org/EIPS/eip-155#example
    fn eip155_example() -> TxLegacy {
        TxLegacy {
            chain_id: Some(1),
            nonce: 9,
            gas_price: 20_000_000_000,
            gas_limit: 21_000,
            to: TxKind::Call(address!("3535353535353535353535353535353535353535")),
            value: U256::from(1_000_000_000_000_000_000u64),
            input: Bytes::new(),
        }
    }

    #[test]
    fn eip155_signing_payload() {
        let tx = eip155_example();
        let payload = tx.signing_payload();
        assert_eq!(
            payload[..],
            hex!("ec098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a764000080018080")
        );
        assert_eq!(
            keccak256(&payload),
            b256!("daf5a779ae972f972197303d7b574746c7ef83eadac0f2791ad23db92e4c8e53")
        );
    }

    #[test]
    fn pre_eip155_signing_payload_has_six_fields() {
        let tx = TxLegacy {
            chain_id: None,
            ..eip155_example()
        };
        let payload = tx.signing_payload();
        assert_eq!(
            payload[..],
            hex!("e9098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a764000080")
        );
        assert_eq!(rlp::count_items(&payload[1..]), Ok(6));
    }

    #[test]
    fn v_carries_chain_id() {
        let sig = Signature::new(U256::from(1), U256::from(2), true);
        let mut out = Vec::new();
        eip155_example().encode_signed(&sig, &mut out);
        let (tx, decoded) = TxLegacy::decode_signed_fields(&mut out.as_slice()).unwrap();
        assert_eq!(tx.chain_id, Some(1));
        assert_eq!(decoded, sig);

        let unprotected = TxLegacy {
            chain_id: None,
            ..eip155_example()
        };
        let mut out = Vec::new();
        unprotected.encode_signed(&sig, &mut out);
        // v = 28, r = 1, s = 2
        assert_eq!(&out[out.len() - 3..], &hex!("1c0102"));
        let (tx, _) = TxLegacy::decode_signed_fields(&mut out.as_slice()).unwrap();
        assert_eq!(tx.chain_id, None);
    }

    #[test]
    fn rejects_typed_parity_as_v() {
        let tx = TxLegacy {
            chain_id: None,
            ..eip155_example()
        };
        let sig = Signature::new(U256::from(1), U256::from(2), true);
        let mut out = Vec::new();
        tx.encode_signed(&sig, &mut out);
        // Replace `v = 28` with `v = 1`; the lengths are unchanged.
        let v_pos = out.len() - 3;
        out[v_pos] = 0x01;
        assert_eq!(
            TxLegacy::decode_signed_fields(&mut out.as_slice()),
            Err(TxDecodeError::InvalidSignature(SignatureError::InvalidV(1)))
        );
        out[v_pos] = 0x1f;
        assert_eq!(
            TxLegacy::decode_signed_fields(&mut out.as_slice()),
            Err(TxDecodeError::InvalidSignature(SignatureError::InvalidV(31)))
        );
    }

    #[test]
    fn rejects_wrong_arity() {
        let eight = hex!("c80102030405060708");
        assert_eq!(
            TxLegacy::decode_signed_fields(&mut &eight[..]),
            Err(TxDecodeError::FieldCountMismatch {
                expected: 9,
                got: 8
            })
        );
        let ten = hex!("ca0102030405060708090a");
        assert_eq!(
            TxLegacy::decode_signed_fields(&mut &ten[..]),
            Err(TxDecodeError::FieldCountMismatch {
                expected: 9,
                got: 10
            })
        );
    }
}
