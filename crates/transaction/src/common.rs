use crate::TxDecodeError;
use auto_impl::auto_impl;
use primitives::{Bytes, Signature, SignatureError, TransactionType, TxKind, U256};
use rlp::{Decodable, Encodable, Header};
use std::vec::Vec;

/// Fields shared by every transaction type.
#[auto_impl(&, Box)]
pub trait CommonTxFields {
    /// Transaction type.
    fn tx_type(&self) -> TransactionType;

    /// Chain id the transaction is bound to.
    ///
    /// Optional for legacy transactions, introduced by EIP-155.
    fn chain_id(&self) -> Option<u64>;

    /// Nonce of the sender account.
    fn nonce(&self) -> u64;

    /// Maximum amount of gas the transaction may use.
    fn gas_limit(&self) -> u64;

    /// Call target, or [`TxKind::Create`] for contract creation.
    fn kind(&self) -> TxKind;

    /// Amount of wei transferred.
    fn value(&self) -> U256;

    /// Call data, or init code of a contract creation.
    fn input(&self) -> &Bytes;

    /// Returns `true` if the transaction deploys a contract.
    fn is_create(&self) -> bool {
        self.kind().is_create()
    }
}

/// Decodes the field list of a signed transaction and checks its arity.
///
/// Returns the list payload; `buf` is advanced past the list.
pub(crate) fn decode_fields<'a>(
    buf: &mut &'a [u8],
    tx_type: TransactionType,
) -> Result<&'a [u8], TxDecodeError> {
    let payload = Header::decode_bytes(buf, true)?;
    let expected = tx_type.signed_field_count();
    let got = rlp::count_items(payload)?;
    if got != expected {
        return Err(TxDecodeError::FieldCountMismatch { expected, got });
    }
    Ok(payload)
}

/// Decodes `y_parity || r || s` of a typed transaction.
pub(crate) fn decode_typed_signature(buf: &mut &[u8]) -> Result<Signature, TxDecodeError> {
    let y_parity = match u128::decode(buf)? {
        0 => false,
        1 => true,
        v => return Err(SignatureError::InvalidV(v).into()),
    };
    let r = U256::decode(buf)?;
    let s = U256::decode(buf)?;
    Ok(Signature::new(r, s, y_parity))
}

/// Length of the `y_parity || r || s` fields of a typed transaction.
pub(crate) fn typed_signature_length(sig: &Signature) -> usize {
    sig.y_parity.length() + sig.r.length() + sig.s.length()
}

/// Encodes the `y_parity || r || s` fields of a typed transaction.
pub(crate) fn encode_typed_signature(sig: &Signature, out: &mut Vec<u8>) {
    sig.y_parity.encode(out);
    sig.r.encode(out);
    sig.s.encode(out);
}

/// Encodes `type || rlp([fields..., trailer...])` with `fields` writing the list items.
pub(crate) fn encode_enveloped(
    tx_type: TransactionType,
    payload_length: usize,
    out: &mut Vec<u8>,
    fields: impl FnOnce(&mut Vec<u8>),
) {
    if tx_type.is_typed() {
        out.push(tx_type.into());
    }
    Header {
        list: true,
        payload_length,
    }
    .encode(out);
    fields(out);
}
