//! Transaction envelope: type dispatch, signing payloads and signed encodings.

use crate::{
    create_address, CommonTxFields, Signer, TxDecodeError, TxEip1559, TxEip2930, TxLegacy,
};
use primitives::{keccak256, Address, Bytes, Signature, TransactionType, TxKind, B256, U256};
use rlp::{EMPTY_LIST_CODE, EMPTY_STRING_CODE};
use std::vec::Vec;

/// Transaction of any supported type, without its signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum Transaction {
    /// Legacy transaction.
    Legacy(TxLegacy),
    /// EIP-2930 access list transaction.
    Eip2930(TxEip2930),
    /// EIP-1559 dynamic fee transaction.
    Eip1559(TxEip1559),
}

impl Transaction {
    /// Returns the bytes whose hash is signed by the sender.
    pub fn signing_payload(&self) -> Bytes {
        match self {
            Self::Legacy(tx) => tx.signing_payload(),
            Self::Eip2930(tx) => tx.signing_payload(),
            Self::Eip1559(tx) => tx.signing_payload(),
        }
    }

    /// Returns `keccak256` of the signing payload, the digest the signature is over.
    pub fn signature_hash(&self) -> B256 {
        keccak256(self.signing_payload())
    }

    /// Appends the signed encoding of the transaction with `sig` attached to `out`.
    pub fn encode_signed(&self, sig: &Signature, out: &mut Vec<u8>) {
        match self {
            Self::Legacy(tx) => tx.encode_signed(sig, out),
            Self::Eip2930(tx) => tx.encode_signed(sig, out),
            Self::Eip1559(tx) => tx.encode_signed(sig, out),
        }
    }

    /// Returns the signed encoding of the transaction with `sig` attached.
    ///
    /// `sig` is not checked against the transaction: any triple can be attached.
    pub fn serialize(&self, sig: &Signature) -> Bytes {
        let mut out = Vec::new();
        self.encode_signed(sig, &mut out);
        out.into()
    }

    /// Returns the transaction hash, `keccak256` of the signed encoding.
    pub fn tx_hash(&self, sig: &Signature) -> B256 {
        keccak256(self.serialize(sig))
    }

    /// Signs the signature hash with `signer` and returns the signature and the signed
    /// encoding.
    pub fn sign_with<S: Signer + ?Sized>(
        &self,
        signer: &S,
    ) -> Result<(Signature, Bytes), S::Error> {
        let sig = signer.sign_hash(&self.signature_hash())?;
        Ok((sig, self.serialize(&sig)))
    }

    /// Returns the address of the contract deployed by `sender`, or `None` if this is
    /// not a contract creation.
    pub fn contract_address(&self, sender: &Address) -> Option<Address> {
        self.is_create().then(|| create_address(sender, self.nonce()))
    }

    fn fields(&self) -> &dyn CommonTxFields {
        match self {
            Self::Legacy(tx) => tx,
            Self::Eip2930(tx) => tx,
            Self::Eip1559(tx) => tx,
        }
    }
}

impl CommonTxFields for Transaction {
    fn tx_type(&self) -> TransactionType {
        self.fields().tx_type()
    }

    fn chain_id(&self) -> Option<u64> {
        self.fields().chain_id()
    }

    fn nonce(&self) -> u64 {
        self.fields().nonce()
    }

    fn gas_limit(&self) -> u64 {
        self.fields().gas_limit()
    }

    fn kind(&self) -> TxKind {
        self.fields().kind()
    }

    fn value(&self) -> U256 {
        self.fields().value()
    }

    fn input(&self) -> &Bytes {
        self.fields().input()
    }
}

impl From<TxLegacy> for Transaction {
    fn from(tx: TxLegacy) -> Self {
        Self::Legacy(tx)
    }
}

impl From<TxEip2930> for Transaction {
    fn from(tx: TxEip2930) -> Self {
        Self::Eip2930(tx)
    }
}

impl From<TxEip1559> for Transaction {
    fn from(tx: TxEip1559) -> Self {
        Self::Eip1559(tx)
    }
}

/// Returns the signed encoding of `tx` with `sig` attached.
pub fn serialize(tx: &Transaction, sig: &Signature) -> Bytes {
    tx.serialize(sig)
}

/// Decodes a signed transaction into the transaction and its signature.
///
/// The first byte selects the type: `>= 0xc0` is a legacy RLP list, `0x01` and `0x02`
/// are typed envelopes. The whole input must be consumed.
///
/// The signature is returned as found. Whether it signs the transaction is not checked.
pub fn parse(bytes: &[u8]) -> Result<(Transaction, Signature), TxDecodeError> {
    let mut buf = bytes;
    let first = *buf.first().ok_or(rlp::Error::InputTooShort)?;
    let (tx, sig) = match first {
        EMPTY_LIST_CODE..=u8::MAX => {
            let (tx, sig) = TxLegacy::decode_signed_fields(&mut buf)?;
            (Transaction::Legacy(tx), sig)
        }
        EMPTY_STRING_CODE..EMPTY_LIST_CODE => return Err(rlp::Error::UnexpectedString.into()),
        ty => {
            buf = &buf[1..];
            match TransactionType::from_envelope_byte(ty) {
                Some(TransactionType::Eip2930) => {
                    let (tx, sig) = TxEip2930::decode_signed_fields(&mut buf)?;
                    (Transaction::Eip2930(tx), sig)
                }
                Some(TransactionType::Eip1559) => {
                    let (tx, sig) = TxEip1559::decode_signed_fields(&mut buf)?;
                    (Transaction::Eip1559(tx), sig)
                }
                _ => return Err(TxDecodeError::UnknownTransactionType(ty)),
            }
        }
    };

    if !buf.is_empty() {
        return Err(rlp::Error::TrailingBytes.into());
    }
    Ok((tx, sig))
}
