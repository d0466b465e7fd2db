use core::fmt;
use primitives::SignatureError;

/// Errors when decoding a signed transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TxDecodeError {
    /// Bytes are not a canonical RLP encoding of a transaction.
    MalformedEncoding(rlp::Error),
    /// Envelope byte is not a supported transaction type.
    UnknownTransactionType(u8),
    /// Field list has a different number of items than the transaction type requires.
    FieldCountMismatch {
        /// Number of fields of the transaction type.
        expected: usize,
        /// Number of fields found.
        got: usize,
    },
    /// `v` or y-parity is not a valid encoding.
    InvalidSignature(SignatureError),
}

impl From<rlp::Error> for TxDecodeError {
    fn from(err: rlp::Error) -> Self {
        Self::MalformedEncoding(err)
    }
}

impl From<SignatureError> for TxDecodeError {
    fn from(err: SignatureError) -> Self {
        Self::InvalidSignature(err)
    }
}

impl fmt::Display for TxDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedEncoding(err) => write!(f, "malformed transaction encoding: {err}"),
            Self::UnknownTransactionType(ty) => write!(f, "unknown transaction type {ty:#04x}"),
            Self::FieldCountMismatch { expected, got } => {
                write!(f, "expected {expected} transaction fields, got {got}")
            }
            Self::InvalidSignature(err) => err.fmt(f),
        }
    }
}

impl core::error::Error for TxDecodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::MalformedEncoding(err) => Some(err),
            Self::InvalidSignature(err) => Some(err),
            _ => None,
        }
    }
}
