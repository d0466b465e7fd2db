/// Transaction types understood by the codec.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransactionType {
    /// Legacy transaction type, no envelope byte.
    #[default]
    Legacy = 0,
    /// EIP-2930 Access List transaction type
    Eip2930 = 1,
    /// EIP-1559 Fee market change transaction type
    Eip1559 = 2,
}

impl TransactionType {
    /// Returns the transaction type for an [EIP-2718] envelope byte.
    ///
    /// `0` is not accepted here, legacy transactions are not enveloped.
    ///
    /// [EIP-2718]: https://eips.ethereum.org/EIPS/eip-2718
    pub const fn from_envelope_byte(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(Self::Eip2930),
            2 => Some(Self::Eip1559),
            _ => None,
        }
    }

    /// Returns `true` if the transaction is prefixed with its type byte on the wire.
    pub const fn is_typed(self) -> bool {
        !matches!(self, Self::Legacy)
    }

    /// Number of RLP fields of the signed encoding, signature included.
    pub const fn signed_field_count(self) -> usize {
        match self {
            Self::Legacy => 9,
            Self::Eip2930 => 11,
            Self::Eip1559 => 12,
        }
    }
}

impl PartialEq<u8> for TransactionType {
    fn eq(&self, other: &u8) -> bool {
        (*self as u8) == *other
    }
}

impl PartialEq<TransactionType> for u8 {
    fn eq(&self, other: &TransactionType) -> bool {
        *self == (*other as u8)
    }
}

impl From<TransactionType> for u8 {
    fn from(tx_type: TransactionType) -> u8 {
        tx_type as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_bytes() {
        assert_eq!(TransactionType::from_envelope_byte(0), None);
        assert_eq!(
            TransactionType::from_envelope_byte(1),
            Some(TransactionType::Eip2930)
        );
        assert_eq!(
            TransactionType::from_envelope_byte(2),
            Some(TransactionType::Eip1559)
        );
        assert_eq!(TransactionType::from_envelope_byte(3), None);
        assert_eq!(TransactionType::from_envelope_byte(0x7f), None);
    }

    #[test]
    fn compares_with_u8() {
        assert_eq!(TransactionType::Eip1559, 2u8);
        assert_eq!(1u8, TransactionType::Eip2930);
        assert_eq!(u8::from(TransactionType::Legacy), 0);
        assert!(!TransactionType::Legacy.is_typed());
        assert!(TransactionType::Eip2930.is_typed());
    }
}
