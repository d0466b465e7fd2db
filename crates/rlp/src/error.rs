use core::fmt;

/// RLP result type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// RLP decoding errors.
///
/// Every variant describes a structurally invalid, or valid but non-canonical, encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// Numeric value does not fit in the target type.
    Overflow,
    /// Integer encoding has a leading zero byte.
    LeadingZero,
    /// Declared length exceeds the remaining input.
    InputTooShort,
    /// A single byte below `0x80` was prefixed with a length.
    NonCanonicalSingleByte,
    /// Long form length used for a short payload, or the length has leading zeros.
    NonCanonicalSize,
    /// Fixed size value has the wrong length.
    UnexpectedLength,
    /// Expected a list, got a string.
    UnexpectedString,
    /// Expected a string, got a list.
    UnexpectedList,
    /// Bytes are left after the decoded value.
    TrailingBytes,
    /// List does not have the expected number of items.
    ListLengthMismatch {
        /// Expected number of items.
        expected: usize,
        /// Number of items found.
        got: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => f.write_str("overflow"),
            Self::LeadingZero => f.write_str("leading zero"),
            Self::InputTooShort => f.write_str("input too short"),
            Self::NonCanonicalSingleByte => f.write_str("non-canonical single byte"),
            Self::NonCanonicalSize => f.write_str("non-canonical size"),
            Self::UnexpectedLength => f.write_str("unexpected length"),
            Self::UnexpectedString => f.write_str("unexpected string"),
            Self::UnexpectedList => f.write_str("unexpected list"),
            Self::TrailingBytes => f.write_str("trailing bytes after value"),
            Self::ListLengthMismatch { expected, got } => {
                write!(f, "list length mismatch: expected {expected}, got {got}")
            }
        }
    }
}

impl core::error::Error for Error {}
