use core::fmt;

/// Reasons a signature cannot be used for public key recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecoveryError {
    /// `r` is zero.
    ZeroR,
    /// `s` is zero.
    ZeroS,
    /// `r` is not below the curve order.
    ROutOfRange,
    /// `s` is not below the curve order.
    SOutOfRange,
    /// Recovery id is greater than 3.
    InvalidRecoveryId(u8),
    /// No curve point matches `r` and the recovery id.
    InvalidPoint,
}

impl fmt::Display for RecoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroR => f.write_str("invalid signature: r is zero"),
            Self::ZeroS => f.write_str("invalid signature: s is zero"),
            Self::ROutOfRange => f.write_str("invalid signature: r is not below the curve order"),
            Self::SOutOfRange => f.write_str("invalid signature: s is not below the curve order"),
            Self::InvalidRecoveryId(id) => write!(f, "invalid signature: recovery id {id}"),
            Self::InvalidPoint => {
                f.write_str("invalid signature: no curve point for r and recovery id")
            }
        }
    }
}

impl core::error::Error for RecoveryError {}
