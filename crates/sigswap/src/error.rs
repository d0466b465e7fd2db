use core::fmt;
use recovery::RecoveryError;
use transaction::TxDecodeError;

/// Errors of signature substitution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubstitutionError {
    /// Input is not a signed transaction.
    Decode(TxDecodeError),
    /// Substituted signature does not recover a signer.
    Recovery(RecoveryError),
}

impl From<TxDecodeError> for SubstitutionError {
    fn from(err: TxDecodeError) -> Self {
        Self::Decode(err)
    }
}

impl From<RecoveryError> for SubstitutionError {
    fn from(err: RecoveryError) -> Self {
        Self::Recovery(err)
    }
}

impl fmt::Display for SubstitutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(err) => err.fmt(f),
            Self::Recovery(err) => err.fmt(f),
        }
    }
}

impl core::error::Error for SubstitutionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Recovery(err) => Some(err),
        }
    }
}
