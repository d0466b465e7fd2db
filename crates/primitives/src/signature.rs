//! ECDSA signature triple attached to a transaction.

use crate::{
    constants::{EIP155_V_OFFSET, LEGACY_V_OFFSET, SECP256K1N, SECP256K1N_HALF},
    B512, U256,
};
use core::fmt;

/// Signature `(r, s, v)` of a transaction.
///
/// Only the y-parity of `v` is stored. The wire value of `v` depends on the transaction
/// it is attached to and is produced by [`Signature::v`]: typed transactions carry the bare
/// parity, legacy transactions carry `27 + parity` or the [EIP-155] form
/// `35 + 2 * chain_id + parity`.
///
/// No range check is done on construction. `r` and `s` are validated when the signer
/// is recovered, so any triple can be attached to and serialized with a transaction.
///
/// [EIP-155]: https://eips.ethereum.org/EIPS/eip-155
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    /// The `r` value, x-coordinate of the ephemeral point `R`.
    pub r: U256,
    /// The `s` value.
    pub s: U256,
    /// Parity of the y-coordinate of `R`.
    pub y_parity: bool,
}

impl Signature {
    /// Creates a new signature from its parts.
    pub const fn new(r: U256, s: U256, y_parity: bool) -> Self {
        Self { r, s, y_parity }
    }

    /// Creates a signature from `r`, `s` and any accepted encoding of `v`.
    ///
    /// Accepted `v` values are the bare parity `0`/`1`, the pre-EIP-155 `27`/`28` and
    /// EIP-155 values `>= 35`. Only the parity is kept. Use [`Signature::from_rsv_for_chain`]
    /// when the signature is attached to a transaction with a known chain id.
    pub fn from_rsv(r: U256, s: U256, v: u64) -> Result<Self, SignatureError> {
        let (y_parity, _) = Self::decode_v(v as u128)?;
        Ok(Self::new(r, s, y_parity))
    }

    /// Creates a signature from `r`, `s` and `v` for a transaction on `chain_id`.
    ///
    /// An [EIP-155] `v` must encode `chain_id`, a pre-EIP-155 transaction (`None`) accepts
    /// no EIP-155 `v` at all. Parity and `27`/`28` values are accepted on every chain.
    ///
    /// [EIP-155]: https://eips.ethereum.org/EIPS/eip-155
    pub fn from_rsv_for_chain(
        r: U256,
        s: U256,
        v: u128,
        chain_id: Option<u64>,
    ) -> Result<Self, SignatureError> {
        let (y_parity, v_chain_id) = Self::decode_v(v)?;
        match v_chain_id {
            Some(got) if chain_id != Some(got) => Err(SignatureError::ChainIdMismatch {
                expected: chain_id,
                got,
            }),
            _ => Ok(Self::new(r, s, y_parity)),
        }
    }

    /// Splits a `v` value into y-parity and the [EIP-155] chain id, if any.
    ///
    /// `v` is taken as `u128` so that every `u64` chain id has an encoding.
    ///
    /// [EIP-155]: https://eips.ethereum.org/EIPS/eip-155
    pub const fn decode_v(v: u128) -> Result<(bool, Option<u64>), SignatureError> {
        match v {
            0 | 1 => Ok((v == 1, None)),
            27 | 28 => Ok((v == 28, None)),
            v if v >= EIP155_V_OFFSET as u128 => {
                let chain_id = (v - EIP155_V_OFFSET as u128) / 2;
                if chain_id > u64::MAX as u128 {
                    return Err(SignatureError::InvalidV(v));
                }
                Ok((v % 2 == 0, Some(chain_id as u64)))
            }
            v => Err(SignatureError::InvalidV(v)),
        }
    }

    /// Returns the legacy encoded `v` for the given chain id.
    ///
    /// `None` gives the pre-EIP-155 `27`/`28` form.
    pub const fn v(&self, chain_id: Option<u64>) -> u128 {
        match chain_id {
            Some(chain_id) => {
                chain_id as u128 * 2 + EIP155_V_OFFSET as u128 + self.y_parity as u128
            }
            None => LEGACY_V_OFFSET as u128 + self.y_parity as u128,
        }
    }

    /// Recovery id used by the ECDSA public key recovery, `0` or `1`.
    pub const fn recovery_id(&self) -> u8 {
        self.y_parity as u8
    }

    /// Returns the `r || s` bytes, both values left padded to 32 bytes.
    pub fn rs_bytes(&self) -> B512 {
        let mut out = B512::ZERO;
        out[..32].copy_from_slice(&self.r.to_be_bytes::<32>());
        out[32..].copy_from_slice(&self.s.to_be_bytes::<32>());
        out
    }

    /// Returns `true` if both `r` and `s` are in the `[1, n)` range.
    pub fn is_in_range(&self) -> bool {
        !self.r.is_zero() && !self.s.is_zero() && self.r < SECP256K1N && self.s < SECP256K1N
    }

    /// Returns `true` if `s` is greater than `n / 2`.
    pub fn has_high_s(&self) -> bool {
        self.s > SECP256K1N_HALF
    }

    /// Returns the equivalent low-s signature, or `None` if `s` is already low.
    ///
    /// `(r, n - s)` with the flipped parity recovers the same public key.
    pub fn normalize_s(&self) -> Option<Self> {
        if !self.has_high_s() || self.s >= SECP256K1N {
            return None;
        }
        Some(Self::new(self.r, SECP256K1N - self.s, !self.y_parity))
    }
}

/// Signature encoding errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignatureError {
    /// `v` is neither a parity, a pre-EIP-155 value, nor an EIP-155 value.
    InvalidV(u128),
    /// EIP-155 `v` encodes a different chain id than the transaction's.
    ChainIdMismatch {
        /// Chain id of the transaction, `None` before EIP-155.
        expected: Option<u64>,
        /// Chain id encoded in `v`.
        got: u64,
    },
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidV(v) => write!(f, "invalid signature v value {v}"),
            Self::ChainIdMismatch {
                expected: Some(expected),
                got,
            } => write!(f, "v is for chain id {got}, transaction is on chain id {expected}"),
            Self::ChainIdMismatch {
                expected: None,
                got,
            } => write!(f, "v is for chain id {got}, transaction has no chain id"),
        }
    }
}

impl core::error::Error for SignatureError {}
