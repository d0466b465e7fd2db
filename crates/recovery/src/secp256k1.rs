//! `ecrecover` over secp256k1.
//!
//! Depending on enabled features, a different backend does the curve arithmetic:
//! * [`k256`](https://crates.io/crates/k256) - maintained pure Rust library, used by default
//!   and usable in `no_std` environments.
//! * [`secp256k1`](https://crates.io/crates/secp256k1) - bindings to the C library used by
//!   bitcoin core, enabled by the `secp256k1` feature. It is faster than `k256`.
//!
//! Both backends accept high-s signatures: `(r, n - s)` with the flipped recovery id
//! recovers the same key as `(r, s)`.

use crate::{PublicKey, RecoveryError};
use primitives::{B256, B512, SECP256K1N, U256};

cfg_if::cfg_if! {
    if #[cfg(feature = "secp256k1")] {
        mod bitcoin_secp256k1;
        use bitcoin_secp256k1 as backend;
    } else {
        mod k256;
        use self::k256 as backend;
    }
}

/// Recovers the public key from a `r || s` signature, a recovery id and a digest.
///
/// `r` and `s` must be in `[1, n)` and the recovery id in `0..=3`. Ids `2` and `3` select
/// the point with x-coordinate `r + n`, which only exists for a handful of `r` values.
pub fn ecrecover(sig: &B512, recid: u8, msg: &B256) -> Result<PublicKey, RecoveryError> {
    let r = U256::from_be_slice(&sig[..32]);
    let s = U256::from_be_slice(&sig[32..]);
    if r.is_zero() {
        return Err(RecoveryError::ZeroR);
    }
    if s.is_zero() {
        return Err(RecoveryError::ZeroS);
    }
    if r >= SECP256K1N {
        return Err(RecoveryError::ROutOfRange);
    }
    if s >= SECP256K1N {
        return Err(RecoveryError::SOutOfRange);
    }
    if recid > 3 {
        return Err(RecoveryError::InvalidRecoveryId(recid));
    }

    backend::ecrecover(sig, recid, msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::{address, b256, hex};
    use rstest::rstest;

    const DIGEST: B256 = b256!("47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fad");

    fn rs(r: U256, s: U256) -> B512 {
        let mut out = B512::ZERO;
        out[..32].copy_from_slice(&r.to_be_bytes::<32>());
        out[32..].copy_from_slice(&s.to_be_bytes::<32>());
        out
    }

    #[test]
    fn known_vector() {
        let sig = B512::from(hex!(
            "650acf9d3f5f0a2c799776a1254355d5f4061762a237396a99a0e0e3fc2bcd67"
            "29514a0dacb2e623ac4abd157cb18163ff942280db4d5caad66ddf941ba12e03"
        ));
        let public_key = ecrecover(&sig, 0, &DIGEST).unwrap();
        assert_eq!(
            public_key.address(),
            address!("c08b5542d177ac6686946920409741463a15dddb")
        );
    }

    #[rstest]
    #[case::zero_r(U256::ZERO, U256::from(1), 0, RecoveryError::ZeroR)]
    #[case::zero_s(U256::from(1), U256::ZERO, 0, RecoveryError::ZeroS)]
    #[case::r_is_order(SECP256K1N, U256::from(1), 0, RecoveryError::ROutOfRange)]
    #[case::r_above_order(U256::MAX, U256::from(1), 1, RecoveryError::ROutOfRange)]
    #[case::s_is_order(U256::from(1), SECP256K1N, 0, RecoveryError::SOutOfRange)]
    #[case::recid_four(U256::from(1), U256::from(1), 4, RecoveryError::InvalidRecoveryId(4))]
    #[case::no_overflowed_point(U256::from(1u64) << 255usize, U256::from(1), 2, RecoveryError::InvalidPoint)]
    fn rejects(#[case] r: U256, #[case] s: U256, #[case] recid: u8, #[case] err: RecoveryError) {
        assert_eq!(ecrecover(&rs(r, s), recid, &DIGEST), Err(err));
    }

    #[test]
    fn parity_selects_key() {
        let sig = B512::from(hex!(
            "650acf9d3f5f0a2c799776a1254355d5f4061762a237396a99a0e0e3fc2bcd67"
            "29514a0dacb2e623ac4abd157cb18163ff942280db4d5caad66ddf941ba12e03"
        ));
        let even = ecrecover(&sig, 0, &DIGEST).unwrap();
        let odd = ecrecover(&sig, 1, &DIGEST).unwrap();
        assert_ne!(even, odd);
    }
}
