//! Random search for signatures that recover to a valid public key.
//!
//! About half of all `r` values are the x-coordinate of a curve point, so a random triple
//! recovers with probability close to one half.

use crate::recover_public_key;
use primitives::{Signature, B256, SECP256K1N, U256};
use rand::RngCore;

/// Draws a scalar uniformly from `[1, n)` by rejection sampling.
fn random_scalar<R: RngCore + ?Sized>(rng: &mut R) -> U256 {
    let mut bytes = [0u8; 32];
    loop {
        rng.fill_bytes(&mut bytes);
        let scalar = U256::from_be_bytes(bytes);
        if !scalar.is_zero() && scalar < SECP256K1N {
            return scalar;
        }
    }
}

/// Returns a signature with `r` and `s` uniform in `[1, n)` and a random parity.
///
/// The signature is in range but not guaranteed to recover: `r` may not be the
/// x-coordinate of any curve point.
pub fn random_signature<R: RngCore + ?Sized>(rng: &mut R) -> Signature {
    let r = random_scalar(rng);
    let s = random_scalar(rng);
    let y_parity = rng.next_u32() & 1 == 1;
    Signature::new(r, s, y_parity)
}

/// Draws random signatures until one recovers a public key for `digest`.
///
/// Returns `None` if none of `max_attempts` draws recovers.
pub fn find_recoverable_signature<R: RngCore + ?Sized>(
    digest: &B256,
    max_attempts: usize,
    rng: &mut R,
) -> Option<Signature> {
    (0..max_attempts)
        .map(|_| random_signature(rng))
        .find(|sig| recover_public_key(digest, sig).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::keccak256;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_signatures_are_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            assert!(random_signature(&mut rng).is_in_range());
        }
    }

    #[test]
    fn found_signature_recovers() {
        let digest = keccak256(b"search");
        let mut rng = StdRng::seed_from_u64(0);
        let sig = find_recoverable_signature(&digest, 128, &mut rng).unwrap();
        assert!(recover_public_key(&digest, &sig).is_ok());
    }

    #[test]
    fn zero_attempts() {
        let digest = keccak256(b"search");
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(find_recoverable_signature(&digest, 0, &mut rng), None);
    }

    #[test]
    fn seeded_search_is_reproducible() {
        let digest = keccak256(b"reproducible");
        let a = find_recoverable_signature(&digest, 128, &mut StdRng::seed_from_u64(9));
        let b = find_recoverable_signature(&digest, 128, &mut StdRng::seed_from_u64(9));
        assert!(a.is_some());
        assert_eq!(a, b);
    }
}
