//! # sigswap-recovery
//!
//! secp256k1 public key recovery.
//!
//! Given the digest of a signing payload and a signature `(r, s, v)`, recovery solves the
//! ECDSA verification equation for the public key: `Q = r⁻¹ (s·R − z·G)`, where `R` is the
//! curve point with x-coordinate `r` and the y-parity carried by `v`.
//!
//! Recovery is defined for any in-range triple, not only for triples produced by signing
//! the digest. Every such triple maps to *some* public key and hence to *some* address,
//! usually one no one holds the private key of.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

mod error;
mod public_key;
pub mod search;
pub mod secp256k1;

pub use error::RecoveryError;
pub use public_key::{derive_address, PublicKey};
pub use search::{find_recoverable_signature, random_signature};
pub use secp256k1::ecrecover;

use primitives::{Address, Signature, B256};

/// Recovers the public key that makes `sig` a valid signature of `digest`.
///
/// # Errors
///
/// Fails if `r` or `s` is zero or not below the curve order, or if no curve point has
/// x-coordinate `r`.
pub fn recover_public_key(digest: &B256, sig: &Signature) -> Result<PublicKey, RecoveryError> {
    ecrecover(&sig.rs_bytes(), sig.recovery_id(), digest)
}

/// Recovers the address of the account that would have produced `sig` over `digest`.
pub fn recover_address(digest: &B256, sig: &Signature) -> Result<Address, RecoveryError> {
    recover_public_key(digest, sig).map(|public_key| derive_address(&public_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::ecdsa::SigningKey;
    use primitives::{address, b256, keccak256, SECP256K1N, U256};
    use rand::{rngs::StdRng, SeedableRng};

    fn sign(key: &SigningKey, digest: &B256) -> Signature {
        let (sig, recid) = key.sign_prehash_recoverable(digest.as_slice()).unwrap();
        let bytes = sig.to_bytes();
        Signature::new(
            U256::from_be_slice(&bytes[..32]),
            U256::from_be_slice(&bytes[32..]),
            recid.is_y_odd(),
        )
    }

    fn key_address(key: &SigningKey) -> Address {
        let point = key.verifying_key().to_encoded_point(false);
        let mut xy = [0u8; 64];
        xy.copy_from_slice(&point.as_bytes()[1..]);
        derive_address(&PublicKey::new(xy.into()))
    }

    #[test]
    fn eip155_example_signer() {
        let digest = b256!("daf5a779ae972f972197303d7b574746c7ef83eadac0f2791ad23db92e4c8e53");
        let sig = Signature::from_rsv(
            U256::from_str_radix(
                "18515461264373351373200002665853028612451056578545711640558177340181847433846",
                10,
            )
            .unwrap(),
            U256::from_str_radix(
                "46948507304638947509940763649030358759909902576025900602547168820602576006531",
                10,
            )
            .unwrap(),
            37,
        )
        .unwrap();
        assert_eq!(
            recover_address(&digest, &sig),
            Ok(address!("9d8a62f656a8d1615c1294fd71e9cfb3e4855a4f"))
        );
    }

    #[test]
    fn recovers_local_signature() {
        let key = SigningKey::from_slice(&[0x46; 32]).unwrap();
        let digest = keccak256(b"sigswap");
        let sig = sign(&key, &digest);
        assert_eq!(
            recover_address(&digest, &sig),
            Ok(address!("9d8a62f656a8d1615c1294fd71e9cfb3e4855a4f"))
        );
        assert_eq!(recover_address(&digest, &sig), Ok(key_address(&key)));
    }

    #[test]
    fn high_s_recovers_same_key() {
        let key = SigningKey::from_slice(&[0x11; 32]).unwrap();
        let digest = keccak256(b"high s");
        let low = sign(&key, &digest);
        let high = Signature::new(low.r, SECP256K1N - low.s, !low.y_parity);
        assert!(high.has_high_s());
        assert_eq!(
            recover_public_key(&digest, &high),
            recover_public_key(&digest, &low)
        );
    }

    #[test]
    fn deterministic() {
        let digest = keccak256(b"determinism");
        let sig = random_signature(&mut StdRng::seed_from_u64(7));
        let first = recover_public_key(&digest, &sig);
        for _ in 0..3 {
            assert_eq!(recover_public_key(&digest, &sig), first);
        }
    }

    #[test]
    fn unsigned_triple_recovers_someone_else() {
        let key = SigningKey::from_slice(&[0x46; 32]).unwrap();
        let digest = keccak256(b"deploy");
        let original = sign(&key, &digest);

        // Same `r`, so `R` is a valid point, arbitrary `s`.
        let forged = Signature::new(original.r, U256::from(0xdead_beefu64), original.y_parity);
        let forged_address = recover_address(&digest, &forged).unwrap();
        assert_ne!(forged_address, key_address(&key));
    }

    #[test]
    fn distinct_triples_distinct_addresses() {
        let digest = keccak256(b"independence");
        let mut rng = StdRng::seed_from_u64(1337);
        let a = find_recoverable_signature(&digest, 64, &mut rng).unwrap();
        let b = find_recoverable_signature(&digest, 64, &mut rng).unwrap();
        assert_ne!(a, b);
        assert_ne!(
            recover_address(&digest, &a).unwrap(),
            recover_address(&digest, &b).unwrap()
        );
    }
}
