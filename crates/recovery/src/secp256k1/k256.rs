//! k256 implementation of `ecrecover`. More about it in [`crate::secp256k1`].
use crate::{PublicKey, RecoveryError};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use primitives::{B256, B512};

/// Recovers the public key using the `k256` crate.
pub(super) fn ecrecover(sig: &B512, mut recid: u8, msg: &B256) -> Result<PublicKey, RecoveryError> {
    let mut sig = Signature::from_slice(sig.as_slice()).map_err(|_| RecoveryError::InvalidPoint)?;

    // k256 rejects high-s signatures, normalize and flip the parity.
    if let Some(sig_normalized) = sig.normalize_s() {
        sig = sig_normalized;
        recid ^= 1;
    }
    let recid = RecoveryId::from_byte(recid).ok_or(RecoveryError::InvalidRecoveryId(recid))?;

    let recovered_key = VerifyingKey::recover_from_prehash(&msg[..], &sig, recid)
        .map_err(|_| RecoveryError::InvalidPoint)?;
    PublicKey::from_sec1_uncompressed(
        recovered_key
            .to_encoded_point(/* compress = */ false)
            .as_bytes(),
    )
    .ok_or(RecoveryError::InvalidPoint)
}
