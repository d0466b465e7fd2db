//! bitcoin_secp256k1 implementation of `ecrecover`. More about it in [`crate::secp256k1`].
use crate::{PublicKey, RecoveryError};
use primitives::{B256, B512};
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message, SECP256K1,
};

// Silence the unused crate dependency warning.
use k256 as _;

/// Recovers the public key using the `secp256k1` crate.
pub(super) fn ecrecover(sig: &B512, recid: u8, msg: &B256) -> Result<PublicKey, RecoveryError> {
    let recid =
        RecoveryId::from_i32(recid as i32).map_err(|_| RecoveryError::InvalidRecoveryId(recid))?;
    let sig = RecoverableSignature::from_compact(sig.as_slice(), recid)
        .map_err(|_| RecoveryError::InvalidPoint)?;

    let msg = Message::from_digest(msg.0);
    let public = SECP256K1
        .recover_ecdsa(&msg, &sig)
        .map_err(|_| RecoveryError::InvalidPoint)?;

    PublicKey::from_sec1_uncompressed(&public.serialize_uncompressed())
        .ok_or(RecoveryError::InvalidPoint)
}
