//! Replacing the signature of a signed transaction.
//!
//! The signature hash of a transaction does not cover its signature, so a signed
//! transaction can be re-serialized with any other `(r, s, v)` triple. The result is a
//! well formed transaction whose sender, as recovered from the new triple, is an
//! account no one chose and, in general, no one holds the key of.

use crate::{Broadcaster, SubstitutionError};
use primitives::{hex, Address, Bytes, Signature, B256};
use recovery::{recover_address, RecoveryError};
use tracing::{debug, trace};
use transaction::{parse, CommonTxFields, Transaction};

/// Result of a signature substitution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Substitution {
    /// Transaction, unchanged by the substitution.
    pub transaction: Transaction,
    /// Signature found in the input.
    pub original_signature: Signature,
    /// Signature attached in its place.
    pub signature: Signature,
    /// Signed encoding with the substituted signature.
    pub bytes: Bytes,
    /// Signer of the input, `None` if its signature does not recover.
    pub original_signer: Option<Address>,
    /// Signer recovered from the substituted signature.
    pub substituted_signer: Address,
    /// Hash of the substituted transaction.
    pub tx_hash: B256,
    /// Address of the contract the substituted signer deploys, for contract creations.
    pub contract_address: Option<Address>,
}

impl Substitution {
    /// Submits the substituted transaction.
    pub fn submit<B: Broadcaster + ?Sized>(
        &self,
        broadcaster: &mut B,
    ) -> Result<B::Receipt, B::Error> {
        debug!(
            target: "sigswap::substitute",
            tx_hash = %self.tx_hash,
            sender = %self.substituted_signer,
            "submitting substituted transaction"
        );
        broadcaster.submit(&self.bytes)
    }
}

/// Recovers the address that signed `tx` with `sig`.
pub fn recover_signer(tx: &Transaction, sig: &Signature) -> Result<Address, RecoveryError> {
    recover_address(&tx.signature_hash(), sig)
}

/// Replaces the signature of the signed transaction `signed` with `new_sig`.
///
/// Only the signature fields change: every other field and the encoding of the
/// transaction type are kept. The `v` written is derived from `new_sig`'s parity and the
/// transaction. To start from a wire `v`, build `new_sig` with
/// [`Signature::from_rsv_for_chain`], which rejects a `v` for another chain.
pub fn substitute(signed: &[u8], new_sig: &Signature) -> Result<Bytes, SubstitutionError> {
    let (tx, _) = parse(signed)?;
    Ok(tx.serialize(new_sig))
}

/// Replaces the signature like [`substitute`] and recovers both signers.
///
/// Fails if the substituted signature does not recover a public key. A non recoverable
/// original signature is reported as `original_signer: None`.
pub fn substitute_and_recover(
    signed: &[u8],
    new_sig: &Signature,
) -> Result<Substitution, SubstitutionError> {
    let (tx, original_signature) = parse(signed)?;
    let signature_hash = tx.signature_hash();
    trace!(
        target: "sigswap::substitute",
        %signature_hash,
        signed = %hex::encode(signed),
        "decoded transaction"
    );

    let original_signer = recover_address(&signature_hash, &original_signature).ok();
    let substituted_signer = recover_address(&signature_hash, new_sig)?;
    let bytes = tx.serialize(new_sig);
    trace!(
        target: "sigswap::substitute",
        substituted = %hex::encode(&bytes),
        "encoded substituted transaction"
    );

    let substitution = Substitution {
        contract_address: tx.contract_address(&substituted_signer),
        tx_hash: primitives::keccak256(&bytes),
        original_signer,
        substituted_signer,
        original_signature,
        signature: *new_sig,
        bytes,
        transaction: tx,
    };
    debug!(
        target: "sigswap::substitute",
        tx_type = ?substitution.transaction.tx_type(),
        original_signer = ?substitution.original_signer,
        substituted_signer = %substitution.substituted_signer,
        tx_hash = %substitution.tx_hash,
        "substituted signature"
    );
    Ok(substitution)
}
