use auto_impl::auto_impl;
use primitives::{Signature, B256};

/// Produces signatures over transaction signature hashes.
///
/// Only the original signature of a transaction comes from a signer. Substituted
/// signatures are chosen by the caller and never signed.
#[auto_impl(&, Box)]
pub trait Signer {
    /// Signing error.
    type Error;

    /// Signs a 32 byte digest.
    fn sign_hash(&self, hash: &B256) -> Result<Signature, Self::Error>;
}
