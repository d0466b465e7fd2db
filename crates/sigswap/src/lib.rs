//! # sigswap
//!
//! Signature substitution on Ethereum transactions.
//!
//! A signed transaction is its signing payload followed by a signature `(r, s, v)`. The
//! sender is never encoded: it is recovered from the signature and the hash of the
//! signing payload. Replacing the signature of a decoded transaction with any in-range
//! triple yields another valid transaction, sent by whichever account that triple
//! recovers to.
//!
//! ```
//! use sigswap::{
//!     primitives::{Signature, TxKind, U256},
//!     substitute_and_recover, LocalSigner, Transaction, TxLegacy,
//! };
//!
//! let tx: Transaction = TxLegacy {
//!     chain_id: Some(31337),
//!     gas_price: 900_000_000,
//!     gas_limit: 1_000_000,
//!     to: TxKind::Create,
//!     ..Default::default()
//! }
//! .into();
//! let signer = LocalSigner::from_slice(&[0x46; 32]).unwrap();
//! let (_, signed) = tx.sign_with(&signer).unwrap();
//!
//! let r = U256::from_be_slice(&[0x18, 0x20].repeat(16));
//! let substitution = substitute_and_recover(&signed, &Signature::new(r, r, true)).unwrap();
//! assert_eq!(substitution.original_signer, Some(signer.address()));
//! assert_ne!(substitution.substituted_signer, signer.address());
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

mod broadcast;
mod error;
mod local_signer;
pub mod substitution;

// Export sub-crates.
pub use primitives;
pub use recovery;
pub use rlp;
pub use transaction;

pub use broadcast::Broadcaster;
pub use error::SubstitutionError;
pub use local_signer::{LocalSigner, LocalSignerError};
pub use recovery::{find_recoverable_signature, recover_address, PublicKey, RecoveryError};
pub use substitution::{recover_signer, substitute, substitute_and_recover, Substitution};
pub use transaction::{
    parse, serialize, CommonTxFields, Signer, Transaction, TxDecodeError, TxEip1559, TxEip2930,
    TxLegacy,
};
