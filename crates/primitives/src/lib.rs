//! # sigswap-primitives
//!
//! Types shared by the transaction codec and the signature recovery crates.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

/// Curve and signature constants.
pub mod constants;
pub mod signature;
/// Supported transaction types.
pub mod transaction_type;

pub use constants::*;
pub use signature::{Signature, SignatureError};
pub use transaction_type::TransactionType;

pub use alloy_primitives::{
    self, address, b256, hex, keccak256, Address, Bytes, TxKind, B256, B512, U256,
};
