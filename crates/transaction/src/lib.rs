//! # sigswap-transaction
//!
//! Canonical encoding of legacy, [EIP-2930] and [EIP-1559] transactions.
//!
//! A transaction has two encodings: the signing payload, the bytes whose `keccak256` the
//! sender signs, and the signed encoding, the same fields followed by the signature.
//! Typed transactions are prefixed with their [EIP-2718] type byte in both.
//!
//! The codec treats the signature as three opaque fields. [`parse`] does not check
//! that the signature signs the payload and [`serialize`] attaches any signature given.
//!
//! [EIP-2718]: https://eips.ethereum.org/EIPS/eip-2718
//! [EIP-2930]: https://eips.ethereum.org/EIPS/eip-2930
//! [EIP-1559]: https://eips.ethereum.org/EIPS/eip-1559
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

mod access_list;
mod common;
mod create;
pub mod eip1559;
pub mod eip2930;
mod error;
pub mod legacy;
mod signer;
pub mod transaction;

pub use access_list::{AccessList, AccessListItem};
pub use common::CommonTxFields;
pub use create::create_address;
pub use eip1559::TxEip1559;
pub use eip2930::TxEip2930;
pub use error::TxDecodeError;
pub use legacy::TxLegacy;
pub use signer::Signer;
pub use transaction::{parse, serialize, Transaction};
