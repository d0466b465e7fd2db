//! # sigswap-rlp
//!
//! Recursive length prefix (RLP) encoding of transaction fields.
//!
//! Values are either byte strings or lists of values. Every item starts with a prefix that
//! tells its kind and its payload length:
//!
//! | first byte    | item                                                  |
//! |---------------|-------------------------------------------------------|
//! | `0x00..=0x7f` | the byte itself                                       |
//! | `0x80..=0xb7` | string of `first - 0x80` bytes                        |
//! | `0xb8..=0xbf` | string, `first - 0xb7` big-endian length bytes follow |
//! | `0xc0..=0xf7` | list with `first - 0xc0` payload bytes                |
//! | `0xf8..=0xff` | list, `first - 0xf7` big-endian length bytes follow   |
//!
//! Decoding is strict: every value has exactly one accepted encoding.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

mod decode;
mod encode;
mod error;
mod header;

pub use decode::{count_items, decode_exact, Decodable};
pub use encode::{encode, encode_list, length_of_length, list_length, Encodable};
pub use error::{Error, Result};
pub use header::Header;

/// RLP prefix byte for a 0-length string.
pub const EMPTY_STRING_CODE: u8 = 0x80;

/// RLP prefix byte for a 0-length list.
pub const EMPTY_LIST_CODE: u8 = 0xC0;

/// Payloads shorter than this are encoded with a single prefix byte.
pub(crate) const SHORT_PAYLOAD_LIMIT: usize = 56;
