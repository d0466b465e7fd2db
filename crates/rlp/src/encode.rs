use crate::{Header, EMPTY_STRING_CODE, SHORT_PAYLOAD_LIMIT};
use primitives::{alloy_primitives::FixedBytes, Address, Bytes, TxKind, U256};
use std::vec::Vec;

/// A type that can be RLP encoded.
pub trait Encodable {
    /// Appends the encoding of `self` to `out`.
    fn encode(&self, out: &mut Vec<u8>);

    /// Length of the encoding of `self` in bytes.
    fn length(&self) -> usize {
        let mut out = Vec::new();
        self.encode(&mut out);
        out.len()
    }
}

/// Encodes `value` into a new vector.
pub fn encode<T: Encodable + ?Sized>(value: &T) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.length());
    value.encode(&mut out);
    out
}

/// Encodes a homogeneous list.
pub fn encode_list<T: Encodable>(values: &[T], out: &mut Vec<u8>) {
    let payload_length = values.iter().map(Encodable::length).sum();
    Header {
        list: true,
        payload_length,
    }
    .encode(out);
    for value in values {
        value.encode(out);
    }
}

/// Length of a header for a payload of `payload_length` bytes.
pub const fn length_of_length(payload_length: usize) -> usize {
    if payload_length < SHORT_PAYLOAD_LIMIT {
        1
    } else {
        1 + (usize::BITS as usize - payload_length.leading_zeros() as usize).div_ceil(8)
    }
}

/// Length of a list, header included, with a payload of `payload_length` bytes.
pub const fn list_length(payload_length: usize) -> usize {
    length_of_length(payload_length) + payload_length
}

impl<T: Encodable + ?Sized> Encodable for &T {
    fn encode(&self, out: &mut Vec<u8>) {
        (**self).encode(out)
    }

    fn length(&self) -> usize {
        (**self).length()
    }
}

impl Encodable for [u8] {
    fn encode(&self, out: &mut Vec<u8>) {
        if self.len() != 1 || self[0] >= EMPTY_STRING_CODE {
            Header {
                list: false,
                payload_length: self.len(),
            }
            .encode(out);
        }
        out.extend_from_slice(self);
    }

    fn length(&self) -> usize {
        if self.len() == 1 && self[0] < EMPTY_STRING_CODE {
            1
        } else {
            length_of_length(self.len()) + self.len()
        }
    }
}

impl Encodable for Bytes {
    fn encode(&self, out: &mut Vec<u8>) {
        self.as_ref().encode(out)
    }

    fn length(&self) -> usize {
        self.as_ref().length()
    }
}

impl<const N: usize> Encodable for FixedBytes<N> {
    fn encode(&self, out: &mut Vec<u8>) {
        self.as_slice().encode(out)
    }

    fn length(&self) -> usize {
        self.as_slice().length()
    }
}

impl Encodable for Address {
    fn encode(&self, out: &mut Vec<u8>) {
        self.as_slice().encode(out)
    }

    fn length(&self) -> usize {
        self.as_slice().length()
    }
}

/// `Create` is the empty string, `Call` is the 20 byte address.
impl Encodable for TxKind {
    fn encode(&self, out: &mut Vec<u8>) {
        match self {
            TxKind::Create => out.push(EMPTY_STRING_CODE),
            TxKind::Call(to) => to.encode(out),
        }
    }

    fn length(&self) -> usize {
        match self {
            TxKind::Create => 1,
            TxKind::Call(to) => to.length(),
        }
    }
}

/// Encodes big-endian bytes of an integer without its leading zeros.
fn encode_be_trimmed(be: &[u8], out: &mut Vec<u8>) {
    let start = be.iter().position(|b| *b != 0).unwrap_or(be.len());
    be[start..].encode(out)
}

fn be_trimmed_length(be: &[u8]) -> usize {
    let start = be.iter().position(|b| *b != 0).unwrap_or(be.len());
    be[start..].length()
}

macro_rules! uint_impl {
    ($($t:ty),+ $(,)?) => {$(
        impl Encodable for $t {
            fn encode(&self, out: &mut Vec<u8>) {
                encode_be_trimmed(&self.to_be_bytes(), out)
            }

            fn length(&self) -> usize {
                be_trimmed_length(&self.to_be_bytes())
            }
        }
    )+};
}

uint_impl!(u8, u16, u32, u64, u128, usize);

impl Encodable for U256 {
    fn encode(&self, out: &mut Vec<u8>) {
        encode_be_trimmed(&self.to_be_bytes::<32>(), out)
    }

    fn length(&self) -> usize {
        be_trimmed_length(&self.to_be_bytes::<32>())
    }
}

impl Encodable for bool {
    fn encode(&self, out: &mut Vec<u8>) {
        (*self as u8).encode(out)
    }

    fn length(&self) -> usize {
        1
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn encode(&self, out: &mut Vec<u8>) {
        encode_list(self, out)
    }

    fn length(&self) -> usize {
        list_length(self.iter().map(Encodable::length).sum())
    }
}
