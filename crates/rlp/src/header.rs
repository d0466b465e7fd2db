use crate::{
    encode::length_of_length, Error, Result, EMPTY_LIST_CODE, EMPTY_STRING_CODE,
    SHORT_PAYLOAD_LIMIT,
};
use std::vec::Vec;

/// Prefix of an RLP item: its kind and the length of its payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Header {
    /// `true` for lists, `false` for byte strings.
    pub list: bool,
    /// Length of the payload in bytes.
    pub payload_length: usize,
}

impl Header {
    /// Decodes the header of the next item and advances `buf` to its payload.
    ///
    /// A single byte below `0x80` is its own payload: the buffer is not advanced and the
    /// returned header is a string of length 1.
    ///
    /// The payload is guaranteed to be in `buf` when this returns `Ok`.
    pub fn decode(buf: &mut &[u8]) -> Result<Self> {
        let first = *buf.first().ok_or(Error::InputTooShort)?;
        let header = match first {
            0x00..=0x7F => {
                return Ok(Self {
                    list: false,
                    payload_length: 1,
                })
            }
            0x80..=0xB7 => {
                *buf = &buf[1..];
                let payload_length = (first - EMPTY_STRING_CODE) as usize;
                if payload_length == 1 {
                    let byte = *buf.first().ok_or(Error::InputTooShort)?;
                    if byte < EMPTY_STRING_CODE {
                        return Err(Error::NonCanonicalSingleByte);
                    }
                }
                Self {
                    list: false,
                    payload_length,
                }
            }
            0xB8..=0xBF => Self {
                list: false,
                payload_length: decode_long_length(buf, (first - 0xB7) as usize)?,
            },
            0xC0..=0xF7 => {
                *buf = &buf[1..];
                Self {
                    list: true,
                    payload_length: (first - EMPTY_LIST_CODE) as usize,
                }
            }
            0xF8..=0xFF => Self {
                list: true,
                payload_length: decode_long_length(buf, (first - 0xF7) as usize)?,
            },
        };

        if buf.len() < header.payload_length {
            return Err(Error::InputTooShort);
        }
        Ok(header)
    }

    /// Decodes the next item, checks its kind and returns its payload.
    ///
    /// `buf` is advanced past the whole item.
    pub fn decode_bytes<'a>(buf: &mut &'a [u8], is_list: bool) -> Result<&'a [u8]> {
        let header = Self::decode(buf)?;
        if header.list != is_list {
            return Err(if is_list {
                Error::UnexpectedString
            } else {
                Error::UnexpectedList
            });
        }
        let (payload, rest) = buf.split_at(header.payload_length);
        *buf = rest;
        Ok(payload)
    }

    /// Encodes the header into `out`.
    pub fn encode(&self, out: &mut Vec<u8>) {
        let code = if self.list {
            EMPTY_LIST_CODE
        } else {
            EMPTY_STRING_CODE
        };
        if self.payload_length < SHORT_PAYLOAD_LIMIT {
            out.push(code + self.payload_length as u8);
        } else {
            let len_be = self.payload_length.to_be_bytes();
            let len_be = &len_be[self.payload_length.leading_zeros() as usize / 8..];
            out.push(code + 0x37 + len_be.len() as u8);
            out.extend_from_slice(len_be);
        }
    }

    /// Length of the encoded header.
    pub const fn length(&self) -> usize {
        length_of_length(self.payload_length)
    }

    /// Length of the encoded header and its payload.
    pub const fn length_with_payload(&self) -> usize {
        self.length() + self.payload_length
    }
}

/// Reads a big-endian length of `len_of_len` bytes following the prefix byte.
fn decode_long_length(buf: &mut &[u8], len_of_len: usize) -> Result<usize> {
    let rest = &buf[1..];
    if rest.len() < len_of_len {
        return Err(Error::InputTooShort);
    }
    let (len_be, rest) = rest.split_at(len_of_len);
    if len_be[0] == 0 {
        return Err(Error::NonCanonicalSize);
    }
    if len_of_len > core::mem::size_of::<usize>() {
        return Err(Error::Overflow);
    }
    let length = len_be
        .iter()
        .fold(0usize, |acc, byte| (acc << 8) | *byte as usize);
    if length < SHORT_PAYLOAD_LIMIT {
        return Err(Error::NonCanonicalSize);
    }
    *buf = rest;
    Ok(length)
}
