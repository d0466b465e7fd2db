use crate::{Error, Header, Result, EMPTY_STRING_CODE};
use primitives::{alloy_primitives::FixedBytes, Address, Bytes, TxKind, U256};
use std::vec::Vec;

/// A type that can be decoded from RLP.
pub trait Decodable: Sized {
    /// Decodes the next item of `buf` and advances `buf` past it.
    fn decode(buf: &mut &[u8]) -> Result<Self>;
}

/// Decodes a single value that must span all of `bytes`.
pub fn decode_exact<T: Decodable>(bytes: impl AsRef<[u8]>) -> Result<T> {
    let mut buf = bytes.as_ref();
    let value = T::decode(&mut buf)?;
    if !buf.is_empty() {
        return Err(Error::TrailingBytes);
    }
    Ok(value)
}

/// Counts the items of a list payload without decoding them.
pub fn count_items(mut payload: &[u8]) -> Result<usize> {
    let mut count = 0;
    while !payload.is_empty() {
        let header = Header::decode(&mut payload)?;
        payload = &payload[header.payload_length..];
        count += 1;
    }
    Ok(count)
}

/// Returns the payload of an integer, checking canonical form and width.
fn integer_payload<'a>(buf: &mut &'a [u8], max_len: usize) -> Result<&'a [u8]> {
    let payload = Header::decode_bytes(buf, false)?;
    if payload.len() > max_len {
        return Err(Error::Overflow);
    }
    if payload.first() == Some(&0) {
        return Err(Error::LeadingZero);
    }
    Ok(payload)
}

macro_rules! uint_impl {
    ($($t:ty),+ $(,)?) => {$(
        impl Decodable for $t {
            fn decode(buf: &mut &[u8]) -> Result<Self> {
                let payload = integer_payload(buf, core::mem::size_of::<$t>())?;
                Ok(payload.iter().fold(0, |acc, byte| (acc << 8) | *byte as $t))
            }
        }
    )+};
}

uint_impl!(u16, u32, u64, u128, usize);

impl Decodable for u8 {
    fn decode(buf: &mut &[u8]) -> Result<Self> {
        let payload = integer_payload(buf, 1)?;
        Ok(payload.first().copied().unwrap_or(0))
    }
}

impl Decodable for U256 {
    fn decode(buf: &mut &[u8]) -> Result<Self> {
        let payload = integer_payload(buf, 32)?;
        Ok(U256::from_be_slice(payload))
    }
}

impl Decodable for Bytes {
    fn decode(buf: &mut &[u8]) -> Result<Self> {
        Header::decode_bytes(buf, false).map(|payload| Bytes::copy_from_slice(payload))
    }
}

impl<const N: usize> Decodable for FixedBytes<N> {
    fn decode(buf: &mut &[u8]) -> Result<Self> {
        let payload = Header::decode_bytes(buf, false)?;
        if payload.len() != N {
            return Err(Error::UnexpectedLength);
        }
        Ok(Self::from_slice(payload))
    }
}

impl Decodable for Address {
    fn decode(buf: &mut &[u8]) -> Result<Self> {
        FixedBytes::<20>::decode(buf).map(Address::from)
    }
}

impl Decodable for TxKind {
    fn decode(buf: &mut &[u8]) -> Result<Self> {
        if buf.first() == Some(&EMPTY_STRING_CODE) {
            *buf = &buf[1..];
            return Ok(TxKind::Create);
        }
        Address::decode(buf).map(TxKind::Call)
    }
}

impl<T: Decodable> Decodable for Vec<T> {
    fn decode(buf: &mut &[u8]) -> Result<Self> {
        let mut payload = Header::decode_bytes(buf, true)?;
        let mut items = Vec::new();
        while !payload.is_empty() {
            items.push(T::decode(&mut payload)?);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;
    use primitives::{address, hex, B256};
    use rstest::rstest;

    #[rstest]
    #[case::zero(&hex!("80"), 0)]
    #[case::one(&hex!("01"), 1)]
    #[case::max_single(&hex!("7f"), 0x7f)]
    #[case::min_prefixed(&hex!("8180"), 0x80)]
    #[case::gas_price(&hex!("8435a4e900"), 900_000_000)]
    #[case::max(&hex!("88ffffffffffffffff"), u64::MAX)]
    fn decodes_u64(#[case] input: &[u8], #[case] expected: u64) {
        assert_eq!(decode_exact::<u64>(input), Ok(expected));
    }

    #[rstest]
    #[case::zero_byte(&hex!("00"), Error::LeadingZero)]
    #[case::leading_zero(&hex!("820001"), Error::LeadingZero)]
    #[case::prefixed_single_byte(&hex!("8105"), Error::NonCanonicalSingleByte)]
    #[case::too_wide(&hex!("89010000000000000000"), Error::Overflow)]
    #[case::list(&hex!("c0"), Error::UnexpectedList)]
    #[case::truncated(&hex!("8401"), Error::InputTooShort)]
    fn rejects_bad_u64(#[case] input: &[u8], #[case] err: Error) {
        assert_eq!(decode_exact::<u64>(input), Err(err));
    }

    #[test]
    fn decodes_u256() {
        let mut input = vec![0xa0];
        input.extend_from_slice(&[0xff; 32]);
        assert_eq!(decode_exact::<U256>(&input), Ok(U256::MAX));
        assert_eq!(decode_exact::<U256>(hex!("80")), Ok(U256::ZERO));

        let mut too_wide = vec![0xa1];
        too_wide.extend_from_slice(&[0x01; 33]);
        assert_eq!(decode_exact::<U256>(&too_wide), Err(Error::Overflow));
    }

    #[test]
    fn decodes_u8() {
        assert_eq!(decode_exact::<u8>(hex!("80")), Ok(0));
        assert_eq!(decode_exact::<u8>(hex!("05")), Ok(5));
        assert_eq!(decode_exact::<u8>(hex!("81ff")), Ok(0xff));
        assert_eq!(decode_exact::<u8>(hex!("820100")), Err(Error::Overflow));
    }

    #[test]
    fn decodes_bytes() {
        assert_eq!(decode_exact::<Bytes>(hex!("80")), Ok(Bytes::new()));
        assert_eq!(
            decode_exact::<Bytes>(hex!("00")),
            Ok(Bytes::from_static(&[0x00]))
        );
        assert_eq!(
            decode_exact::<Bytes>(hex!("83646f67")),
            Ok(Bytes::from_static(b"dog"))
        );
        let long = Bytes::from(vec![0x42u8; 300]);
        assert_eq!(decode_exact::<Bytes>(encode(&long)), Ok(long));
    }

    #[test]
    fn decodes_fixed_bytes() {
        let to = address!("3535353535353535353535353535353535353535");
        assert_eq!(
            decode_exact::<Address>(hex!("943535353535353535353535353535353535353535")),
            Ok(to)
        );
        assert_eq!(
            decode_exact::<Address>(hex!("8335353535")),
            Err(Error::UnexpectedLength)
        );
        assert_eq!(decode_exact::<B256>(encode(&B256::ZERO)), Ok(B256::ZERO));
    }

    #[test]
    fn decodes_tx_kind() {
        assert_eq!(decode_exact::<TxKind>(hex!("80")), Ok(TxKind::Create));
        let to = address!("3535353535353535353535353535353535353535");
        assert_eq!(
            decode_exact::<TxKind>(hex!("943535353535353535353535353535353535353535")),
            Ok(TxKind::Call(to))
        );
        assert_eq!(
            decode_exact::<TxKind>(hex!("820102")),
            Err(Error::UnexpectedLength)
        );
    }

    #[test]
    fn decodes_lists() {
        assert_eq!(decode_exact::<Vec<u64>>(hex!("c0")), Ok(vec![]));
        assert_eq!(decode_exact::<Vec<u64>>(hex!("c3010203")), Ok(vec![1, 2, 3]));
        assert_eq!(
            decode_exact::<Vec<Vec<u64>>>(hex!("c3c101c0")),
            Ok(vec![vec![1], vec![]])
        );
        assert_eq!(
            decode_exact::<Vec<u64>>(hex!("83010203")),
            Err(Error::UnexpectedString)
        );
    }

    #[test]
    fn cursor_advances() {
        let mut buf: &[u8] = &hex!("0183646f67c0");
        assert_eq!(u64::decode(&mut buf), Ok(1));
        assert_eq!(buf.len(), 5);
        assert_eq!(Bytes::decode(&mut buf), Ok(Bytes::from_static(b"dog")));
        assert_eq!(buf, &hex!("c0"));
        assert_eq!(Vec::<u64>::decode(&mut buf), Ok(vec![]));
        assert!(buf.is_empty());
    }

    #[test]
    fn trailing_bytes() {
        assert_eq!(decode_exact::<u64>(hex!("0102")), Err(Error::TrailingBytes));
    }

    #[test]
    fn counts_items() {
        assert_eq!(count_items(&[]), Ok(0));
        assert_eq!(count_items(&hex!("0183646f67c0")), Ok(3));
        assert_eq!(count_items(&hex!("0183646f")), Err(Error::InputTooShort));
    }

    #[test]
    fn roundtrip_against_alloy_rlp() {
        for value in [0u64, 0x7f, 0x80, 0x1234_5678, u64::MAX] {
            let encoded = alloy_rlp::encode(value);
            assert_eq!(decode_exact::<u64>(&encoded), Ok(value));
        }
    }
}
