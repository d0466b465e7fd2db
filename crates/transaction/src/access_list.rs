use primitives::{Address, B256};
use rlp::{Decodable, Encodable, Header};
use std::vec::Vec;

/// Account and storage slots to warm up, introduced by [EIP-2930].
///
/// [EIP-2930]: https://eips.ethereum.org/EIPS/eip-2930
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AccessListItem {
    /// Account address.
    pub address: Address,
    /// Storage slots of the account.
    pub storage_keys: Vec<B256>,
}

impl AccessListItem {
    fn payload_length(&self) -> usize {
        self.address.length() + self.storage_keys.length()
    }
}

impl Encodable for AccessListItem {
    fn encode(&self, out: &mut Vec<u8>) {
        Header {
            list: true,
            payload_length: self.payload_length(),
        }
        .encode(out);
        self.address.encode(out);
        self.storage_keys.encode(out);
    }

    fn length(&self) -> usize {
        rlp::list_length(self.payload_length())
    }
}

impl Decodable for AccessListItem {
    fn decode(buf: &mut &[u8]) -> rlp::Result<Self> {
        let mut payload = Header::decode_bytes(buf, true)?;
        let item = Self {
            address: Address::decode(&mut payload)?,
            storage_keys: Vec::decode(&mut payload)?,
        };
        if !payload.is_empty() {
            return Err(rlp::Error::ListLengthMismatch {
                expected: 2,
                got: 2 + rlp::count_items(payload)?,
            });
        }
        Ok(item)
    }
}

/// Ordered list of [`AccessListItem`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AccessList(pub Vec<AccessListItem>);

impl AccessList {
    /// Iterates over the accounts and their storage slots.
    pub fn iter(&self) -> impl Iterator<Item = (Address, impl Iterator<Item = B256> + '_)> + '_ {
        self.0
            .iter()
            .map(|item| (item.address, item.storage_keys.iter().copied()))
    }

    /// Returns `true` if the list has no accounts.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<AccessListItem>> for AccessList {
    fn from(items: Vec<AccessListItem>) -> Self {
        Self(items)
    }
}

impl Encodable for AccessList {
    fn encode(&self, out: &mut Vec<u8>) {
        self.0.encode(out)
    }

    fn length(&self) -> usize {
        self.0.length()
    }
}

impl Decodable for AccessList {
    fn decode(buf: &mut &[u8]) -> rlp::Result<Self> {
        Vec::decode(buf).map(Self)
    }
}
