use primitives::{keccak256, Address};
use rlp::{Encodable, Header};
use std::vec::Vec;

/// Returns the address of a contract deployed by `sender` with `nonce`.
///
/// `keccak256(rlp([sender, nonce]))[12..]`.
pub fn create_address(sender: &Address, nonce: u64) -> Address {
    let payload_length = sender.length() + nonce.length();
    let mut out = Vec::with_capacity(rlp::list_length(payload_length));
    Header {
        list: true,
        payload_length,
    }
    .encode(&mut out);
    sender.encode(&mut out);
    nonce.encode(&mut out);
    Address::from_slice(&keccak256(&out)[12..])
}
