use crate::U256;

/// Order of the secp256k1 curve group, `n`.
///
/// Valid signature scalars `r` and `s` are in the range `[1, n)`.
pub const SECP256K1N: U256 = U256::from_limbs([
    0xBFD2_5E8C_D036_4141,
    0xBAAE_DCE6_AF48_A03B,
    0xFFFF_FFFF_FFFF_FFFE,
    0xFFFF_FFFF_FFFF_FFFF,
]);

/// `n / 2` for the secp256k1 curve. Signatures with `s` above this value are "high-s".
pub const SECP256K1N_HALF: U256 = U256::from_limbs([
    0xDFE9_2F46_681B_20A0,
    0x5D57_6E73_57A4_501D,
    0xFFFF_FFFF_FFFF_FFFF,
    0x7FFF_FFFF_FFFF_FFFF,
]);

/// Offset added to the y-parity to form `v` of a pre-EIP-155 legacy signature.
pub const LEGACY_V_OFFSET: u64 = 27;

/// Offset used by [EIP-155] replay protected `v`: `v = parity + 35 + 2 * chain_id`.
///
/// [EIP-155]: https://eips.ethereum.org/EIPS/eip-155
pub const EIP155_V_OFFSET: u64 = 35;
