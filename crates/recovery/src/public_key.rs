use primitives::{keccak256, Address, B256, B512};

/// Uncompressed secp256k1 public key, the `x || y` coordinates without the SEC1 `0x04` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey(B512);

impl PublicKey {
    /// Creates a public key from its 64 coordinate bytes.
    pub const fn new(xy: B512) -> Self {
        Self(xy)
    }

    /// Parses a 65 byte SEC1 uncompressed encoding, `0x04 || x || y`.
    pub fn from_sec1_uncompressed(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0x04, xy @ ..] if xy.len() == 64 => Some(Self(B512::from_slice(xy))),
            _ => None,
        }
    }

    /// Returns the `x || y` coordinate bytes.
    pub const fn as_b512(&self) -> &B512 {
        &self.0
    }

    /// Returns the x-coordinate.
    pub fn x(&self) -> B256 {
        B256::from_slice(&self.0[..32])
    }

    /// Returns the y-coordinate.
    pub fn y(&self) -> B256 {
        B256::from_slice(&self.0[32..])
    }

    /// Returns the SEC1 uncompressed encoding, `0x04 || x || y`.
    pub fn to_sec1_uncompressed(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[0] = 0x04;
        out[1..].copy_from_slice(self.0.as_slice());
        out
    }

    /// Returns the account address of this key.
    pub fn address(&self) -> Address {
        derive_address(self)
    }
}

/// Derives the account address of a public key: the low 20 bytes of `keccak256(x || y)`.
pub fn derive_address(public_key: &PublicKey) -> Address {
    Address::from_slice(&keccak256(public_key.0)[12..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::{address, hex};

    // Public key of the private key 0x4646..46.
    const XY: [u8; 64] = hex!(
        "4bc2a31265153f07e70e0bab08724e6b85e217f8cd628ceb62974247bb493382"
        "ce28cab79ad7119ee1ad3ebcdb98a16805211530ecc6cfefa1b88e6dff99232a"
    );

    #[test]
    fn address_of_public_key() {
        let public_key = PublicKey::new(XY.into());
        assert_eq!(
            derive_address(&public_key),
            address!("9d8a62f656a8d1615c1294fd71e9cfb3e4855a4f")
        );
        assert_eq!(public_key.address(), derive_address(&public_key));
    }

    #[test]
    fn sec1_roundtrip() {
        let public_key = PublicKey::new(XY.into());
        let sec1 = public_key.to_sec1_uncompressed();
        assert_eq!(sec1[0], 0x04);
        assert_eq!(PublicKey::from_sec1_uncompressed(&sec1), Some(public_key));
        assert_eq!(PublicKey::from_sec1_uncompressed(&sec1[1..]), None);
        assert_eq!(public_key.x().as_slice(), &XY[..32]);
        assert_eq!(public_key.y().as_slice(), &XY[32..]);
    }
}
