use core::fmt;
use k256::ecdsa::SigningKey;
use primitives::{Address, Signature, B256, U256};
use recovery::PublicKey;
use transaction::Signer;

/// Signer holding a secp256k1 private key in memory.
#[derive(Clone)]
pub struct LocalSigner {
    key: SigningKey,
    address: Address,
}

impl LocalSigner {
    /// Creates a signer from a 32 byte private key.
    pub fn from_slice(key: &[u8]) -> Result<Self, LocalSignerError> {
        let key = SigningKey::from_slice(key).map_err(|_| LocalSignerError::InvalidKey)?;
        let point = key.verifying_key().to_encoded_point(false);
        let public_key = PublicKey::from_sec1_uncompressed(point.as_bytes())
            .ok_or(LocalSignerError::InvalidKey)?;
        Ok(Self {
            address: public_key.address(),
            key,
        })
    }

    /// Creates a signer from a 32 byte private key.
    pub fn from_bytes(key: &B256) -> Result<Self, LocalSignerError> {
        Self::from_slice(key.as_slice())
    }

    /// Address of the key.
    pub fn address(&self) -> Address {
        self.address
    }
}

impl fmt::Debug for LocalSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl Signer for LocalSigner {
    type Error = LocalSignerError;

    fn sign_hash(&self, hash: &B256) -> Result<Signature, Self::Error> {
        let (sig, recid) = self
            .key
            .sign_prehash_recoverable(hash.as_slice())
            .map_err(|_| LocalSignerError::Signing)?;
        let bytes = sig.to_bytes();
        Ok(Signature::new(
            U256::from_be_slice(&bytes[..32]),
            U256::from_be_slice(&bytes[32..]),
            recid.is_y_odd(),
        ))
    }
}

/// [`LocalSigner`] errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocalSignerError {
    /// Private key is zero, not below the curve order or longer than 32 bytes.
    InvalidKey,
    /// Signing failed.
    Signing,
}

impl fmt::Display for LocalSignerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey => f.write_str("invalid private key"),
            Self::Signing => f.write_str("signing failed"),
        }
    }
}

impl core::error::Error for LocalSignerError {}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::{address, keccak256, SECP256K1N};
    use recovery::recover_address;

    #[test]
    fn address_of_key() {
        let signer = LocalSigner::from_slice(&[0x46; 32]).unwrap();
        assert_eq!(
            signer.address(),
            address!("9d8a62f656a8d1615c1294fd71e9cfb3e4855a4f")
        );
    }

    #[test]
    fn invalid_keys() {
        assert_eq!(
            LocalSigner::from_slice(&[0; 32]).unwrap_err(),
            LocalSignerError::InvalidKey
        );
        assert_eq!(
            LocalSigner::from_bytes(&B256::from(SECP256K1N.to_be_bytes::<32>())).unwrap_err(),
            LocalSignerError::InvalidKey
        );
        assert_eq!(
            LocalSigner::from_slice(&[1; 33]).unwrap_err(),
            LocalSignerError::InvalidKey
        );
    }

    #[test]
    fn signature_recovers_to_signer() {
        let signer = LocalSigner::from_slice(&[0x11; 32]).unwrap();
        let hash = keccak256(b"local signer");
        let sig = signer.sign_hash(&hash).unwrap();
        assert!(!sig.has_high_s());
        assert_eq!(recover_address(&hash, &sig), Ok(signer.address()));
        // RFC 6979 nonces
        assert_eq!(signer.sign_hash(&hash), Ok(sig));
    }

    #[test]
    fn debug_hides_key() {
        let signer = LocalSigner::from_slice(&[0x46; 32]).unwrap();
        let debug = format!("{signer:?}");
        assert!(debug.contains("address"));
        assert!(!debug.contains("4646"));
    }
}
