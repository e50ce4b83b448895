//! Wallet helpers — key generation and ownership proofs for `register_wallet`.

use super::{signer, PrivateKey};
use crate::error::SigningError;

/// A key pair together with its derived blockchain address.
#[derive(Debug, Clone)]
pub struct Wallet {
    key: PrivateKey,
    address: String,
}

impl Wallet {
    /// Generate a new random wallet.
    pub fn generate() -> Self {
        Self::from_key(PrivateKey::random())
    }

    pub fn from_key(key: PrivateKey) -> Self {
        let address = key.address();
        Self { key, address }
    }

    pub fn from_hex(hex_key: &str) -> Result<Self, SigningError> {
        Ok(Self::from_key(PrivateKey::from_hex(hex_key)?))
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.key
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Signature of the wallet's own address, proving control of the key.
    ///
    /// Sent as `wallet_verification_signature` when registering the wallet.
    pub fn verification_signature(&self) -> Result<String, SigningError> {
        signer::sign(self.address.as_bytes(), &self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_wallets_differ() {
        let a = Wallet::generate();
        let b = Wallet::generate();
        assert_ne!(a.address(), b.address());
        assert_eq!(a.address().len(), 42);
        assert!(a.address().starts_with("0x"));
    }

    #[test]
    fn test_verification_signature_recovers_wallet_address() {
        let wallet = Wallet::generate();
        let sig = wallet.verification_signature().unwrap();
        assert!(signer::verify(wallet.address().as_bytes(), &sig, wallet.address()).unwrap());
    }

    #[test]
    fn test_from_hex_round_trip() {
        let wallet = Wallet::generate();
        let restored = Wallet::from_hex(&wallet.private_key().to_hex()).unwrap();
        assert_eq!(restored.address(), wallet.address());
    }
}
