//! ECDSA secp256k1 signing over arbitrary bytes.
//!
//! The message is hashed with keccak-256 and signed with a deterministic
//! (RFC 6979) low-S nonce. Signatures are 65 bytes `r || s || v`, hex encoded,
//! with `v = recovery_id + 27` so the service can recover the signer address.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use sha3::{Digest, Keccak256};

use super::PrivateKey;
use crate::error::SigningError;

/// Offset added to the recovery id in the trailing signature byte.
const RECOVERY_OFFSET: u8 = 27;

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Sign `message` with `key`, returning 130 lowercase hex chars.
pub fn sign(message: &[u8], key: &PrivateKey) -> Result<String, SigningError> {
    let digest = keccak256(message);
    let (signature, recovery_id): (Signature, RecoveryId) = key
        .signing_key()
        .sign_prehash_recoverable(&digest)
        .map_err(|e| SigningError::Ecdsa(e.to_string()))?;

    let mut bytes = signature.to_bytes().to_vec();
    bytes.push(recovery_id.to_byte() + RECOVERY_OFFSET);
    Ok(hex::encode(bytes))
}

/// Recover the address that produced `signature_hex` over `message`.
pub fn recover_address(message: &[u8], signature_hex: &str) -> Result<String, SigningError> {
    let stripped = signature_hex.strip_prefix("0x").unwrap_or(signature_hex);
    let bytes =
        hex::decode(stripped).map_err(|e| SigningError::MalformedSignature(e.to_string()))?;
    if bytes.len() != 65 {
        return Err(SigningError::MalformedSignature(format!(
            "expected 65 bytes, got {}",
            bytes.len()
        )));
    }

    let signature = Signature::from_slice(&bytes[..64])
        .map_err(|e| SigningError::MalformedSignature(e.to_string()))?;
    let v = bytes[64];
    let v = if v >= RECOVERY_OFFSET { v - RECOVERY_OFFSET } else { v };
    let recovery_id = RecoveryId::from_byte(v)
        .ok_or_else(|| SigningError::MalformedSignature(format!("bad recovery id {}", v)))?;

    let digest = keccak256(message);
    let key = VerifyingKey::recover_from_prehash(&digest, &signature, recovery_id)
        .map_err(|e| SigningError::Ecdsa(e.to_string()))?;
    Ok(address_of(&key))
}

/// Check that `signature_hex` over `message` was produced by `address`.
///
/// Address comparison is case-insensitive, so checksummed input is accepted.
pub fn verify(message: &[u8], signature_hex: &str, address: &str) -> Result<bool, SigningError> {
    let recovered = recover_address(message, signature_hex)?;
    Ok(recovered.eq_ignore_ascii_case(address))
}

pub(crate) fn address_of(key: &VerifyingKey) -> String {
    let point = key.to_encoded_point(false);
    // skip the 0x04 SEC1 tag
    let hash = keccak256(&point.as_bytes()[1..]);
    format!("0x{}", hex::encode(&hash[12..]))
}
