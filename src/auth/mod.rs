//! Authentication — key material, signer roles, signatures, header composition.
//!
//! ## Signing Model
//!
//! Every signed request carries up to three independent signatures over the
//! same canonical body bytes:
//!
//! - **auth** — the application itself, signed with the key held in [`Credentials`].
//! - **user** — the end-user entity named in the request header.
//! - **business** — the business entity, for membership and certification calls.
//!
//! Which roles a call needs is fixed per operation (see [`crate::operation`]).
//! User and business keys are supplied per call through [`SignerKeys`]; the
//! client never stores them.

pub mod headers;
pub mod signer;
pub mod wallet;

use k256::ecdsa::SigningKey;

use crate::error::SigningError;
use crate::network::Environment;

pub use headers::{compose_headers, SignatureSet};
pub use signer::{sign, verify};
pub use wallet::Wallet;

/// Request header carrying the application signature.
pub const AUTH_SIGNATURE: &str = "authsignature";

/// Request header carrying the end-user signature.
pub const USER_SIGNATURE: &str = "usersignature";

/// Request header carrying the business-entity signature.
pub const BUSINESS_SIGNATURE: &str = "businesssignature";

// ============================================================================
// Signer roles
// ============================================================================

/// One party contributing a signature to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignerRole {
    Auth,
    User,
    Business,
}

impl SignerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::User => "user",
            Self::Business => "business",
        }
    }

    /// The HTTP header this role's signature travels in.
    pub fn header_name(&self) -> &'static str {
        match self {
            Self::Auth => AUTH_SIGNATURE,
            Self::User => USER_SIGNATURE,
            Self::Business => BUSINESS_SIGNATURE,
        }
    }
}

impl std::fmt::Display for SignerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The set of roles an operation must be signed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signers {
    pub auth: bool,
    pub user: bool,
    pub business: bool,
}

impl Signers {
    /// Unsigned request.
    pub const NONE: Signers = Signers {
        auth: false,
        user: false,
        business: false,
    };

    /// Application signature only.
    pub const AUTH: Signers = Signers {
        auth: true,
        user: false,
        business: false,
    };

    /// Application and end-user signatures.
    pub const AUTH_USER: Signers = Signers {
        auth: true,
        user: true,
        business: false,
    };

    /// Application, end-user and business signatures.
    pub const AUTH_USER_BUSINESS: Signers = Signers {
        auth: true,
        user: true,
        business: true,
    };

    pub fn requires(&self, role: SignerRole) -> bool {
        match role {
            SignerRole::Auth => self.auth,
            SignerRole::User => self.user,
            SignerRole::Business => self.business,
        }
    }

    /// Required roles in header order: auth, user, business.
    pub fn roles(&self) -> impl Iterator<Item = SignerRole> + '_ {
        [SignerRole::Auth, SignerRole::User, SignerRole::Business]
            .into_iter()
            .filter(move |role| self.requires(*role))
    }

    pub fn is_empty(&self) -> bool {
        !(self.auth || self.user || self.business)
    }
}

// ============================================================================
// Key material
// ============================================================================

/// A secp256k1 private key.
///
/// Parsed once from hex; `Debug` never prints the scalar.
#[derive(Clone)]
pub struct PrivateKey {
    key: SigningKey,
}

impl PrivateKey {
    /// Parse a 32-byte key from hex, with or without a `0x` prefix.
    pub fn from_hex(hex_key: &str) -> Result<Self, SigningError> {
        let trimmed = hex_key.trim();
        let stripped = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let bytes = hex::decode(stripped).map_err(|e| SigningError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SigningError> {
        if bytes.len() != 32 {
            return Err(SigningError::InvalidLength(bytes.len()));
        }
        let key = SigningKey::from_slice(bytes).map_err(|_| SigningError::InvalidKey)?;
        Ok(Self { key })
    }

    /// Generate a fresh random key.
    pub fn random() -> Self {
        Self {
            key: SigningKey::random(&mut rand::rngs::OsRng),
        }
    }

    /// Lowercase hex of the raw scalar, without `0x`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.key.to_bytes())
    }

    /// Ethereum-style address of this key (`0x` + 40 lowercase hex chars).
    pub fn address(&self) -> String {
        signer::address_of(self.key.verifying_key())
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.key
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

impl std::str::FromStr for PrivateKey {
    type Err = SigningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ============================================================================
// Credentials
// ============================================================================

/// Long-lived application credentials. Immutable once built.
#[derive(Debug, Clone)]
pub struct Credentials {
    app_handle: String,
    app_key: PrivateKey,
    environment: Environment,
}

impl Credentials {
    pub fn new(app_handle: impl Into<String>, app_key: PrivateKey, environment: Environment) -> Self {
        Self {
            app_handle: app_handle.into(),
            app_key,
            environment,
        }
    }

    /// Parse the app key from hex.
    pub fn from_hex_key(
        app_handle: impl Into<String>,
        app_key_hex: &str,
        environment: Environment,
    ) -> Result<Self, SigningError> {
        Ok(Self::new(app_handle, PrivateKey::from_hex(app_key_hex)?, environment))
    }

    pub fn app_handle(&self) -> &str {
        &self.app_handle
    }

    pub fn app_key(&self) -> &PrivateKey {
        &self.app_key
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }
}

/// Per-call keys for the user and business roles.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignerKeys<'a> {
    pub user: Option<&'a PrivateKey>,
    pub business: Option<&'a PrivateKey>,
}

impl<'a> SignerKeys<'a> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn user(user: &'a PrivateKey) -> Self {
        Self {
            user: Some(user),
            business: None,
        }
    }

    pub fn user_and_business(user: &'a PrivateKey, business: &'a PrivateKey) -> Self {
        Self {
            user: Some(user),
            business: Some(business),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_HEX: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    #[test]
    fn test_private_key_accepts_0x_prefix() {
        let plain = PrivateKey::from_hex(KEY_HEX).unwrap();
        let prefixed = PrivateKey::from_hex(&format!("0x{}", KEY_HEX)).unwrap();
        assert_eq!(plain.to_hex(), prefixed.to_hex());
        assert_eq!(plain.to_hex(), KEY_HEX);
    }

    #[test]
    fn test_private_key_rejects_bad_input() {
        assert!(matches!(
            PrivateKey::from_hex("not-hex"),
            Err(SigningError::InvalidHex(_))
        ));
        assert_eq!(
            PrivateKey::from_hex("abcd").unwrap_err(),
            SigningError::InvalidLength(2)
        );
        let zero = "00".repeat(32);
        assert_eq!(PrivateKey::from_hex(&zero).unwrap_err(), SigningError::InvalidKey);
    }

    #[test]
    fn test_private_key_debug_hides_scalar() {
        let key = PrivateKey::from_hex(KEY_HEX).unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains(KEY_HEX));
        assert!(debug.contains("address"));
    }

    #[test]
    fn test_signers_roles_in_header_order() {
        let roles: Vec<_> = Signers::AUTH_USER_BUSINESS.roles().collect();
        assert_eq!(roles, vec![SignerRole::Auth, SignerRole::User, SignerRole::Business]);
        assert_eq!(Signers::AUTH_USER.roles().count(), 2);
        assert!(Signers::NONE.is_empty());
        assert!(!Signers::AUTH.requires(SignerRole::User));
    }

    #[test]
    fn test_role_header_names() {
        assert_eq!(SignerRole::Auth.header_name(), "authsignature");
        assert_eq!(SignerRole::User.header_name(), "usersignature");
        assert_eq!(SignerRole::Business.header_name(), "businesssignature");
    }
}
