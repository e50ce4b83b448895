//! Unified SDK error types.
//!
//! Only infrastructural failures are errors. Business outcomes (400, 401/403,
//! 5xx) come back as [`ResponseData::Failure`](crate::http::ResponseData) values.

use thiserror::Error;

use crate::auth::SignerRole;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    #[error("Missing {role} private key for a request that requires a {role} signature")]
    MissingCredential { role: SignerRole },

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Failed to decode {status} response: {source}; body: {body}")]
    Deserialization {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Key material and signature errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SigningError {
    #[error("Private key is not valid hex: {0}")]
    InvalidHex(String),

    #[error("Private key must be 32 bytes, got {0}")]
    InvalidLength(usize),

    #[error("Private key is not a valid secp256k1 scalar")]
    InvalidKey,

    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    #[error("ECDSA operation failed: {0}")]
    Ecdsa(String),
}

/// Network-level failures. Never mapped into the business-error shape.
#[derive(Error, Debug)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[cfg(feature = "http")]
    #[error("Connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid request header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("{0}")]
    Other(String),
}
