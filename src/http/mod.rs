//! HTTP layer — transport seam, request dispatch and response interpretation.
//!
//! ```text
//! payload ──canonicalize──▶ bytes ──sign──▶ SignedRequest ──Transport::send──▶ RawResponse ──interpret──▶ ApiResponse<T>
//! ```
//!
//! Everything left of `Transport::send` is synchronous; the send is the only
//! await point in a call.

#[cfg(feature = "http")]
pub mod client;
pub mod dispatch;
pub mod response;

use std::collections::BTreeMap;
use std::future::Future;

use crate::canonical::CanonicalPayload;
use crate::error::TransportError;

#[cfg(feature = "http")]
pub use client::SilaHttp;
pub use dispatch::Dispatcher;
pub use response::{interpret, ApiResponse, ErrorResponse, FailureKind, ResponseData};

/// A fully signed request, ready for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Path relative to the environment base URL, including any query string.
    pub path: String,
    /// Header name/value pairs: `Content-Type` plus the signature headers.
    pub headers: Vec<(String, String)>,
    /// The exact bytes that were signed.
    pub body: CanonicalPayload,
}

impl SignedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A response as received, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawResponse {
    pub status: u16,
    /// Lowercased header names; repeated headers joined with `", "`.
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.to_string());
        self
    }
}

/// Sends signed requests somewhere and returns what came back.
///
/// Implementations must transmit `request.body` byte-for-byte. Retries,
/// queuing and caching are not part of this contract.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: SignedRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}
