//! Request dispatch — canonicalize, sign, send, interpret.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::{compose_headers, Credentials, SignerKeys};
use crate::canonical::canonicalize;
use crate::error::SdkError;
use crate::http::response::{interpret, ApiResponse};
use crate::http::{SignedRequest, Transport};
use crate::operation::OperationSpec;

/// Content type of every request body.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Drives one call through `Built → Canonicalized → Signed → Sent → Interpreted`.
///
/// Holds nothing but immutable credentials and the transport, so a shared
/// reference can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct Dispatcher<T> {
    credentials: Credentials,
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(credentials: Credentials, transport: T) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Canonicalize and sign `payload` for `op`.
    ///
    /// Synchronous: the returned request carries every required signature.
    pub fn prepare<P: Serialize + ?Sized>(
        &self,
        op: &OperationSpec,
        query: Option<&str>,
        payload: &P,
        keys: &SignerKeys<'_>,
    ) -> Result<SignedRequest, SdkError> {
        let body = canonicalize(payload)?;
        let signatures = compose_headers(&body, op.signers, &self.credentials, keys)?;

        let mut headers = Vec::with_capacity(1 + signatures.len());
        headers.push(("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()));
        headers.extend(
            signatures
                .into_iter()
                .map(|(name, value)| (name.to_string(), value)),
        );

        let path = match query {
            Some(q) if !q.is_empty() => format!("{}?{}", op.path, q.trim_start_matches('?')),
            _ => op.path.to_string(),
        };

        Ok(SignedRequest {
            path,
            headers,
            body,
        })
    }

    /// Run one call end to end.
    pub async fn call<R, P>(
        &self,
        op: &OperationSpec,
        query: Option<&str>,
        payload: &P,
        keys: SignerKeys<'_>,
    ) -> Result<ApiResponse<R>, SdkError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let request = self.prepare(op, query, payload, &keys)?;

        let signed_by: Vec<&str> = op.signers.roles().map(|role| role.as_str()).collect();
        tracing::debug!(
            operation = op.name,
            path = %request.path,
            signers = ?signed_by,
            body_len = request.body.len(),
            "Dispatching request"
        );

        let raw = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(operation = op.name, error = %e, "Transport failure");
            SdkError::from(e)
        })?;

        interpret(raw, op.shape)
    }
}
