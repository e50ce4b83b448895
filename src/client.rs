//! High-level client — `SilaClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the generic call entry points, and accessor
//! methods.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::auth::{Credentials, PrivateKey, SignerKeys};
use crate::domain::account::client::Accounts;
use crate::domain::business::client::Businesses;
use crate::domain::entity::client::Entities;
use crate::domain::header::Header;
use crate::domain::transaction::client::Transactions;
use crate::domain::wallet::client::Wallets;
use crate::error::SdkError;
use crate::http::{ApiResponse, Dispatcher, SignedRequest, Transport};
use crate::network::Environment;
use crate::operation::OperationSpec;

#[cfg(feature = "http")]
use crate::http::SilaHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Accounts as AccountsClient;
pub use crate::domain::business::client::{BusinessSigners, Businesses as BusinessesClient};
pub use crate::domain::entity::client::Entities as EntitiesClient;
pub use crate::domain::transaction::client::Transactions as TransactionsClient;
pub use crate::domain::wallet::client::Wallets as WalletsClient;

/// The primary entry point for the Sila SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.entities()`, `client.transactions()`, etc.
///
/// Holds only immutable credentials and the transport; clone it freely and
/// share it across tasks.
#[derive(Debug, Clone)]
pub struct SilaClient<T> {
    pub(crate) dispatcher: Dispatcher<T>,
}

#[cfg(feature = "http")]
impl SilaClient<SilaHttp> {
    pub fn builder() -> SilaClientBuilder {
        SilaClientBuilder::default()
    }
}

impl<T: Transport> SilaClient<T> {
    pub fn new(credentials: Credentials, transport: T) -> Self {
        Self {
            dispatcher: Dispatcher::new(credentials, transport),
        }
    }

    pub fn app_handle(&self) -> &str {
        self.dispatcher.credentials().app_handle()
    }

    pub fn credentials(&self) -> &Credentials {
        self.dispatcher.credentials()
    }

    pub fn environment(&self) -> &Environment {
        self.dispatcher.credentials().environment()
    }

    pub fn transport(&self) -> &T {
        self.dispatcher.transport()
    }

    /// Fresh application-only header.
    pub fn header(&self) -> Header {
        Header::new(self.app_handle())
    }

    /// Fresh header naming `user_handle`.
    pub fn user_header(&self, user_handle: &str) -> Header {
        Header::for_user(self.app_handle(), user_handle)
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn entities(&self) -> Entities<'_, T> {
        Entities { client: self }
    }

    pub fn accounts(&self) -> Accounts<'_, T> {
        Accounts { client: self }
    }

    pub fn transactions(&self) -> Transactions<'_, T> {
        Transactions { client: self }
    }

    pub fn wallets(&self) -> Wallets<'_, T> {
        Wallets { client: self }
    }

    pub fn businesses(&self) -> Businesses<'_, T> {
        Businesses { client: self }
    }

    // ── Generic entry points ─────────────────────────────────────────────

    /// Canonicalize, sign, send and interpret one call.
    ///
    /// `R` is the success body type; pass `serde_json::Value` to keep it raw.
    pub async fn call<R, P>(
        &self,
        op: &OperationSpec,
        payload: &P,
        keys: SignerKeys<'_>,
    ) -> Result<ApiResponse<R>, SdkError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.dispatcher.call(op, None, payload, keys).await
    }

    /// [`call`](Self::call) with a query string appended to the path.
    pub async fn call_with_query<R, P>(
        &self,
        op: &OperationSpec,
        query: &str,
        payload: &P,
        keys: SignerKeys<'_>,
    ) -> Result<ApiResponse<R>, SdkError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.dispatcher.call(op, Some(query), payload, keys).await
    }

    /// Build the signed request without sending it.
    pub fn prepare<P: Serialize + ?Sized>(
        &self,
        op: &OperationSpec,
        payload: &P,
        keys: SignerKeys<'_>,
    ) -> Result<SignedRequest, SdkError> {
        self.dispatcher.prepare(op, None, payload, &keys)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct SilaClientBuilder {
    app_handle: Option<String>,
    private_key: Option<String>,
    environment: Environment,
    timeout: Duration,
}

impl Default for SilaClientBuilder {
    fn default() -> Self {
        Self {
            app_handle: None,
            private_key: None,
            environment: Environment::default(),
            timeout: Duration::from_secs(crate::network::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SilaClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_handle(mut self, handle: &str) -> Self {
        self.app_handle = Some(handle.to_string());
        self
    }

    /// Application private key as hex, with or without `0x`.
    pub fn private_key(mut self, hex_key: &str) -> Self {
        self.private_key = Some(hex_key.to_string());
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Shorthand for `environment(Environment::Custom(url))`.
    pub fn base_url(mut self, url: &str) -> Self {
        self.environment = Environment::Custom(url.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn credentials(&self) -> Result<Credentials, SdkError> {
        let app_handle = self
            .app_handle
            .as_deref()
            .filter(|h| !h.trim().is_empty())
            .ok_or_else(|| SdkError::Config("app_handle is required".to_string()))?;
        let key_hex = self
            .private_key
            .as_deref()
            .ok_or_else(|| SdkError::Config("private_key is required".to_string()))?;
        let app_key = PrivateKey::from_hex(key_hex)?;

        let base_url = self.environment.base_url();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(SdkError::Config(format!("invalid base URL: {}", base_url)));
        }

        Ok(Credentials::new(app_handle, app_key, self.environment.clone()))
    }

    /// Build a client over the default reqwest transport.
    #[cfg(feature = "http")]
    pub fn build(self) -> Result<SilaClient<SilaHttp>, SdkError> {
        let credentials = self.credentials()?;
        let http = SilaHttp::with_timeout(credentials.environment().base_url(), self.timeout)?;
        tracing::debug!(
            app_handle = credentials.app_handle(),
            environment = %credentials.environment(),
            "Built Sila client"
        );
        Ok(SilaClient::new(credentials, http))
    }

    /// Build a client over a caller-supplied transport.
    ///
    /// The timeout setting is ignored; the transport owns its own.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> Result<SilaClient<T>, SdkError> {
        Ok(SilaClient::new(self.credentials()?, transport))
    }
}
