//! # Sila SDK
//!
//! A Rust client for the Sila ledger, KYC and payments API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Canonical payloads, the operation table, domain records
//! 2. **Auth** — secp256k1 keys, request signing, signature header composition
//! 3. **HTTP API** — `Transport` seam, dispatch, response interpretation, `SilaHttp`
//! 4. **High-Level Client** — `SilaClient` with nested sub-clients
//!
//! Every call runs `Built → Canonicalized → Signed → Sent → Interpreted`.
//! The bytes that are signed are the bytes that are sent.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sila_sdk::prelude::*;
//!
//! let client = SilaClient::builder()
//!     .app_handle("app.silamoney.eth")
//!     .private_key(&app_key_hex)
//!     .environment(Environment::Sandbox)
//!     .build()?;
//!
//! let resp = client.entities().check_handle("alice.silamoney.eth").await?;
//! let user_key = PrivateKey::from_hex(&user_key_hex)?;
//! let accounts = client.accounts().get_accounts("alice.silamoney.eth", &user_key).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared request shapes and serde helpers.
pub mod shared;

/// Canonical request encoding.
pub mod canonical;

/// Static operation table.
pub mod operation;

/// Domain modules (vertical slices): request records, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Keys, signing, signature headers, wallets.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Transport seam, dispatch, response interpretation.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `SilaClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::SearchFilters;

    // Core
    pub use crate::canonical::{canonicalize, CanonicalPayload};
    pub use crate::operation::{OperationSpec, ResultShape};

    // Domain types — request header
    pub use crate::domain::header::{Header, HeaderBase, HeaderMessage, MessageKind};
    pub use crate::domain::BaseResponse;

    // Domain types — entity
    pub use crate::domain::entity::{BusinessUser, EntityType, Pagination, PostalAddress, User};

    // Domain types — account
    pub use crate::domain::account::wire::{
        Account, AccountBalanceResponse, LinkAccountResponse, PlaidSamedayAuthResponse,
    };

    // Domain types — transaction
    pub use crate::domain::transaction::wire::{
        GetTransactionsResponse, OperationResponse, SilaBalanceResponse, TimelineEntry,
        Transaction, TransferResponse,
    };
    pub use crate::domain::transaction::TransferOptions;

    // Domain types — business
    pub use crate::domain::business::wire::{
        BusinessRolesResponse, BusinessTypesResponse, NaicsCategoriesResponse,
    };
    pub use crate::domain::business::{MemberLink, MemberRole};

    // Errors
    pub use crate::error::{SdkError, SigningError, TransportError};

    // Network
    pub use crate::network::{Environment, PRODUCTION_API_URL, SANDBOX_API_URL};

    // Auth
    pub use crate::auth::{Credentials, PrivateKey, SignerKeys, SignerRole, Signers, Wallet};

    // HTTP
    pub use crate::http::{
        ApiResponse, ErrorResponse, FailureKind, RawResponse, ResponseData, SignedRequest,
        Transport,
    };
    #[cfg(feature = "http")]
    pub use crate::http::SilaHttp;

    // Client + sub-clients
    pub use crate::client::{
        AccountsClient, BusinessSigners, BusinessesClient, EntitiesClient, SilaClient,
        SilaClientBuilder, TransactionsClient, WalletsClient,
    };
}
