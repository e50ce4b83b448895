//! The `header` object embedded in every signed request body.

use serde::{Deserialize, Serialize};

use crate::network::{API_VERSION, CRYPTO_CODE};

/// Identifies the caller and freshness of a request.
///
/// The service rejects bodies whose `created` epoch is too old, so a header
/// should be built right before the call it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Epoch seconds.
    pub created: i64,
    pub auth_handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_handle: Option<String>,
    pub version: String,
    pub crypto: String,
    pub reference: String,
}

impl Header {
    /// Header for an application-only request, stamped now with a fresh reference.
    pub fn new(auth_handle: impl Into<String>) -> Self {
        Self {
            created: chrono::Utc::now().timestamp(),
            auth_handle: auth_handle.into(),
            user_handle: None,
            business_handle: None,
            version: API_VERSION.to_string(),
            crypto: CRYPTO_CODE.to_string(),
            reference: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Header naming an end user.
    pub fn for_user(auth_handle: impl Into<String>, user_handle: impl Into<String>) -> Self {
        Self::new(auth_handle).with_user(user_handle)
    }

    pub fn with_user(mut self, user_handle: impl Into<String>) -> Self {
        self.user_handle = Some(user_handle.into());
        self
    }

    pub fn with_business(mut self, business_handle: impl Into<String>) -> Self {
        self.business_handle = Some(business_handle.into());
        self
    }

    /// Override the creation timestamp (epoch seconds).
    pub fn with_created(mut self, created: i64) -> Self {
        self.created = created;
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }
}

/// Value of the top-level `message` field some requests carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    #[serde(rename = "header_msg")]
    Header,
    #[serde(rename = "entity_msg")]
    Entity,
    #[serde(rename = "link_account_msg")]
    LinkAccount,
    #[serde(rename = "get_accounts_msg")]
    GetAccounts,
    #[serde(rename = "issue_msg")]
    Issue,
    #[serde(rename = "redeem_msg")]
    Redeem,
    #[serde(rename = "transfer_msg")]
    Transfer,
    #[serde(rename = "get_transactions_msg")]
    GetTransactions,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header_msg",
            Self::Entity => "entity_msg",
            Self::LinkAccount => "link_account_msg",
            Self::GetAccounts => "get_accounts_msg",
            Self::Issue => "issue_msg",
            Self::Redeem => "redeem_msg",
            Self::Transfer => "transfer_msg",
            Self::GetTransactions => "get_transactions_msg",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A body made of the header alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderBase {
    pub header: Header,
}

impl HeaderBase {
    pub fn new(header: Header) -> Self {
        Self { header }
    }
}

/// A header plus `"message": "header_msg"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMessage {
    pub header: Header,
    pub message: MessageKind,
}

impl HeaderMessage {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            message: MessageKind::Header,
        }
    }
}
