//! Bank account domain — linking (Plaid or direct), listing, balances.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::domain::header::{Header, MessageKind};

// ─── Requests ────────────────────────────────────────────────────────────────

/// Body of `/link_account`.
///
/// Either the Plaid fields (`public_token`, optional `selected_account_id`) or
/// the direct fields (`account_number`, `routing_number`) are set, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAccountMessage {
    pub header: Header,
    pub message: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

impl LinkAccountMessage {
    /// Link through a Plaid public token.
    pub fn plaid(
        header: Header,
        public_token: impl Into<String>,
        account_name: Option<String>,
        selected_account_id: Option<String>,
    ) -> Self {
        Self {
            header,
            message: MessageKind::LinkAccount,
            account_name,
            public_token: Some(public_token.into()),
            selected_account_id,
            account_number: None,
            routing_number: None,
            account_type: None,
        }
    }

    /// Link with raw account and routing numbers.
    pub fn direct(
        header: Header,
        account_number: impl Into<String>,
        routing_number: impl Into<String>,
        account_name: Option<String>,
        account_type: Option<String>,
    ) -> Self {
        Self {
            header,
            message: MessageKind::LinkAccount,
            account_name,
            public_token: None,
            selected_account_id: None,
            account_number: Some(account_number.into()),
            routing_number: Some(routing_number.into()),
            account_type,
        }
    }
}

/// Body of `/get_accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAccountsMessage {
    pub header: Header,
    pub message: MessageKind,
}

impl GetAccountsMessage {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            message: MessageKind::GetAccounts,
        }
    }
}

/// Body of `/get_account_balance` and `/plaid_sameday_auth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountNameMessage {
    pub header: Header,
    pub account_name: String,
}
