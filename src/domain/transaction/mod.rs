//! Transaction domain — issue, transfer, redeem, history, on-chain balance.
//!
//! Amounts are whole SILA units (1 SILA = 1 US cent).

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::domain::header::{Header, MessageKind};
use crate::shared::SearchFilters;

// ─── Requests ────────────────────────────────────────────────────────────────

/// Body of `/issue_sila` and `/redeem_sila`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccountMessage {
    pub header: Header,
    pub message: MessageKind,
    pub amount: u64,
    pub account_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_uuid: Option<String>,
}

impl BankAccountMessage {
    pub fn issue(header: Header, amount: u64, account_name: impl Into<String>) -> Self {
        Self::with_kind(header, MessageKind::Issue, amount, account_name)
    }

    pub fn redeem(header: Header, amount: u64, account_name: impl Into<String>) -> Self {
        Self::with_kind(header, MessageKind::Redeem, amount, account_name)
    }

    fn with_kind(header: Header, message: MessageKind, amount: u64, account_name: impl Into<String>) -> Self {
        Self {
            header,
            message,
            amount,
            account_name: account_name.into(),
            descriptor: None,
            business_uuid: None,
        }
    }
}

/// Optional fields shared by issue, redeem and transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferOptions {
    /// Free text shown on the bank statement.
    pub descriptor: Option<String>,
    pub business_uuid: Option<String>,
    /// Target one specific wallet of the destination handle, by address.
    pub destination_address: Option<String>,
    /// Target one specific wallet of the destination handle, by nickname.
    pub destination_wallet: Option<String>,
}

/// Body of `/transfer_sila`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferMessage {
    pub header: Header,
    pub message: MessageKind,
    pub amount: u64,
    pub destination_handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_wallet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_uuid: Option<String>,
}

impl TransferMessage {
    pub fn new(
        header: Header,
        destination_handle: impl Into<String>,
        amount: u64,
        options: TransferOptions,
    ) -> Self {
        Self {
            header,
            message: MessageKind::Transfer,
            amount,
            destination_handle: destination_handle.into(),
            destination_address: options.destination_address,
            destination_wallet: options.destination_wallet,
            descriptor: options.descriptor,
            business_uuid: options.business_uuid,
        }
    }
}

/// Body of `/get_transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetTransactionsMessage {
    pub header: Header,
    pub message: MessageKind,
    pub search_filters: SearchFilters,
}

impl GetTransactionsMessage {
    pub fn new(header: Header, search_filters: SearchFilters) -> Self {
        Self {
            header,
            message: MessageKind::GetTransactions,
            search_filters,
        }
    }
}

/// Body of `/get_sila_balance`. Unsigned, and carries no header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SilaBalanceMessage {
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::canonicalize;

    fn header() -> Header {
        Header::for_user("app", "alice").with_created(1).with_reference("r")
    }

    #[test]
    fn test_issue_and_redeem_kinds() {
        let issue = serde_json::to_value(BankAccountMessage::issue(header(), 1000, "default")).unwrap();
        assert_eq!(issue["message"], "issue_msg");
        assert_eq!(issue["amount"], 1000);
        assert!(issue.get("descriptor").is_none());

        let redeem = serde_json::to_value(BankAccountMessage::redeem(header(), 5, "default")).unwrap();
        assert_eq!(redeem["message"], "redeem_msg");
    }

    #[test]
    fn test_transfer_options_flatten_into_body() {
        let msg = TransferMessage::new(
            header(),
            "bob.silamoney.eth",
            250,
            TransferOptions {
                descriptor: Some("rent".into()),
                destination_wallet: Some("savings".into()),
                ..TransferOptions::default()
            },
        );
        let v = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["message"], "transfer_msg");
        assert_eq!(v["destination_handle"], "bob.silamoney.eth");
        assert_eq!(v["destination_wallet"], "savings");
        assert_eq!(v["descriptor"], "rent");
        assert!(v.get("destination_address").is_none());
    }

    #[test]
    fn test_get_transactions_body_with_empty_filters() {
        let body = canonicalize(&GetTransactionsMessage::new(header(), SearchFilters::new())).unwrap();
        assert!(body.as_str().ends_with(r#""message":"get_transactions_msg","search_filters":{}}"#));
    }

    #[test]
    fn test_sila_balance_body() {
        let body = canonicalize(&SilaBalanceMessage { address: "0xabc".into() }).unwrap();
        assert_eq!(body.as_str(), r#"{"address":"0xabc"}"#);
    }
}
