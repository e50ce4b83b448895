//! Wire types for transaction responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::epoch_seconds_opt;

/// Success body of `/issue_sila` and `/redeem_sila`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResponse {
    #[serde(default)]
    pub reference: Option<String>,
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub descriptor: Option<String>,
}

/// Success body of `/transfer_sila`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferResponse {
    #[serde(default)]
    pub reference: Option<String>,
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub destination_address: Option<String>,
    #[serde(default)]
    pub descriptor: Option<String>,
}

/// Success body of `/get_transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetTransactionsResponse {
    pub success: bool,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub returned_count: Option<u32>,
    #[serde(default)]
    pub total_count: Option<u32>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// One ledger transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub user_handle: String,
    pub reference_id: String,
    pub transaction_id: String,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    pub transaction_type: String,
    pub sila_amount: u64,
    #[serde(default)]
    pub bank_account_name: Option<String>,
    #[serde(default)]
    pub handle_address: Option<String>,
    pub status: String,
    #[serde(default)]
    pub usd_status: Option<String>,
    #[serde(default)]
    pub token_status: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_update: Option<String>,
    #[serde(default, with = "epoch_seconds_opt")]
    pub created_epoch: Option<DateTime<Utc>>,
    #[serde(default, with = "epoch_seconds_opt")]
    pub last_update_epoch: Option<DateTime<Utc>>,
    #[serde(default)]
    pub descriptor: Option<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

/// A status change in a transaction's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    #[serde(default)]
    pub date_epoch: Option<i64>,
    pub status: String,
    #[serde(default)]
    pub usd_status: Option<String>,
    #[serde(default)]
    pub token_status: Option<String>,
}

/// Success body of `/get_sila_balance`.
///
/// Decoded after number/bool normalization: `"123.45"` and `"true"` are
/// accepted in place of `123.45` and `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SilaBalanceResponse {
    pub success: bool,
    pub sila_balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transactions_page() {
        let r: GetTransactionsResponse = serde_json::from_str(
            r#"{"success":true,"page":1,"returned_count":1,"total_count":1,"transactions":[
                {"user_handle":"alice.silamoney.eth","reference_id":"ref","transaction_id":"tx-1",
                 "transaction_type":"issue","sila_amount":1000,"bank_account_name":"default",
                 "status":"success","usd_status":"success","token_status":"success",
                 "created":"2020-01-01T00:00:00Z","last_update":"2020-01-01T00:00:05Z",
                 "created_epoch":1577836800,"last_update_epoch":1577836805,
                 "timeline":[{"date":"2020-01-01T00:00:00Z","date_epoch":1577836800,"status":"queued"}]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(r.transactions.len(), 1);
        let tx = &r.transactions[0];
        assert_eq!(tx.sila_amount, 1000);
        assert_eq!(tx.created_epoch.unwrap().timestamp(), 1_577_836_800);
        assert_eq!(tx.timeline[0].status, "queued");
        assert!(tx.transaction_hash.is_none());
    }

    #[test]
    fn test_transaction_reencodes_epochs_as_seconds() {
        let tx: Transaction = serde_json::from_str(
            r#"{"user_handle":"alice.silamoney.eth","reference_id":"ref","transaction_id":"tx-1",
                "transaction_type":"transfer","sila_amount":50,"status":"pending",
                "created_epoch":1577836800,"last_update_epoch":1577836805}"#,
        )
        .unwrap();
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["created_epoch"], 1_577_836_800);
        assert_eq!(value["last_update_epoch"], 1_577_836_805);
        let again: Transaction = serde_json::from_value(value).unwrap();
        assert_eq!(again, tx);
    }

    #[test]
    fn test_transactions_without_timeline() {
        let r: GetTransactionsResponse =
            serde_json::from_str(r#"{"success":true,"transactions":[]}"#).unwrap();
        assert!(r.transactions.is_empty());
        assert!(r.page.is_none());
    }
}
