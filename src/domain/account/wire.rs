//! Wire types for bank account responses.

use serde::{Deserialize, Serialize};

/// Success body of `/link_account`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkAccountResponse {
    #[serde(default)]
    pub reference: Option<String>,
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub match_score: Option<f64>,
}

/// One linked bank account, as listed by `/get_accounts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_number: String,
    #[serde(default)]
    pub routing_number: Option<String>,
    pub account_name: String,
    pub account_type: String,
    pub account_status: String,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub account_link_status: Option<String>,
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub account_owner_name: Option<String>,
}

/// Success body of `/get_account_balance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalanceResponse {
    pub success: bool,
    pub available_balance: f64,
    pub current_balance: f64,
    #[serde(default)]
    pub masked_account_number: Option<String>,
    #[serde(default)]
    pub routing_number: Option<String>,
    pub account_name: String,
}

/// Success body of `/plaid_sameday_auth`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaidSamedayAuthResponse {
    #[serde(default)]
    pub reference: Option<String>,
    pub message: String,
    pub status: String,
    pub public_token: String,
}
