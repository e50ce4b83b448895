//! Wallet domain — additional blockchain addresses attached to a user handle.

pub mod client;

use serde::{Deserialize, Serialize};

use crate::auth::Wallet;
use crate::domain::header::Header;
use crate::error::SigningError;
use crate::network::CRYPTO_CODE;
use crate::shared::SearchFilters;

/// The `wallet` object of `/register_wallet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletEntry {
    pub blockchain_address: String,
    pub blockchain_network: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl WalletEntry {
    pub fn new(blockchain_address: impl Into<String>, nickname: Option<String>) -> Self {
        Self {
            blockchain_address: blockchain_address.into(),
            blockchain_network: CRYPTO_CODE.to_string(),
            nickname,
        }
    }
}

/// Body of `/register_wallet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterWalletMessage {
    pub header: Header,
    pub wallet: WalletEntry,
    pub wallet_verification_signature: String,
}

impl RegisterWalletMessage {
    /// Build the body for `wallet`, signing its address with its own key.
    pub fn for_wallet(
        header: Header,
        wallet: &Wallet,
        nickname: Option<String>,
    ) -> Result<Self, SigningError> {
        Ok(Self {
            header,
            wallet: WalletEntry::new(wallet.address(), nickname),
            wallet_verification_signature: wallet.verification_signature()?,
        })
    }
}

/// Body of `/update_wallet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateWalletMessage {
    pub header: Header,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

/// Body of `/get_wallets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetWalletsMessage {
    pub header: Header,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_filters: Option<SearchFilters>,
}
