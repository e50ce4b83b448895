//! Wallets sub-client.
//!
//! Wallet responses vary by environment and are returned as raw JSON.

use serde_json::Value;

use crate::auth::{PrivateKey, SignerKeys, Wallet};
use crate::client::SilaClient;
use crate::domain::header::HeaderBase;
use crate::domain::wallet::{GetWalletsMessage, RegisterWalletMessage, UpdateWalletMessage};
use crate::error::SdkError;
use crate::http::{ApiResponse, Transport};
use crate::operation;
use crate::shared::SearchFilters;

/// Sub-client for wallet operations.
pub struct Wallets<'a, T> {
    pub(crate) client: &'a SilaClient<T>,
}

impl<'a, T: Transport> Wallets<'a, T> {
    /// The wallet whose key signed this request.
    pub async fn get_wallet(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
    ) -> Result<ApiResponse<Value>, SdkError> {
        let body = HeaderBase::new(self.client.user_header(user_handle));
        self.client
            .call(&operation::GET_WALLET, &body, SignerKeys::user(user_key))
            .await
    }

    pub async fn get_wallets(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
        filters: Option<SearchFilters>,
    ) -> Result<ApiResponse<Value>, SdkError> {
        let body = GetWalletsMessage {
            header: self.client.user_header(user_handle),
            search_filters: filters,
        };
        self.client
            .call(&operation::GET_WALLETS, &body, SignerKeys::user(user_key))
            .await
    }

    /// Attach `wallet` to `user_handle`, proving control of its key.
    pub async fn register_wallet(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
        wallet: &Wallet,
        nickname: Option<&str>,
    ) -> Result<ApiResponse<Value>, SdkError> {
        let body = RegisterWalletMessage::for_wallet(
            self.client.user_header(user_handle),
            wallet,
            nickname.map(str::to_string),
        )?;
        self.client
            .call(&operation::REGISTER_WALLET, &body, SignerKeys::user(user_key))
            .await
    }

    /// Rename the signing wallet and/or make it the default.
    pub async fn update_wallet(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
        nickname: Option<&str>,
        default: Option<bool>,
    ) -> Result<ApiResponse<Value>, SdkError> {
        let body = UpdateWalletMessage {
            header: self.client.user_header(user_handle),
            nickname: nickname.map(str::to_string),
            default,
        };
        self.client
            .call(&operation::UPDATE_WALLET, &body, SignerKeys::user(user_key))
            .await
    }

    /// Remove the wallet whose key signed this request.
    pub async fn delete_wallet(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
    ) -> Result<ApiResponse<Value>, SdkError> {
        let body = HeaderBase::new(self.client.user_header(user_handle));
        self.client
            .call(&operation::DELETE_WALLET, &body, SignerKeys::user(user_key))
            .await
    }
}
