//! Accounts sub-client — bank account linking and balances.

use crate::auth::{PrivateKey, SignerKeys};
use crate::client::SilaClient;
use crate::domain::account::wire::{
    Account, AccountBalanceResponse, LinkAccountResponse, PlaidSamedayAuthResponse,
};
use crate::domain::account::{AccountNameMessage, GetAccountsMessage, LinkAccountMessage};
use crate::error::SdkError;
use crate::http::{ApiResponse, Transport};
use crate::operation;

/// Sub-client for bank account operations.
pub struct Accounts<'a, T> {
    pub(crate) client: &'a SilaClient<T>,
}

impl<'a, T: Transport> Accounts<'a, T> {
    /// Link a bank account through a Plaid public token.
    pub async fn link_account(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
        public_token: &str,
        account_name: Option<&str>,
        selected_account_id: Option<&str>,
    ) -> Result<ApiResponse<LinkAccountResponse>, SdkError> {
        let body = LinkAccountMessage::plaid(
            self.client.user_header(user_handle),
            public_token,
            account_name.map(str::to_string),
            selected_account_id.map(str::to_string),
        );
        self.client
            .call(&operation::LINK_ACCOUNT, &body, SignerKeys::user(user_key))
            .await
    }

    /// Link a bank account with account and routing numbers.
    pub async fn link_account_direct(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
        account_number: &str,
        routing_number: &str,
        account_name: Option<&str>,
        account_type: Option<&str>,
    ) -> Result<ApiResponse<LinkAccountResponse>, SdkError> {
        let body = LinkAccountMessage::direct(
            self.client.user_header(user_handle),
            account_number,
            routing_number,
            account_name.map(str::to_string),
            account_type.map(str::to_string),
        );
        self.client
            .call(&operation::LINK_ACCOUNT, &body, SignerKeys::user(user_key))
            .await
    }

    pub async fn get_accounts(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
    ) -> Result<ApiResponse<Vec<Account>>, SdkError> {
        let body = GetAccountsMessage::new(self.client.user_header(user_handle));
        self.client
            .call(&operation::GET_ACCOUNTS, &body, SignerKeys::user(user_key))
            .await
    }

    pub async fn get_account_balance(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
        account_name: &str,
    ) -> Result<ApiResponse<AccountBalanceResponse>, SdkError> {
        let body = AccountNameMessage {
            header: self.client.user_header(user_handle),
            account_name: account_name.to_string(),
        };
        self.client
            .call(&operation::GET_ACCOUNT_BALANCE, &body, SignerKeys::user(user_key))
            .await
    }

    /// Public token for the second phase of Plaid same-day microdeposit auth.
    ///
    /// Signed by the application only.
    pub async fn plaid_sameday_auth(
        &self,
        user_handle: &str,
        account_name: &str,
    ) -> Result<ApiResponse<PlaidSamedayAuthResponse>, SdkError> {
        let body = AccountNameMessage {
            header: self.client.user_header(user_handle),
            account_name: account_name.to_string(),
        };
        self.client
            .call(&operation::PLAID_SAMEDAY_AUTH, &body, SignerKeys::none())
            .await
    }
}
