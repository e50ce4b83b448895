//! Transactions sub-client — issue, transfer, redeem, history, SILA balance.

use crate::auth::{PrivateKey, SignerKeys};
use crate::client::SilaClient;
use crate::domain::transaction::wire::{
    GetTransactionsResponse, OperationResponse, SilaBalanceResponse, TransferResponse,
};
use crate::domain::transaction::{
    BankAccountMessage, GetTransactionsMessage, SilaBalanceMessage, TransferMessage,
    TransferOptions,
};
use crate::error::SdkError;
use crate::http::{ApiResponse, Transport};
use crate::operation;
use crate::shared::SearchFilters;

/// Sub-client for transaction operations.
pub struct Transactions<'a, T> {
    pub(crate) client: &'a SilaClient<T>,
}

impl<'a, T: Transport> Transactions<'a, T> {
    /// Debit `account_name` and mint `amount` SILA to the user's address.
    pub async fn issue_sila(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
        amount: u64,
        account_name: &str,
        options: TransferOptions,
    ) -> Result<ApiResponse<OperationResponse>, SdkError> {
        let mut body =
            BankAccountMessage::issue(self.client.user_header(user_handle), amount, account_name);
        body.descriptor = options.descriptor;
        body.business_uuid = options.business_uuid;
        self.client
            .call(&operation::ISSUE_SILA, &body, SignerKeys::user(user_key))
            .await
    }

    /// Move `amount` SILA from `user_handle` to `destination_handle`.
    pub async fn transfer_sila(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
        destination_handle: &str,
        amount: u64,
        options: TransferOptions,
    ) -> Result<ApiResponse<TransferResponse>, SdkError> {
        let body = TransferMessage::new(
            self.client.user_header(user_handle),
            destination_handle,
            amount,
            options,
        );
        self.client
            .call(&operation::TRANSFER_SILA, &body, SignerKeys::user(user_key))
            .await
    }

    /// Burn `amount` SILA and credit `account_name`.
    pub async fn redeem_sila(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
        amount: u64,
        account_name: &str,
        options: TransferOptions,
    ) -> Result<ApiResponse<OperationResponse>, SdkError> {
        let mut body =
            BankAccountMessage::redeem(self.client.user_header(user_handle), amount, account_name);
        body.descriptor = options.descriptor;
        body.business_uuid = options.business_uuid;
        self.client
            .call(&operation::REDEEM_SILA, &body, SignerKeys::user(user_key))
            .await
    }

    pub async fn get_transactions(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
        filters: SearchFilters,
    ) -> Result<ApiResponse<GetTransactionsResponse>, SdkError> {
        let body = GetTransactionsMessage::new(self.client.user_header(user_handle), filters);
        self.client
            .call(&operation::GET_TRANSACTIONS, &body, SignerKeys::user(user_key))
            .await
    }

    /// SILA balance held at a blockchain address. Unsigned.
    pub async fn get_sila_balance(
        &self,
        address: &str,
    ) -> Result<ApiResponse<SilaBalanceResponse>, SdkError> {
        let body = SilaBalanceMessage {
            address: address.to_string(),
        };
        self.client
            .call(&operation::GET_SILA_BALANCE, &body, SignerKeys::none())
            .await
    }
}
