//! Entities sub-client — handle checks, registration, KYC, entity lookups.

use crate::auth::{PrivateKey, SignerKeys};
use crate::client::SilaClient;
use crate::domain::entity::{
    BusinessUser, EntityMessage, EntityType, GetEntitiesMessage, KycMessage, Pagination, User,
};
use crate::domain::header::{Header, HeaderBase, HeaderMessage, MessageKind};
use crate::domain::BaseResponse;
use crate::error::SdkError;
use crate::http::{ApiResponse, Transport};
use crate::operation;

/// Sub-client for entity operations.
pub struct Entities<'a, T> {
    pub(crate) client: &'a SilaClient<T>,
}

impl<'a, T: Transport> Entities<'a, T> {
    /// Check whether `handle` is still available.
    pub async fn check_handle(&self, handle: &str) -> Result<ApiResponse<BaseResponse>, SdkError> {
        let body = HeaderMessage::new(self.client.user_header(handle));
        self.client
            .call(&operation::CHECK_HANDLE, &body, SignerKeys::none())
            .await
    }

    /// Register an individual end user.
    pub async fn register(&self, user: &User) -> Result<ApiResponse<BaseResponse>, SdkError> {
        let body = EntityMessage::individual(self.client.app_handle(), user);
        self.client
            .call(&operation::REGISTER, &body, SignerKeys::none())
            .await
    }

    /// Register a business entity.
    pub async fn register_business(
        &self,
        business: &BusinessUser,
    ) -> Result<ApiResponse<BaseResponse>, SdkError> {
        let body = EntityMessage::business(self.client.app_handle(), business);
        self.client
            .call(&operation::REGISTER_BUSINESS, &body, SignerKeys::none())
            .await
    }

    /// Start verification for a registered entity.
    pub async fn request_kyc(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
        kyc_level: Option<&str>,
    ) -> Result<ApiResponse<BaseResponse>, SdkError> {
        let body = KycMessage {
            header: self.client.user_header(user_handle),
            message: MessageKind::Header,
            kyc_level: kyc_level.filter(|l| !l.is_empty()).map(str::to_string),
        };
        self.client
            .call(&operation::REQUEST_KYC, &body, SignerKeys::user(user_key))
            .await
    }

    pub async fn check_kyc(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
    ) -> Result<ApiResponse<BaseResponse>, SdkError> {
        let body = HeaderMessage::new(self.client.user_header(user_handle));
        self.client
            .call(&operation::CHECK_KYC, &body, SignerKeys::user(user_key))
            .await
    }

    /// Full entity record for `user_handle`.
    pub async fn get_entity(
        &self,
        user_handle: &str,
        user_key: &PrivateKey,
    ) -> Result<ApiResponse<serde_json::Value>, SdkError> {
        let body = HeaderBase::new(self.client.user_header(user_handle));
        self.client
            .call(&operation::GET_ENTITY, &body, SignerKeys::user(user_key))
            .await
    }

    /// Every entity registered under the app handle.
    pub async fn get_entities(
        &self,
        entity_type: Option<EntityType>,
        pagination: Pagination,
    ) -> Result<ApiResponse<serde_json::Value>, SdkError> {
        let body = GetEntitiesMessage {
            header: Header::new(self.client.app_handle()),
            entity_type,
        };
        match pagination.to_query() {
            Some(query) => {
                self.client
                    .call_with_query(&operation::GET_ENTITIES, &query, &body, SignerKeys::none())
                    .await
            }
            None => {
                self.client
                    .call(&operation::GET_ENTITIES, &body, SignerKeys::none())
                    .await
            }
        }
    }
}
