//! Businesses sub-client — reference lists, membership, certification.

use serde_json::Value;

use crate::auth::{PrivateKey, SignerKeys};
use crate::client::SilaClient;
use crate::domain::business::wire::{
    BusinessRolesResponse, BusinessTypesResponse, NaicsCategoriesResponse,
};
use crate::domain::business::{
    business_header, CertifyBeneficialOwnerMessage, LinkBusinessMemberMessage, MemberLink,
    MemberRole, UnlinkBusinessMemberMessage,
};
use crate::domain::header::{Header, HeaderBase};
use crate::error::SdkError;
use crate::http::{ApiResponse, Transport};
use crate::operation::{self, OperationSpec};

/// The acting user and the business, with the keys that sign for them.
#[derive(Debug, Clone, Copy)]
pub struct BusinessSigners<'k> {
    pub user_handle: &'k str,
    pub user_key: &'k PrivateKey,
    pub business_handle: &'k str,
    pub business_key: &'k PrivateKey,
}

impl<'k> BusinessSigners<'k> {
    fn keys(&self) -> SignerKeys<'k> {
        SignerKeys::user_and_business(self.user_key, self.business_key)
    }
}

/// Sub-client for business operations.
pub struct Businesses<'a, T> {
    pub(crate) client: &'a SilaClient<T>,
}

impl<'a, T: Transport> Businesses<'a, T> {
    pub async fn get_business_types(&self) -> Result<ApiResponse<BusinessTypesResponse>, SdkError> {
        self.app_only(&operation::GET_BUSINESS_TYPES).await
    }

    pub async fn get_business_roles(&self) -> Result<ApiResponse<BusinessRolesResponse>, SdkError> {
        self.app_only(&operation::GET_BUSINESS_ROLES).await
    }

    pub async fn get_naics_categories(
        &self,
    ) -> Result<ApiResponse<NaicsCategoriesResponse>, SdkError> {
        self.app_only(&operation::GET_NAICS_CATEGORIES).await
    }

    /// Give the acting user (or `link.member_handle`) a role in the business.
    pub async fn link_business_member(
        &self,
        signers: BusinessSigners<'_>,
        link: MemberLink,
    ) -> Result<ApiResponse<Value>, SdkError> {
        let body = LinkBusinessMemberMessage::new(self.header(&signers), link);
        self.client
            .call(&operation::LINK_BUSINESS_MEMBER, &body, signers.keys())
            .await
    }

    pub async fn unlink_business_member(
        &self,
        signers: BusinessSigners<'_>,
        role: Option<MemberRole>,
        role_uuid: Option<&str>,
    ) -> Result<ApiResponse<Value>, SdkError> {
        let body = UnlinkBusinessMemberMessage {
            header: self.header(&signers),
            role,
            role_uuid: role_uuid.map(str::to_string),
        };
        self.client
            .call(&operation::UNLINK_BUSINESS_MEMBER, &body, signers.keys())
            .await
    }

    /// Certify beneficial owner `member_handle`; the acting user must be an
    /// administrator.
    pub async fn certify_beneficial_owner(
        &self,
        signers: BusinessSigners<'_>,
        member_handle: &str,
        certification_token: &str,
    ) -> Result<ApiResponse<Value>, SdkError> {
        let body = CertifyBeneficialOwnerMessage {
            header: self.header(&signers),
            member_handle: member_handle.to_string(),
            certification_token: certification_token.to_string(),
        };
        self.client
            .call(&operation::CERTIFY_BENEFICIAL_OWNER, &body, signers.keys())
            .await
    }

    pub async fn certify_business(
        &self,
        signers: BusinessSigners<'_>,
    ) -> Result<ApiResponse<Value>, SdkError> {
        let body = HeaderBase::new(self.header(&signers));
        self.client
            .call(&operation::CERTIFY_BUSINESS, &body, signers.keys())
            .await
    }

    fn header(&self, signers: &BusinessSigners<'_>) -> Header {
        business_header(
            self.client.app_handle(),
            signers.user_handle,
            signers.business_handle,
        )
    }

    async fn app_only<R: serde::de::DeserializeOwned>(
        &self,
        op: &OperationSpec,
    ) -> Result<ApiResponse<R>, SdkError> {
        let body = HeaderBase::new(Header::new(self.client.app_handle()));
        self.client.call(op, &body, SignerKeys::none()).await
    }
}
