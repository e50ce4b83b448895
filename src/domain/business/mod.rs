//! Business domain — reference lists, membership and certification.
//!
//! Membership and certification calls name three parties in the header (app,
//! acting user, business) and carry all three signatures.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::domain::header::Header;
use crate::shared::serde_util::finite_opt;

/// Role a user holds in a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Administrator,
    ControllingOfficer,
    BeneficialOwner,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::ControllingOfficer => "controlling_officer",
            Self::BeneficialOwner => "beneficial_owner",
        }
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Header for a call acting on `business_handle` as `user_handle`.
pub fn business_header(app_handle: &str, user_handle: &str, business_handle: &str) -> Header {
    Header::for_user(app_handle, user_handle).with_business(business_handle)
}

/// Options for `/link_business_member`.
///
/// One of `role` or `role_uuid` is required by the service; `ownership_stake`
/// is required for beneficial owners.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberLink {
    pub role: Option<MemberRole>,
    pub role_uuid: Option<String>,
    /// Fraction in `0.0..=1.0`.
    pub ownership_stake: Option<f64>,
    /// Member to link when the acting user is an administrator.
    pub member_handle: Option<String>,
    pub details: Option<String>,
}

impl MemberLink {
    pub fn role(role: MemberRole) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }

    pub fn beneficial_owner(ownership_stake: f64) -> Self {
        Self {
            role: Some(MemberRole::BeneficialOwner),
            ownership_stake: Some(ownership_stake),
            ..Self::default()
        }
    }

    pub fn member_handle(mut self, handle: impl Into<String>) -> Self {
        self.member_handle = Some(handle.into());
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Body of `/link_business_member`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkBusinessMemberMessage {
    pub header: Header,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<MemberRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "finite_opt")]
    pub ownership_stake: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LinkBusinessMemberMessage {
    pub fn new(header: Header, link: MemberLink) -> Self {
        Self {
            header,
            role: link.role,
            role_uuid: link.role_uuid,
            ownership_stake: link.ownership_stake,
            member_handle: link.member_handle,
            details: link.details,
        }
    }
}

/// Body of `/unlink_business_member`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlinkBusinessMemberMessage {
    pub header: Header,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<MemberRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_uuid: Option<String>,
}

/// Body of `/certify_beneficial_owner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertifyBeneficialOwnerMessage {
    pub header: Header,
    pub member_handle: String,
    /// Token from the owner's `get_entity` memberships.
    pub certification_token: String,
}
