//! Entity domain — handles, registration (individual and business), KYC, lookups.

pub mod client;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::header::{Header, MessageKind};
use crate::network::CRYPTO_CODE;

// ─── Registration input ──────────────────────────────────────────────────────

/// Postal address shared by individual and business registrations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street_address_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address_2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl PostalAddress {
    /// US address (`country = "US"`).
    pub fn us(
        street_address_1: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street_address_1: street_address_1.into(),
            street_address_2: None,
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
            country: "US".to_string(),
        }
    }

    pub fn with_line_2(mut self, line: impl Into<String>) -> Self {
        self.street_address_2 = Some(line.into());
        self
    }
}

/// An individual end user to register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub handle: String,
    pub first_name: String,
    pub last_name: String,
    pub address: PostalAddress,
    pub phone: String,
    pub email: String,
    /// Social security number.
    pub identity_number: String,
    pub crypto_address: String,
    pub birthdate: NaiveDate,
}

/// A business entity to register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessUser {
    pub handle: String,
    pub name: String,
    pub address: PostalAddress,
    pub phone: String,
    pub email: String,
    /// Employer identification number.
    pub identity_number: String,
    pub crypto_address: String,
    pub naics_code: u32,
    pub business_type: Option<String>,
    pub business_type_uuid: Option<String>,
    pub doing_business_as: Option<String>,
    pub business_website: Option<String>,
}

// ─── Entity message parts ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressEntry {
    pub address_alias: String,
    #[serde(flatten)]
    pub address: PostalAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityEntry {
    pub identity_alias: String,
    pub identity_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub contact_alias: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoEntry {
    pub crypto_alias: String,
    pub crypto_address: String,
    pub crypto_code: String,
}

/// Entity type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Individual,
    Business,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Business => "business",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityEntry {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub relationship: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub entity_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naics_code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doing_business_as: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_website: Option<String>,
}

// ─── Requests ────────────────────────────────────────────────────────────────

/// Body of `/register`, for both individuals and businesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMessage {
    pub header: Header,
    pub message: MessageKind,
    pub address: AddressEntry,
    pub identity: IdentityEntry,
    pub contact: ContactEntry,
    pub crypto_entry: CryptoEntry,
    pub entity: EntityEntry,
}

impl EntityMessage {
    pub fn individual(app_handle: &str, user: &User) -> Self {
        Self {
            header: Header::for_user(app_handle, &user.handle),
            message: MessageKind::Entity,
            address: AddressEntry {
                address_alias: "home".to_string(),
                address: user.address.clone(),
            },
            identity: IdentityEntry {
                identity_alias: "SSN".to_string(),
                identity_value: user.identity_number.clone(),
            },
            contact: ContactEntry {
                contact_alias: "personal".to_string(),
                phone: user.phone.clone(),
                email: user.email.clone(),
            },
            crypto_entry: crypto_entry(&user.crypto_address),
            entity: EntityEntry {
                entity_type: EntityType::Individual,
                relationship: "user".to_string(),
                first_name: Some(user.first_name.clone()),
                last_name: Some(user.last_name.clone()),
                entity_name: format!("{} {}", user.first_name, user.last_name),
                birthdate: Some(user.birthdate),
                naics_code: None,
                business_type: None,
                business_type_uuid: None,
                doing_business_as: None,
                business_website: None,
            },
        }
    }

    pub fn business(app_handle: &str, business: &BusinessUser) -> Self {
        Self {
            header: Header::for_user(app_handle, &business.handle),
            message: MessageKind::Entity,
            address: AddressEntry {
                address_alias: "business".to_string(),
                address: business.address.clone(),
            },
            identity: IdentityEntry {
                identity_alias: "EIN".to_string(),
                identity_value: business.identity_number.clone(),
            },
            contact: ContactEntry {
                contact_alias: "business".to_string(),
                phone: business.phone.clone(),
                email: business.email.clone(),
            },
            crypto_entry: crypto_entry(&business.crypto_address),
            entity: EntityEntry {
                entity_type: EntityType::Business,
                relationship: "org".to_string(),
                first_name: None,
                last_name: None,
                entity_name: business.name.clone(),
                birthdate: None,
                naics_code: Some(business.naics_code),
                business_type: business.business_type.clone(),
                business_type_uuid: business.business_type_uuid.clone(),
                doing_business_as: business.doing_business_as.clone(),
                business_website: business.business_website.clone(),
            },
        }
    }
}

fn crypto_entry(address: &str) -> CryptoEntry {
    CryptoEntry {
        crypto_alias: "default".to_string(),
        crypto_address: address.to_string(),
        crypto_code: CRYPTO_CODE.to_string(),
    }
}

/// Body of `/request_kyc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycMessage {
    pub header: Header,
    pub message: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kyc_level: Option<String>,
}

/// Body of `/get_entities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetEntitiesMessage {
    pub header: Header,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,
}

/// `page` / `per_page` query parameters for `/get_entities`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    /// Query string without the leading `?`, or `None` when nothing is set.
    ///
    /// Zero is treated as unset.
    pub fn to_query(&self) -> Option<String> {
        let params: Vec<String> = [("page", self.page), ("per_page", self.per_page)]
            .into_iter()
            .filter_map(|(name, value)| match value {
                Some(v) if v > 0 => Some(format!("{}={}", name, v)),
                _ => None,
            })
            .collect();
        if params.is_empty() {
            None
        } else {
            Some(params.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            handle: "alice.silamoney.eth".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Doe".to_string(),
            address: PostalAddress::us("123 Main St", "Portland", "OR", "97204"),
            phone: "5035550100".to_string(),
            email: "alice@example.com".to_string(),
            identity_number: "123452222".to_string(),
            crypto_address: "0x2c7536e3605d9c16a7a3d7b1898e529396a65c23".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        }
    }

    #[test]
    fn test_individual_message_layout() {
        let msg = EntityMessage::individual("app.silamoney.eth", &user());
        let v = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["message"], "entity_msg");
        assert_eq!(v["header"]["user_handle"], "alice.silamoney.eth");
        assert_eq!(v["address"]["street_address_1"], "123 Main St");
        assert_eq!(v["address"]["country"], "US");
        assert!(v["address"].get("street_address_2").is_none());
        assert_eq!(v["identity"]["identity_alias"], "SSN");
        assert_eq!(v["crypto_entry"]["crypto_code"], "ETH");
        assert_eq!(v["entity"]["type"], "individual");
        assert_eq!(v["entity"]["birthdate"], "1990-05-17");
        assert!(v["entity"].get("naics_code").is_none());
    }

    #[test]
    fn test_business_message_layout() {
        let business = BusinessUser {
            handle: "acme.silamoney.eth".to_string(),
            name: "Acme Inc".to_string(),
            address: PostalAddress::us("1 Market St", "Austin", "TX", "73301").with_line_2("Suite 4"),
            phone: "5125550100".to_string(),
            email: "ops@acme.example".to_string(),
            identity_number: "12-3456789".to_string(),
            crypto_address: "0x2c7536e3605d9c16a7a3d7b1898e529396a65c23".to_string(),
            naics_code: 721,
            business_type: Some("corporation".to_string()),
            business_type_uuid: None,
            doing_business_as: None,
            business_website: Some("https://acme.example".to_string()),
        };
        let v = serde_json::to_value(EntityMessage::business("app", &business)).unwrap();
        assert_eq!(v["entity"]["type"], "business");
        assert_eq!(v["entity"]["entity_name"], "Acme Inc");
        assert_eq!(v["entity"]["naics_code"], 721);
        assert_eq!(v["identity"]["identity_alias"], "EIN");
        assert_eq!(v["address"]["street_address_2"], "Suite 4");
        assert!(v["entity"].get("first_name").is_none());
    }

    #[test]
    fn test_pagination_query() {
        assert_eq!(Pagination::new(2, 10).to_query().as_deref(), Some("page=2&per_page=10"));
        let per_page_only = Pagination {
            page: None,
            per_page: Some(5),
        };
        assert_eq!(per_page_only.to_query().as_deref(), Some("per_page=5"));
        assert_eq!(Pagination::default().to_query(), None);
        assert_eq!(Pagination::new(0, 0).to_query(), None);
    }

    #[test]
    fn test_get_entities_type_filter() {
        let msg = GetEntitiesMessage {
            header: Header::new("app"),
            entity_type: Some(EntityType::Business),
        };
        assert_eq!(serde_json::to_value(&msg).unwrap()["entity_type"], "business");
    }
}
