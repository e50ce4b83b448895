//! Static operation table: path, required signers and result shape per call.

use crate::auth::Signers;

/// What a `200` body decodes into, and whether it needs normalizing first.
///
/// The shape is data, not a type bound: the caller picks `R` in
/// `call::<R, _>`, and the interpreter only reads the shape to decide on
/// normalization ([`normalizes_body`](Self::normalizes_body)) and to label
/// its log line. The typed sub-client wrappers fix `R` to the wire type
/// named by each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
    /// `{reference, message, status, ...}`
    Base,
    /// Arbitrary JSON, kept as `serde_json::Value`.
    Json,
    LinkAccount,
    Accounts,
    AccountBalance,
    PlaidSamedayAuth,
    Operation,
    Transfer,
    Transactions,
    BusinessTypes,
    BusinessRoles,
    NaicsCategories,
    /// Bare balance body whose number/bool encoding varies by environment.
    SilaBalance,
}

impl ResultShape {
    /// Whether the body goes through decode → coerce → re-encode before the
    /// typed decode.
    pub fn normalizes_body(&self) -> bool {
        matches!(self, Self::SilaBalance)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Json => "json",
            Self::LinkAccount => "link_account",
            Self::Accounts => "accounts",
            Self::AccountBalance => "account_balance",
            Self::PlaidSamedayAuth => "plaid_sameday_auth",
            Self::Operation => "operation",
            Self::Transfer => "transfer",
            Self::Transactions => "transactions",
            Self::BusinessTypes => "business_types",
            Self::BusinessRoles => "business_roles",
            Self::NaicsCategories => "naics_categories",
            Self::SilaBalance => "sila_balance",
        }
    }
}

impl std::fmt::Display for ResultShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A logical API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    pub name: &'static str,
    pub path: &'static str,
    pub signers: Signers,
    pub shape: ResultShape,
}

impl OperationSpec {
    pub const fn new(
        name: &'static str,
        path: &'static str,
        signers: Signers,
        shape: ResultShape,
    ) -> Self {
        Self {
            name,
            path,
            signers,
            shape,
        }
    }
}

// ── Entities ─────────────────────────────────────────────────────────────────

pub const CHECK_HANDLE: OperationSpec =
    OperationSpec::new("check_handle", "/check_handle", Signers::AUTH, ResultShape::Base);
pub const REGISTER: OperationSpec =
    OperationSpec::new("register", "/register", Signers::AUTH, ResultShape::Base);
pub const REGISTER_BUSINESS: OperationSpec =
    OperationSpec::new("register_business", "/register", Signers::AUTH, ResultShape::Base);
pub const REQUEST_KYC: OperationSpec =
    OperationSpec::new("request_kyc", "/request_kyc", Signers::AUTH_USER, ResultShape::Base);
pub const CHECK_KYC: OperationSpec =
    OperationSpec::new("check_kyc", "/check_kyc", Signers::AUTH_USER, ResultShape::Base);
pub const GET_ENTITY: OperationSpec =
    OperationSpec::new("get_entity", "/get_entity", Signers::AUTH_USER, ResultShape::Json);
pub const GET_ENTITIES: OperationSpec =
    OperationSpec::new("get_entities", "/get_entities", Signers::AUTH, ResultShape::Json);

// ── Bank accounts ────────────────────────────────────────────────────────────

pub const LINK_ACCOUNT: OperationSpec = OperationSpec::new(
    "link_account",
    "/link_account",
    Signers::AUTH_USER,
    ResultShape::LinkAccount,
);
pub const GET_ACCOUNTS: OperationSpec =
    OperationSpec::new("get_accounts", "/get_accounts", Signers::AUTH_USER, ResultShape::Accounts);
pub const GET_ACCOUNT_BALANCE: OperationSpec = OperationSpec::new(
    "get_account_balance",
    "/get_account_balance",
    Signers::AUTH_USER,
    ResultShape::AccountBalance,
);
pub const PLAID_SAMEDAY_AUTH: OperationSpec = OperationSpec::new(
    "plaid_sameday_auth",
    "/plaid_sameday_auth",
    Signers::AUTH,
    ResultShape::PlaidSamedayAuth,
);

// ── Transactions ─────────────────────────────────────────────────────────────

pub const ISSUE_SILA: OperationSpec =
    OperationSpec::new("issue_sila", "/issue_sila", Signers::AUTH_USER, ResultShape::Operation);
pub const TRANSFER_SILA: OperationSpec = OperationSpec::new(
    "transfer_sila",
    "/transfer_sila",
    Signers::AUTH_USER,
    ResultShape::Transfer,
);
pub const REDEEM_SILA: OperationSpec =
    OperationSpec::new("redeem_sila", "/redeem_sila", Signers::AUTH_USER, ResultShape::Operation);
pub const GET_TRANSACTIONS: OperationSpec = OperationSpec::new(
    "get_transactions",
    "/get_transactions",
    Signers::AUTH_USER,
    ResultShape::Transactions,
);
pub const GET_SILA_BALANCE: OperationSpec = OperationSpec::new(
    "get_sila_balance",
    "/get_sila_balance",
    Signers::NONE,
    ResultShape::SilaBalance,
);

// ── Wallets ──────────────────────────────────────────────────────────────────

pub const GET_WALLET: OperationSpec =
    OperationSpec::new("get_wallet", "/get_wallet", Signers::AUTH_USER, ResultShape::Json);
pub const GET_WALLETS: OperationSpec =
    OperationSpec::new("get_wallets", "/get_wallets", Signers::AUTH_USER, ResultShape::Json);
pub const REGISTER_WALLET: OperationSpec =
    OperationSpec::new("register_wallet", "/register_wallet", Signers::AUTH_USER, ResultShape::Json);
pub const UPDATE_WALLET: OperationSpec =
    OperationSpec::new("update_wallet", "/update_wallet", Signers::AUTH_USER, ResultShape::Json);
pub const DELETE_WALLET: OperationSpec =
    OperationSpec::new("delete_wallet", "/delete_wallet", Signers::AUTH_USER, ResultShape::Json);

// ── Businesses ───────────────────────────────────────────────────────────────

pub const GET_BUSINESS_TYPES: OperationSpec = OperationSpec::new(
    "get_business_types",
    "/get_business_types",
    Signers::AUTH,
    ResultShape::BusinessTypes,
);
pub const GET_BUSINESS_ROLES: OperationSpec = OperationSpec::new(
    "get_business_roles",
    "/get_business_roles",
    Signers::AUTH,
    ResultShape::BusinessRoles,
);
pub const GET_NAICS_CATEGORIES: OperationSpec = OperationSpec::new(
    "get_naics_categories",
    "/get_naics_categories",
    Signers::AUTH,
    ResultShape::NaicsCategories,
);
pub const LINK_BUSINESS_MEMBER: OperationSpec = OperationSpec::new(
    "link_business_member",
    "/link_business_member",
    Signers::AUTH_USER_BUSINESS,
    ResultShape::Json,
);
pub const UNLINK_BUSINESS_MEMBER: OperationSpec = OperationSpec::new(
    "unlink_business_member",
    "/unlink_business_member",
    Signers::AUTH_USER_BUSINESS,
    ResultShape::Json,
);
pub const CERTIFY_BENEFICIAL_OWNER: OperationSpec = OperationSpec::new(
    "certify_beneficial_owner",
    "/certify_beneficial_owner",
    Signers::AUTH_USER_BUSINESS,
    ResultShape::Json,
);
pub const CERTIFY_BUSINESS: OperationSpec = OperationSpec::new(
    "certify_business",
    "/certify_business",
    Signers::AUTH_USER_BUSINESS,
    ResultShape::Json,
);

/// Every operation the SDK knows about.
pub const ALL: &[OperationSpec] = &[
    CHECK_HANDLE,
    REGISTER,
    REGISTER_BUSINESS,
    REQUEST_KYC,
    CHECK_KYC,
    GET_ENTITY,
    GET_ENTITIES,
    LINK_ACCOUNT,
    GET_ACCOUNTS,
    GET_ACCOUNT_BALANCE,
    PLAID_SAMEDAY_AUTH,
    ISSUE_SILA,
    TRANSFER_SILA,
    REDEEM_SILA,
    GET_TRANSACTIONS,
    GET_SILA_BALANCE,
    GET_WALLET,
    GET_WALLETS,
    REGISTER_WALLET,
    UPDATE_WALLET,
    DELETE_WALLET,
    GET_BUSINESS_TYPES,
    GET_BUSINESS_ROLES,
    GET_NAICS_CATEGORIES,
    LINK_BUSINESS_MEMBER,
    UNLINK_BUSINESS_MEMBER,
    CERTIFY_BENEFICIAL_OWNER,
    CERTIFY_BUSINESS,
];

/// Look an operation up by name.
pub fn by_name(name: &str) -> Option<&'static OperationSpec> {
    ALL.iter().find(|op| op.name == name)
}
