//! Network URL constants and environment selection for the Sila SDK.

/// Sandbox REST API base URL.
pub const SANDBOX_API_URL: &str = "https://sandbox.silamoney.com/0.2";

/// Production REST API base URL.
pub const PRODUCTION_API_URL: &str = "https://api.silamoney.com/0.2";

/// API version stamped into every request header.
pub const API_VERSION: &str = "0.2";

/// Crypto network code stamped into every request header.
pub const CRYPTO_CODE: &str = "ETH";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Target environment for a client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
    /// Any other base URL (local mock servers, staging).
    Custom(String),
}

impl Environment {
    pub fn base_url(&self) -> &str {
        match self {
            Self::Sandbox => SANDBOX_API_URL,
            Self::Production => PRODUCTION_API_URL,
            Self::Custom(url) => url.as_str(),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sandbox => write!(f, "sandbox"),
            Self::Production => write!(f, "production"),
            Self::Custom(url) => write!(f, "{}", url),
        }
    }
}
