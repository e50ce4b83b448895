//! Signature header composition.

use std::collections::BTreeMap;

use super::{signer, Credentials, SignerKeys, SignerRole, Signers};
use crate::canonical::CanonicalPayload;
use crate::error::SdkError;

/// Header name → hex signature, for exactly the roles an operation requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureSet(BTreeMap<&'static str, String>);

impl SignatureSet {
    pub fn get(&self, header: &str) -> Option<&str> {
        self.0.get(header).map(String::as_str)
    }

    pub fn contains(&self, header: &str) -> bool {
        self.0.contains_key(header)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn header_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl IntoIterator for SignatureSet {
    type Item = (&'static str, String);
    type IntoIter = std::collections::btree_map::IntoIter<&'static str, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Sign `payload` once per required role.
///
/// All keys are resolved before anything is signed, so a missing key fails the
/// call without producing a partial set.
pub fn compose_headers(
    payload: &CanonicalPayload,
    signers: Signers,
    credentials: &Credentials,
    keys: &SignerKeys<'_>,
) -> Result<SignatureSet, SdkError> {
    let mut resolved = Vec::with_capacity(3);
    for role in signers.roles() {
        let key = match role {
            SignerRole::Auth => Some(credentials.app_key()),
            SignerRole::User => keys.user,
            SignerRole::Business => keys.business,
        };
        let key = key.ok_or(SdkError::MissingCredential { role })?;
        resolved.push((role, key));
    }

    let mut set = BTreeMap::new();
    for (role, key) in resolved {
        let signature = signer::sign(payload.as_bytes(), key)?;
        set.insert(role.header_name(), signature);
    }
    Ok(SignatureSet(set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{PrivateKey, BUSINESS_SIGNATURE, USER_SIGNATURE, AUTH_SIGNATURE};
    use crate::canonical::canonicalize_value;
    use crate::network::Environment;
    use serde_json::json;

    fn credentials() -> Credentials {
        Credentials::new("app.silamoney.eth", PrivateKey::random(), Environment::Sandbox)
    }

    fn payload() -> CanonicalPayload {
        canonicalize_value(&json!({"header": {"auth_handle": "app.silamoney.eth"}}))
    }

    #[test]
    fn test_auth_only() {
        let creds = credentials();
        let set = compose_headers(&payload(), Signers::AUTH, &creds, &SignerKeys::none()).unwrap();
        assert_eq!(set.header_names().collect::<Vec<_>>(), vec![AUTH_SIGNATURE]);
        let sig = set.get(AUTH_SIGNATURE).unwrap();
        assert!(signer::verify(payload().as_bytes(), sig, &creds.app_key().address()).unwrap());
    }

    #[test]
    fn test_auth_user_omits_business() {
        let creds = credentials();
        let user = PrivateKey::random();
        let business = PrivateKey::random();
        let keys = SignerKeys::user_and_business(&user, &business);
        let set = compose_headers(&payload(), Signers::AUTH_USER, &creds, &keys).unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.contains(AUTH_SIGNATURE));
        assert!(set.contains(USER_SIGNATURE));
        assert!(!set.contains(BUSINESS_SIGNATURE));
    }

    #[test]
    fn test_every_signature_covers_the_same_bytes() {
        let creds = credentials();
        let user = PrivateKey::random();
        let business = PrivateKey::random();
        let keys = SignerKeys::user_and_business(&user, &business);
        let body = payload();
        let set = compose_headers(&body, Signers::AUTH_USER_BUSINESS, &creds, &keys).unwrap();

        let expected = [
            (AUTH_SIGNATURE, creds.app_key().address()),
            (USER_SIGNATURE, user.address()),
            (BUSINESS_SIGNATURE, business.address()),
        ];
        for (header, address) in expected {
            let sig = set.get(header).unwrap();
            assert!(signer::verify(body.as_bytes(), sig, &address).unwrap(), "{header}");
        }
    }

    #[test]
    fn test_missing_user_key() {
        let err = compose_headers(&payload(), Signers::AUTH_USER, &credentials(), &SignerKeys::none())
            .unwrap_err();
        assert!(matches!(err, SdkError::MissingCredential { role: SignerRole::User }));
    }

    #[test]
    fn test_missing_business_key() {
        let user = PrivateKey::random();
        let err = compose_headers(
            &payload(),
            Signers::AUTH_USER_BUSINESS,
            &credentials(),
            &SignerKeys::user(&user),
        )
        .unwrap_err();
        assert!(matches!(err, SdkError::MissingCredential { role: SignerRole::Business }));
    }

    #[test]
    fn test_unsigned_operation_has_no_headers() {
        let set = compose_headers(&payload(), Signers::NONE, &credentials(), &SignerKeys::none()).unwrap();
        assert!(set.is_empty());
    }
}
