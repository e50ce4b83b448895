//! Integration tests for the full call path over a scripted transport.
//!
//! Each test builds a `SilaClient` on top of `MockTransport`, which records
//! every request it is handed and replies with a canned response. Nothing
//! touches the network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use sila_sdk::auth::signer;
use sila_sdk::canonical::canonicalize;
use sila_sdk::domain::header::{Header, HeaderMessage};
use sila_sdk::operation;
use sila_sdk::prelude::*;

const APP_HANDLE: &str = "app.silamoney.eth";
const APP_KEY: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
const APP_ADDRESS: &str = "0x2c7536e3605d9c16a7a3d7b1898e529396a65c23";

const EXPIRED_BODY: &str = r#"{"header":{"created":"Provided epoch in message has expired; please generate a new message and signature."},"success":false,"status":"FAILURE"}"#;
const BAD_SIGNATURE_BODY: &str = r#"{"success":false,"status":"FAILURE","message":"Failed to authenticate app signature. The derived address does not match any registered address for this app."}"#;

#[derive(Clone, Default)]
struct MockTransport {
    replies: Arc<Mutex<VecDeque<RawResponse>>>,
    sent: Arc<Mutex<Vec<SignedRequest>>>,
}

impl MockTransport {
    fn replying(status: u16, body: &str) -> Self {
        let mock = Self::default();
        mock.push(status, body);
        mock
    }

    fn push(&self, status: u16, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(RawResponse::new(status, body).with_header("Content-Type", "application/json"));
    }

    fn sent(&self) -> Vec<SignedRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: SignedRequest) -> Result<RawResponse, TransportError> {
        self.sent.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::Other("no scripted reply".to_string()))
    }
}

fn client(mock: &MockTransport) -> SilaClient<MockTransport> {
    SilaClientBuilder::new()
        .app_handle(APP_HANDLE)
        .private_key(APP_KEY)
        .build_with_transport(mock.clone())
        .unwrap()
}

// =============================================================================
// Happy path
// =============================================================================

#[tokio::test]
async fn test_check_handle_success() {
    let mock = MockTransport::replying(
        200,
        r#"{"reference":"ref","message":"alice.silamoney.eth is available.","status":"SUCCESS"}"#,
    );
    let resp = client(&mock)
        .entities()
        .check_handle("alice.silamoney.eth")
        .await
        .unwrap();

    assert_eq!(resp.status_code, 200);
    assert!(resp.success().unwrap().is_success());
    assert_eq!(resp.header("content-type"), Some("application/json"));

    let sent = mock.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].path, "/check_handle");
    assert!(sent[0].header("authsignature").is_some());
    assert!(sent[0].header("usersignature").is_none());
}

#[tokio::test]
async fn test_signed_bytes_are_transmitted_bytes() {
    let mock = MockTransport::replying(200, r#"{"message":"ok","status":"SUCCESS"}"#);
    let user = PrivateKey::random();
    client(&mock)
        .entities()
        .check_kyc("alice.silamoney.eth", &user)
        .await
        .unwrap();

    let req = &mock.sent()[0];
    let body = req.body.as_bytes();
    let auth = req.header("authsignature").unwrap();
    let usr = req.header("usersignature").unwrap();
    assert!(signer::verify(body, auth, APP_ADDRESS).unwrap());
    assert!(signer::verify(body, usr, &user.address()).unwrap());

    let text = req.body.as_str();
    assert!(text.starts_with(r#"{"header":{"auth_handle":"app.silamoney.eth","created":"#));
    assert!(text.ends_with(r#""message":"header_msg"}"#));
}

#[tokio::test]
async fn test_auth_user_operation_has_exactly_two_signatures() {
    let mock = MockTransport::replying(200, "[]");
    let user = PrivateKey::random();
    let resp = client(&mock)
        .accounts()
        .get_accounts("alice.silamoney.eth", &user)
        .await
        .unwrap();
    assert_eq!(resp.success().unwrap().len(), 0);

    let req = &mock.sent()[0];
    let mut names: Vec<&str> = req.headers.iter().map(|(k, _)| k.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Content-Type", "authsignature", "usersignature"]);
}

#[tokio::test]
async fn test_business_operation_carries_three_signatures() {
    let mock = MockTransport::replying(200, r#"{"success":true,"status":"SUCCESS","message":"linked"}"#);
    let user = PrivateKey::random();
    let business = PrivateKey::random();
    let signers = BusinessSigners {
        user_handle: "alice.silamoney.eth",
        user_key: &user,
        business_handle: "acme.silamoney.eth",
        business_key: &business,
    };
    client(&mock)
        .businesses()
        .link_business_member(signers, MemberLink::role(MemberRole::Administrator))
        .await
        .unwrap();

    let req = &mock.sent()[0];
    let body = req.body.as_bytes();
    assert!(signer::verify(body, req.header("businesssignature").unwrap(), &business.address()).unwrap());
    assert!(req.body.as_str().contains(r#""business_handle":"acme.silamoney.eth""#));
}

#[tokio::test]
async fn test_get_entities_pagination_query() {
    let mock = MockTransport::replying(200, r#"{"success":true,"entities":{}}"#);
    client(&mock)
        .entities()
        .get_entities(Some(EntityType::Individual), Pagination::new(1, 5))
        .await
        .unwrap();
    let req = &mock.sent()[0];
    assert_eq!(req.path, "/get_entities?page=1&per_page=5");
    assert!(req.header("usersignature").is_none());
}

// =============================================================================
// Failure envelopes
// =============================================================================

#[tokio::test]
async fn test_stale_created_yields_expired_message() {
    let mock = MockTransport::replying(400, EXPIRED_BODY);
    let client = client(&mock);
    let body = HeaderMessage::new(Header::for_user(APP_HANDLE, "alice.silamoney.eth").with_created(1_500_000_000));
    let resp: ApiResponse<BaseResponse> = client
        .call(&operation::CHECK_HANDLE, &body, SignerKeys::none())
        .await
        .unwrap();

    assert_eq!(resp.status_code, 400);
    assert_eq!(resp.failure_kind(), Some(FailureKind::Validation));
    let err = resp.failure().unwrap();
    assert!(!err.success);
    assert!(err.message.contains("Provided epoch in message has expired"));

    let sent = mock.sent();
    assert!(sent[0].body.as_str().contains(r#""created":1500000000"#));
}

#[tokio::test]
async fn test_bad_app_signature_is_auth_failure() {
    let mock = MockTransport::replying(403, BAD_SIGNATURE_BODY);
    let resp = client(&mock).businesses().get_business_types().await.unwrap();

    assert_eq!(resp.status_code, 403);
    assert_eq!(resp.failure_kind(), Some(FailureKind::Auth));
    let err = resp.into_result().unwrap_err();
    assert!(!err.success);
    assert!(err.message.contains("Failed to authenticate app signature"));
}

#[tokio::test]
async fn test_validation_details_are_kept() {
    let mock = MockTransport::replying(
        400,
        r#"{"success":false,"status":"FAILURE","message":"Bad request.","validation_details":{"entity":{"birthdate":"Not a valid date."}}}"#,
    );
    let resp = client(&mock).entities().check_handle("x").await.unwrap();
    let err = resp.failure().unwrap();
    assert!(err.message.contains("Bad request"));
    assert_eq!(
        err.validation_details.as_ref().unwrap()["entity"]["birthdate"],
        "Not a valid date."
    );
}

#[tokio::test]
async fn test_transport_failure_is_error_not_envelope() {
    let mock = MockTransport::default();
    let err = client(&mock)
        .entities()
        .check_handle("alice.silamoney.eth")
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Transport(TransportError::Other(_))));
}

#[tokio::test]
async fn test_success_body_mismatch_is_deserialization_error() {
    let mock = MockTransport::replying(200, r#"{"unexpected":true}"#);
    let err = client(&mock)
        .entities()
        .check_handle("alice.silamoney.eth")
        .await
        .unwrap_err();
    match err {
        SdkError::Deserialization { status, body, .. } => {
            assert_eq!(status, 200);
            assert_eq!(body, r#"{"unexpected":true}"#);
        }
        other => panic!("expected Deserialization, got {other:?}"),
    }
}

// =============================================================================
// Credentials
// =============================================================================

#[tokio::test]
async fn test_missing_business_key_never_reaches_transport() {
    let mock = MockTransport::replying(200, "{}");
    let client = client(&mock);
    let user = PrivateKey::random();
    let body = HeaderMessage::new(client.user_header("alice.silamoney.eth"));

    let err = client
        .call::<serde_json::Value, _>(&operation::CERTIFY_BUSINESS, &body, SignerKeys::user(&user))
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::MissingCredential { role: SignerRole::Business }));
    assert!(mock.sent().is_empty());
}

#[tokio::test]
async fn test_missing_user_key_never_reaches_transport() {
    let mock = MockTransport::replying(200, "{}");
    let client = client(&mock);
    let body = HeaderMessage::new(client.user_header("alice.silamoney.eth"));

    let err = client
        .call::<serde_json::Value, _>(&operation::REQUEST_KYC, &body, SignerKeys::none())
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::MissingCredential { role: SignerRole::User }));
    assert!(mock.sent().is_empty());
}

// =============================================================================
// SILA balance normalization
// =============================================================================

#[tokio::test]
async fn test_sila_balance_numeric() {
    let mock = MockTransport::replying(200, r#"{"success":true,"sila_balance":123.45}"#);
    let resp = client(&mock)
        .transactions()
        .get_sila_balance("0xabc")
        .await
        .unwrap();
    let balance = resp.success().unwrap();
    assert!(balance.success);
    assert_eq!(balance.sila_balance, 123.45);

    let req = &mock.sent()[0];
    assert_eq!(req.headers.len(), 1);
    assert_eq!(req.body.as_str(), r#"{"address":"0xabc"}"#);
}

#[tokio::test]
async fn test_sila_balance_stringly_typed() {
    let mock = MockTransport::replying(200, r#"{"success":"true","sila_balance":"250"}"#);
    let resp = client(&mock)
        .transactions()
        .get_sila_balance("0xabc")
        .await
        .unwrap();
    assert_eq!(resp.success().unwrap().sila_balance, 250.0);
}

// =============================================================================
// Canonical form
// =============================================================================

#[test]
fn test_prepare_matches_canonicalize() {
    let mock = MockTransport::default();
    let client = client(&mock);
    let body = HeaderMessage::new(Header::new(APP_HANDLE).with_created(42).with_reference("r"));
    let req = client
        .prepare(&operation::CHECK_HANDLE, &body, SignerKeys::none())
        .unwrap();
    assert_eq!(req.body, canonicalize(&body).unwrap());
    assert_eq!(
        req.body.as_str(),
        r#"{"header":{"auth_handle":"app.silamoney.eth","created":42,"crypto":"ETH","reference":"r","version":"0.2"},"message":"header_msg"}"#
    );
}
