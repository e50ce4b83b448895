//! Live tests against the Sila sandbox.
//!
//! All tests are `#[ignore]` because they require network access and a
//! registered sandbox application. Configure through the environment (a
//! `.env` file is picked up):
//!
//! - `SILA_APP_HANDLE` — the app handle, e.g. `myapp.silamoney.eth`
//! - `SILA_APP_PRIVATE_KEY` — the app's registered private key, hex
//!
//! Run with:
//! ```bash
//! cargo test --test sandbox_integration -- --ignored
//! ```

#![cfg(feature = "http")]

use std::env;

use sila_sdk::domain::header::{Header, HeaderMessage};
use sila_sdk::operation;
use sila_sdk::prelude::*;

fn sandbox_client() -> Option<SilaClient<SilaHttp>> {
    dotenvy::dotenv().ok();
    let app_handle = env::var("SILA_APP_HANDLE").ok()?;
    let private_key = env::var("SILA_APP_PRIVATE_KEY").ok()?;
    Some(
        SilaClient::builder()
            .app_handle(&app_handle)
            .private_key(&private_key)
            .environment(Environment::Sandbox)
            .build()
            .expect("sandbox client should build"),
    )
}

fn fresh_handle() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("rust-sdk-{}.silamoney.eth", &id[..12])
}

#[tokio::test]
#[ignore]
async fn test_check_handle_available() {
    let Some(client) = sandbox_client() else {
        eprintln!("SILA_APP_HANDLE / SILA_APP_PRIVATE_KEY not set; skipping");
        return;
    };
    let resp = client.entities().check_handle(&fresh_handle()).await.unwrap();
    assert_eq!(resp.status_code, 200, "{:?}", resp.failure());
    assert!(resp.success().unwrap().is_success());
}

#[tokio::test]
#[ignore]
async fn test_stale_created_is_rejected() {
    let Some(client) = sandbox_client() else {
        return;
    };
    let header = Header::for_user(client.app_handle(), &fresh_handle()).with_created(1_500_000_000);
    let resp: ApiResponse<BaseResponse> = client
        .call(&operation::CHECK_HANDLE, &HeaderMessage::new(header), SignerKeys::none())
        .await
        .unwrap();
    assert!((400..500).contains(&resp.status_code));
    let err = resp.failure().unwrap();
    assert!(!err.success);
    assert!(err.message.contains("expired"), "{}", err.message);
}

#[tokio::test]
#[ignore]
async fn test_wrong_app_key_is_auth_failure() {
    let Some(client) = sandbox_client() else {
        return;
    };
    let impostor = SilaClient::builder()
        .app_handle(client.app_handle())
        .private_key(&PrivateKey::random().to_hex())
        .build()
        .unwrap();
    let resp = impostor.businesses().get_business_types().await.unwrap();
    assert_eq!(resp.failure_kind(), Some(FailureKind::Auth));
    assert!(!resp.failure().unwrap().success);
}

#[tokio::test]
#[ignore]
async fn test_business_reference_lists() {
    let Some(client) = sandbox_client() else {
        return;
    };
    let types = client.businesses().get_business_types().await.unwrap();
    assert!(!types.success().unwrap().business_types.is_empty());
    let roles = client.businesses().get_business_roles().await.unwrap();
    assert!(roles.success().unwrap().success);
    let naics = client.businesses().get_naics_categories().await.unwrap();
    assert!(!naics.success().unwrap().naics_categories.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_sila_balance_of_fresh_wallet() {
    let Some(client) = sandbox_client() else {
        return;
    };
    let wallet = Wallet::generate();
    let resp = client
        .transactions()
        .get_sila_balance(wallet.address())
        .await
        .unwrap();
    assert_eq!(resp.success().unwrap().sila_balance, 0.0);
}
