//! End-to-end checks against a locally running backend.
//!
//! Ignored by default; start the backend on localhost:8080 and run with
//! `cargo test -- --ignored`.

use reprocess_ocr::api::ApiClient;
use reprocess_ocr::config::Config;

#[tokio::test]
#[ignore] // needs a running backend with the seeded admin account
async fn login_and_trigger_reprocess_all() {
    let config = Config::default();
    let client = ApiClient::new(&config.base_url).expect("failed to build client");

    let credentials = &config.credentials;
    let mut session = None;
    for password in credentials.candidates() {
        if let Ok(s) = client.login(&credentials.username, password).await {
            session = Some(s);
            break;
        }
    }
    let session = session.expect("no candidate password was accepted");
    assert!(!session.token.is_empty());

    let client = client.with_token(session.token);
    let ack = client
        .reprocess_all()
        .await
        .expect("reprocess-all call failed");
    assert!(ack.message.is_some() || ack.status.is_some());
}

#[tokio::test]
#[ignore] // needs a running backend and at least one ingested document
async fn trigger_reprocess_for_one_document() {
    let config = Config::default();
    let client = ApiClient::new(&config.base_url).expect("failed to build client");

    let credentials = &config.credentials;
    let mut session = None;
    for password in credentials.candidates() {
        if let Ok(s) = client.login(&credentials.username, password).await {
            session = Some(s);
            break;
        }
    }
    let session = session.expect("no candidate password was accepted");

    let client = client.with_token(session.token);
    let ack = client
        .reprocess_document("1")
        .await
        .expect("single-document reprocess call failed");
    assert_eq!(ack.status.as_deref(), Some("processing"));
}
