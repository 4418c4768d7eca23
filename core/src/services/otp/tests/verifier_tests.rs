//! Unit tests for OTP verification

use chrono::{Duration, Utc};
use std::sync::Arc;

use super::mocks::{RecordingGateway, TEST_SENDER};
use crate::domain::entities::OtpRecord;
use crate::services::otp::{CredentialStore, OtpIssuer, OtpOutcome, OtpServiceConfig, OtpVerifier};

const PHONE: &str = "+15551234567";

fn setup() -> (OtpIssuer, OtpVerifier, Arc<CredentialStore>, Arc<RecordingGateway>) {
    let store = Arc::new(CredentialStore::new());
    let gateway = Arc::new(RecordingGateway::new());
    let issuer = OtpIssuer::new(
        store.clone(),
        gateway.clone(),
        OtpServiceConfig::default().with_sender(TEST_SENDER),
    );
    let verifier = OtpVerifier::new(store.clone());
    (issuer, verifier, store, gateway)
}

#[tokio::test]
async fn test_correct_code_verifies_exactly_once() {
    let (issuer, verifier, _store, gateway) = setup();
    issuer.issue(PHONE).await.unwrap();
    let code = gateway.last_code_for(PHONE).unwrap();

    assert!(verifier.verify(PHONE, &code));
    assert!(!verifier.verify(PHONE, &code));
}

#[test]
fn test_verify_before_issuance_fails() {
    let (_issuer, verifier, _store, _gateway) = setup();
    assert_eq!(verifier.check(PHONE, "123456"), OtpOutcome::NotIssued);
    assert!(!verifier.verify(PHONE, "123456"));
}

#[test]
fn test_verify_after_ttl_fails() {
    let (_issuer, verifier, store, _gateway) = setup();
    store.upsert(OtpRecord::new(
        PHONE,
        "123456",
        Utc::now() - Duration::seconds(601),
        600,
    ));

    assert_eq!(verifier.check(PHONE, "123456"), OtpOutcome::Expired);
    assert!(store.is_empty());
    assert_eq!(verifier.check(PHONE, "123456"), OtpOutcome::NotIssued);
}

#[tokio::test]
async fn test_wrong_code_keeps_record() {
    let (issuer, verifier, store, gateway) = setup();
    issuer.issue(PHONE).await.unwrap();
    let code = gateway.last_code_for(PHONE).unwrap();
    let wrong = if code == "000000" { "000001" } else { "000000" };

    assert_eq!(verifier.check(PHONE, wrong), OtpOutcome::Mismatch);
    assert!(store.get(PHONE).is_some());
    assert!(verifier.verify(PHONE, &code));
}

#[tokio::test]
async fn test_codes_are_bound_to_subject() {
    let (issuer, verifier, _store, gateway) = setup();
    issuer.issue(PHONE).await.unwrap();
    let code = gateway.last_code_for(PHONE).unwrap();

    assert!(!verifier.verify("+15557654321", &code));
    assert!(verifier.verify(PHONE, &code));
}

#[tokio::test]
async fn test_concurrent_subjects() {
    let (issuer, verifier, store, gateway) = setup();
    let issuer = Arc::new(issuer);
    let phones: Vec<String> = (0..8).map(|i| format!("+1555123{:04}", i)).collect();

    let mut handles = Vec::new();
    for phone in phones.clone() {
        let issuer = Arc::clone(&issuer);
        handles.push(tokio::spawn(async move { issuer.issue(&phone).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert_eq!(store.len(), phones.len());

    for phone in &phones {
        let code = gateway.last_code_for(phone).unwrap();
        assert!(verifier.verify(phone, &code));
    }
    assert!(store.is_empty());
}

#[test]
fn test_outcome_errors() {
    use crate::errors::AuthError;
    assert_eq!(OtpOutcome::Verified.error(), None);
    assert_eq!(OtpOutcome::NotIssued.error(), Some(AuthError::OtpNotIssued));
    assert_eq!(OtpOutcome::Expired.error(), Some(AuthError::OtpExpired));
    assert_eq!(OtpOutcome::Mismatch.error(), Some(AuthError::OtpInvalid));
}
