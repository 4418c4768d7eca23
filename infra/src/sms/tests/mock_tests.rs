//! Unit tests for the mock SMS gateway

use fe_core::errors::DependencyError;
use fe_core::services::otp::{OutboundSms, SmsContent, SmsGateway};

use crate::sms::mock::extract_code;
use crate::sms::MockSmsGateway;

fn plain(to: &str, body: &str) -> OutboundSms {
    OutboundSms {
        to: to.to_string(),
        from: "+18507887201".to_string(),
        content: SmsContent::PlainText(body.to_string()),
    }
}

#[tokio::test]
async fn test_mock_send_records_message() {
    let gateway = MockSmsGateway::new();
    let message_id = gateway
        .send(plain("+15551234567", "Your FoodEasy verification code is 482913."))
        .await
        .unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(gateway.message_count(), 1);
    assert_eq!(gateway.messages()[0].to, "+15551234567");
    assert_eq!(gateway.last_code_for("+15551234567").as_deref(), Some("482913"));
    assert_eq!(gateway.last_code_for("+15550000000"), None);
}

#[tokio::test]
async fn test_mock_simulated_failure() {
    let gateway = MockSmsGateway::new();
    gateway.set_simulate_failure(true);

    let result = gateway.send(plain("+15551234567", "code 123456")).await;
    assert!(matches!(result, Err(DependencyError::SmsGateway { .. })));
    assert_eq!(gateway.message_count(), 0);

    gateway.set_simulate_failure(false);
    assert!(gateway.send(plain("+15551234567", "code 123456")).await.is_ok());
}

#[tokio::test]
async fn test_mock_clones_share_outbox() {
    let gateway = MockSmsGateway::new();
    let handle = gateway.clone();

    handle.send(plain("+15551234567", "code 111111")).await.unwrap();
    assert_eq!(gateway.message_count(), 1);

    gateway.clear();
    assert_eq!(handle.message_count(), 0);
}

#[test]
fn test_extract_code_from_template_variables() {
    let content = SmsContent::Template {
        id: "HX0123456789abcdef0123456789abcdef".to_string(),
        variables: serde_json::json!({ "OTP": "009912", "X": "10" }),
    };
    assert_eq!(extract_code(&content).as_deref(), Some("009912"));
}

#[test]
fn test_extract_code_ignores_short_numbers() {
    let content = SmsContent::PlainText("Code 7731 valid for 10 minutes".to_string());
    assert_eq!(extract_code(&content).as_deref(), Some("7731"));

    let none = SmsContent::PlainText("Valid for 10 minutes".to_string());
    assert_eq!(extract_code(&none), None);
}
