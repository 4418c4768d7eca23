//! Shared fixtures for API integration tests

#![allow(dead_code)]

use actix_web::web;
use std::collections::HashMap;
use std::sync::Arc;

use fe_api::AppState;
use fe_core::repositories::InMemoryAccountDirectory;
use fe_core::services::{TokenService, TokenServiceConfig};
use fe_infra::MockSmsGateway;
use fe_shared::AppConfig;

pub const PHONE: &str = "+15551234567";
pub const OTHER_PHONE: &str = "+15557654321";
pub const SENDER: &str = "+18507887201";
pub const JWT_SECRET: &str = "integration-test-secret";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub gateway: MockSmsGateway,
    pub directory: InMemoryAccountDirectory,
    pub config: AppConfig,
}

impl TestContext {
    /// Token service sharing the application's signing settings
    pub fn tokens(&self) -> TokenService {
        TokenService::new(TokenServiceConfig::from_jwt_config(&self.config.jwt).unwrap())
    }
}

pub fn config_with(overrides: &[(&str, &str)]) -> AppConfig {
    let mut vars: HashMap<String, String> = [
        ("JWT_SECRET", JWT_SECRET),
        ("TWILIO_PHONE_NUMBER", SENDER),
        ("OTP_SWEEP_INTERVAL_SECONDS", "0"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }

    AppConfig::from_lookup(&|key| vars.get(key).cloned()).unwrap()
}

pub fn context() -> TestContext {
    context_with(&[])
}

pub fn context_with(overrides: &[(&str, &str)]) -> TestContext {
    let config = config_with(overrides);
    let gateway = MockSmsGateway::new();
    let directory = InMemoryAccountDirectory::new();

    let state = AppState::with_dependencies(
        &config,
        Arc::new(gateway.clone()),
        Arc::new(directory.clone()),
    )
    .unwrap();

    TestContext {
        state: web::Data::new(state),
        gateway,
        directory,
        config,
    }
}
