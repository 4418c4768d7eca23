//! Application state and service wiring

use std::sync::Arc;
use std::time::Duration;

use fe_core::errors::ConfigurationError;
use fe_core::repositories::AccountDirectory;
use fe_core::services::{
    AuthService, CredentialStore, OtpIssuer, OtpServiceConfig, OtpSweeper, OtpVerifier,
    SessionGate, SmsGateway, TokenService, TokenServiceConfig,
};
use fe_infra::{create_account_directory, create_sms_gateway};
use fe_shared::{AppConfig, DirectoryBackend, SmsProvider};

/// Shared services handed to every handler
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub session_gate: Arc<SessionGate>,
    pub store: Arc<CredentialStore>,
    /// Reported by the health endpoint
    pub sms_provider: &'static str,
    /// Reported by the health endpoint
    pub account_directory: &'static str,
}

impl AppState {
    /// Wire services from configuration, building gateway and directory from it
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigurationError> {
        let gateway = create_sms_gateway(&config.sms)?;
        let directory = create_account_directory(&config.directory)?;
        Self::with_dependencies(config, gateway, directory)
    }

    /// Wire services around an existing gateway and directory
    pub fn with_dependencies(
        config: &AppConfig,
        gateway: Arc<dyn SmsGateway>,
        directory: Arc<dyn AccountDirectory>,
    ) -> Result<Self, ConfigurationError> {
        if config.jwt.is_using_default_secret() {
            if config.environment.is_production() {
                return Err(ConfigurationError::MissingCredentials {
                    name: "JWT_SECRET".to_string(),
                });
            }
            tracing::warn!("JWT_SECRET is not set; using the development secret");
        }

        let token_config = TokenServiceConfig::from_jwt_config(&config.jwt)?;
        let tokens = Arc::new(TokenService::new(token_config));

        let store = Arc::new(CredentialStore::new());
        let otp_config = OtpServiceConfig::from_settings(&config.otp, &config.sms);
        let issuer = Arc::new(OtpIssuer::new(store.clone(), gateway, otp_config));
        let verifier = Arc::new(OtpVerifier::new(store.clone()));

        let auth_service = Arc::new(AuthService::new(
            issuer,
            verifier,
            tokens.clone(),
            directory.clone(),
        ));
        let session_gate = Arc::new(SessionGate::new(tokens, directory));

        Ok(Self {
            auth_service,
            session_gate,
            store,
            sms_provider: match config.sms.provider {
                SmsProvider::Twilio => "twilio",
                SmsProvider::Mock => "mock",
            },
            account_directory: match config.directory.backend {
                DirectoryBackend::Supabase => "supabase",
                DirectoryBackend::Memory => "memory",
            },
        })
    }

    /// Sweeper over this state's credential store
    pub fn sweeper(&self, interval_seconds: u64) -> Arc<OtpSweeper> {
        Arc::new(OtpSweeper::new(
            self.store.clone(),
            Duration::from_secs(interval_seconds),
        ))
    }
}
