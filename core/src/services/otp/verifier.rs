//! OTP verification

use chrono::Utc;
use fe_shared::phone::mask_phone_number;
use std::sync::Arc;

use super::store::CredentialStore;
use super::types::OtpOutcome;

/// Checks submitted codes against the credential store
pub struct OtpVerifier {
    store: Arc<CredentialStore>,
}

impl OtpVerifier {
    pub fn new(store: Arc<CredentialStore>) -> Self {
        Self { store }
    }

    /// Verify `candidate` for `subject`; true at most once per issued code
    pub fn verify(&self, subject: &str, candidate: &str) -> bool {
        self.check(subject, candidate).is_verified()
    }

    /// Verify and report why the check failed
    pub fn check(&self, subject: &str, candidate: &str) -> OtpOutcome {
        let outcome = self.store.check(subject, candidate, Utc::now());

        match outcome {
            OtpOutcome::Verified => tracing::info!(
                phone = %mask_phone_number(subject),
                event = "otp_verified",
                "Verification code accepted"
            ),
            _ => tracing::warn!(
                phone = %mask_phone_number(subject),
                outcome = outcome.as_str(),
                event = "otp_rejected",
                "Verification code rejected"
            ),
        }

        outcome
    }
}
