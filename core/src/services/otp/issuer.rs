//! OTP issuance: generate, store, deliver

use chrono::Utc;
use fe_shared::phone::mask_phone_number;
use rand::{rngs::OsRng, Rng};
use std::sync::Arc;

use crate::domain::entities::otp_record::OtpRecord;
use crate::domain::value_objects::IssuedOtp;
use crate::errors::DomainResult;

use super::config::OtpServiceConfig;
use super::store::CredentialStore;
use super::traits::{OutboundSms, SmsContent, SmsGateway};

/// Issues one-time codes and delivers them by SMS
pub struct OtpIssuer {
    store: Arc<CredentialStore>,
    gateway: Arc<dyn SmsGateway>,
    config: OtpServiceConfig,
}

impl OtpIssuer {
    pub fn new(
        store: Arc<CredentialStore>,
        gateway: Arc<dyn SmsGateway>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            store,
            gateway,
            config,
        }
    }

    pub fn config(&self) -> &OtpServiceConfig {
        &self.config
    }

    /// Issue a new code for `subject` and send it
    ///
    /// Delivery settings are checked before anything is stored. Any prior
    /// code for the subject is replaced. A gateway failure is returned as-is
    /// and the stored record is kept; it simply expires unused.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedOtp)` - Expiry and gateway message id (never the code)
    /// * `Err(DomainError)` - Configuration or gateway failure
    pub async fn issue(&self, subject: &str) -> DomainResult<IssuedOtp> {
        let delivery = self.config.delivery()?;
        let now = Utc::now();

        let purged = self.store.purge_expired(now);
        if purged > 0 {
            tracing::debug!(purged, event = "otp_expired_purged", "Purged expired codes");
        }

        let code = generate_code(self.config.code_length);
        let record = OtpRecord::new(subject, code.clone(), now, self.config.ttl_seconds);
        let expires_at = record.expires_at;
        let replaced = self.store.upsert(record).is_some();

        let minutes = self.config.validity_minutes();
        let content = match delivery.template_id {
            Some(id) => SmsContent::Template {
                id: id.to_string(),
                variables: serde_json::json!({ "OTP": code, "X": minutes.to_string() }),
            },
            None => SmsContent::PlainText(format!(
                "Your FoodEasy verification code is {}. Valid for {} minutes.",
                code, minutes
            )),
        };

        let message = OutboundSms {
            to: subject.to_string(),
            from: delivery.sender.to_string(),
            content,
        };

        let message_id = self.gateway.send(message).await.map_err(|e| {
            tracing::error!(
                phone = %mask_phone_number(subject),
                error = %e,
                event = "otp_delivery_failed",
                "Failed to deliver verification code"
            );
            e
        })?;

        tracing::info!(
            phone = %mask_phone_number(subject),
            replaced,
            templated = delivery.template_id.is_some(),
            message_id = %message_id,
            event = "otp_issued",
            "Verification code issued"
        );

        Ok(IssuedOtp {
            subject: subject.to_string(),
            expires_at,
            expires_in: self.config.ttl_seconds,
            message_id,
        })
    }
}

/// Generate a numeric code, each digit drawn uniformly from the OS CSPRNG
pub fn generate_code(length: usize) -> String {
    let mut rng = OsRng;
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
