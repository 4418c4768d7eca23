use chrono::{DateTime, Utc};
use fe_core::domain::entities::account::Account;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Phone number in E.164 format; spaces, dashes and brackets are ignored
    /// Examples: "+15551234567", "+1 (555) 123-4567"
    #[validate(length(min = 1, max = 32))]
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpResponse {
    pub success: bool,
    pub message: String,
    /// Seconds until the code expires
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1, max = 32))]
    pub phone_number: String,

    /// Code received by SMS
    #[validate(length(min = 1, max = 16))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TokenInfoRequest {
    #[validate(length(min = 1))]
    pub token: String,
}

/// Account as exposed to its owner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub user_id: String,
    pub phone_number: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            user_id: account.id,
            phone_number: account.phone_number,
            is_active: account.is_active,
            created_at: account.created_at,
        }
    }
}
