//! Account entity as held by the external account directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account resolved by phone number or id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque identifier; the subject of session tokens
    pub id: String,

    /// Phone number in E.164 format
    pub phone_number: String,

    /// Deactivated accounts cannot authenticate
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Timestamp when the account was created
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new active account for a verified phone number
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            phone_number: phone_number.into(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Marks the account as deactivated
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

fn default_active() -> bool {
    true
}
