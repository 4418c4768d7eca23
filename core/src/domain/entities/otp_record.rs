//! One-time passcode record kept by the credential store.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Number of digits in a code unless configured otherwise
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Seconds a code stays valid unless configured otherwise (10 minutes)
pub const DEFAULT_TTL_SECONDS: u64 = 600;

/// A live one-time code bound to a phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Phone number (E.164) the code was sent to
    pub subject: String,

    /// Fixed-length numeric code
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Creates a record issued at `now` that lives for `ttl_seconds`
    ///
    /// Lifetimes past chrono's range saturate at the latest representable instant.
    pub fn new(
        subject: impl Into<String>,
        code: impl Into<String>,
        now: DateTime<Utc>,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            subject: subject.into(),
            code: code.into(),
            issued_at: now,
            expires_at: i64::try_from(ttl_seconds)
                .ok()
                .and_then(Duration::try_seconds)
                .and_then(|ttl| now.checked_add_signed(ttl))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    /// A record is expired once `now` reaches its expiry
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Checks expiry against the current time
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
