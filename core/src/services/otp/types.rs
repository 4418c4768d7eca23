//! Result types for OTP verification

use serde::{Deserialize, Serialize};

use crate::errors::AuthError;

/// Why a verification did or did not succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpOutcome {
    /// Code matched; the record has been consumed
    Verified,
    /// No live record for the subject
    NotIssued,
    /// The record had expired and was removed
    Expired,
    /// Code did not match; the record is kept
    Mismatch,
}

impl OtpOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, OtpOutcome::Verified)
    }

    /// The authentication error reported for a failed outcome
    pub fn error(&self) -> Option<AuthError> {
        match self {
            OtpOutcome::Verified => None,
            OtpOutcome::NotIssued => Some(AuthError::OtpNotIssued),
            OtpOutcome::Expired => Some(AuthError::OtpExpired),
            OtpOutcome::Mismatch => Some(AuthError::OtpInvalid),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OtpOutcome::Verified => "verified",
            OtpOutcome::NotIssued => "not_issued",
            OtpOutcome::Expired => "expired",
            OtpOutcome::Mismatch => "mismatch",
        }
    }
}
