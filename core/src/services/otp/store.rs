//! Credential store holding at most one live code per phone number
//!
//! Every operation runs inside a single critical section, so operations on
//! the same subject are linearizable. The lock is never held across an
//! `.await`.

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::otp_record::OtpRecord;

use super::types::OtpOutcome;

/// Owned, injectable map of subject to live OTP record
#[derive(Debug, Default)]
pub struct CredentialStore {
    records: Mutex<HashMap<String, OtpRecord>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> MutexGuard<'_, HashMap<String, OtpRecord>> {
        // The map stays consistent even if a holder panicked mid-operation.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a record, replacing and returning any prior record for the subject
    pub fn upsert(&self, record: OtpRecord) -> Option<OtpRecord> {
        self.records().insert(record.subject.clone(), record)
    }

    /// Remove every record expired at `now`, returning how many were removed
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut records = self.records();
        let before = records.len();
        records.retain(|_, record| !record.is_expired_at(now));
        before - records.len()
    }

    /// Look up, compare and conditionally consume the subject's record
    ///
    /// Expired records are purged in the same critical section. A match
    /// deletes the record; a mismatch leaves it in place.
    pub fn check(&self, subject: &str, candidate: &str, now: DateTime<Utc>) -> OtpOutcome {
        let mut records = self.records();

        let outcome = match records.get(subject) {
            None => OtpOutcome::NotIssued,
            Some(record) if record.is_expired_at(now) => {
                records.remove(subject);
                OtpOutcome::Expired
            }
            Some(record) => {
                let candidate = candidate.trim();
                if !candidate.is_empty()
                    && constant_time_eq(record.code.as_bytes(), candidate.as_bytes())
                {
                    records.remove(subject);
                    OtpOutcome::Verified
                } else {
                    OtpOutcome::Mismatch
                }
            }
        };

        records.retain(|_, record| !record.is_expired_at(now));
        outcome
    }

    /// Snapshot of the subject's record, if any
    pub fn get(&self, subject: &str) -> Option<OtpRecord> {
        self.records().get(subject).cloned()
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
