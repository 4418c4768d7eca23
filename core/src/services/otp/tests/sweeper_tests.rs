//! Unit tests for the background sweeper

use chrono::{Duration as ChronoDuration, Utc};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::OtpRecord;
use crate::services::otp::{CredentialStore, OtpSweeper};

fn seeded_store() -> Arc<CredentialStore> {
    let store = Arc::new(CredentialStore::new());
    let now = Utc::now();
    store.upsert(OtpRecord::new("+15550000001", "111111", now - ChronoDuration::seconds(700), 600));
    store.upsert(OtpRecord::new("+15550000002", "222222", now, 600));
    store
}

#[test]
fn test_run_once_removes_only_expired() {
    let store = seeded_store();
    let sweeper = OtpSweeper::new(store.clone(), Duration::from_secs(300));

    assert_eq!(sweeper.run_once(), 1);
    assert_eq!(store.len(), 1);
    assert!(store.get("+15550000002").is_some());
}

#[tokio::test]
async fn test_zero_interval_disables_task() {
    let sweeper = Arc::new(OtpSweeper::new(seeded_store(), Duration::ZERO));
    assert!(sweeper.start_background_task().is_none());
}

#[tokio::test]
async fn test_background_task_sweeps() {
    let store = seeded_store();
    let sweeper = Arc::new(OtpSweeper::new(store.clone(), Duration::from_millis(10)));

    let handle = sweeper.start_background_task().unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.abort();

    assert_eq!(store.len(), 1);
}
