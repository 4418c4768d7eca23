//! Unit tests for the in-memory account directory

use crate::errors::{DependencyError, DomainError};
use crate::repositories::account::{AccountDirectory, InMemoryAccountDirectory};

#[tokio::test]
async fn test_create_and_find() {
    let directory = InMemoryAccountDirectory::new();

    let created = directory.create("+15551234567").await.unwrap();
    assert!(created.is_active);

    let by_id = directory.find_by_id(&created.id).await.unwrap();
    assert_eq!(by_id, Some(created.clone()));

    let by_phone = directory.find_by_phone("+15551234567").await.unwrap();
    assert_eq!(by_phone.map(|a| a.id), Some(created.id));
}

#[tokio::test]
async fn test_unknown_lookups_are_none() {
    let directory = InMemoryAccountDirectory::new();
    assert!(directory.find_by_id("missing").await.unwrap().is_none());
    assert!(directory.find_by_phone("+15550000000").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_phone_rejected() {
    let directory = InMemoryAccountDirectory::new();
    directory.create("+15551234567").await.unwrap();

    let result = directory.create("+15551234567").await;
    assert!(matches!(
        result,
        Err(DomainError::Dependency(DependencyError::AccountDirectory { .. }))
    ));
    assert_eq!(directory.len().await, 1);
}

#[tokio::test]
async fn test_deactivate_and_remove() {
    let directory = InMemoryAccountDirectory::new();
    let account = directory.create("+15551234567").await.unwrap();

    assert!(directory.deactivate(&account.id).await);
    let stored = directory.find_by_id(&account.id).await.unwrap().unwrap();
    assert!(!stored.is_active);

    assert!(directory.remove(&account.id).await);
    assert!(!directory.remove(&account.id).await);
    assert!(directory.is_empty().await);
    assert!(!directory.deactivate("missing").await);
}
