//! Unit tests for account directory creation

use fe_core::errors::ConfigurationError;
use fe_shared::{DirectoryBackend, DirectoryConfig};

use crate::directory::create_account_directory;

#[tokio::test]
async fn test_create_memory_directory() {
    let directory = create_account_directory(&DirectoryConfig::default()).unwrap();

    let account = directory.create("+15551234567").await.unwrap();
    let found = directory.find_by_phone("+15551234567").await.unwrap();
    assert_eq!(found.map(|a| a.id), Some(account.id));
}

#[tokio::test]
async fn test_create_cached_memory_directory() {
    let config = DirectoryConfig {
        cache_ttl_seconds: 30,
        ..DirectoryConfig::default()
    };
    let directory = create_account_directory(&config).unwrap();

    let account = directory.create("+15551234567").await.unwrap();
    let first = directory.find_by_id(&account.id).await.unwrap();
    let second = directory.find_by_id(&account.id).await.unwrap();
    assert_eq!(first, second);
    assert!(first.is_some());
}

#[test]
fn test_create_supabase_directory_requires_credentials() {
    let config = DirectoryConfig {
        backend: DirectoryBackend::Supabase,
        ..DirectoryConfig::default()
    };

    assert!(matches!(
        create_account_directory(&config),
        Err(ConfigurationError::MissingCredentials { ref name }) if name == "SUPABASE_URL"
    ));
}
