//! Unit tests for the Supabase account directory

use fe_core::errors::{ConfigurationError, DependencyError, DomainError};
use fe_core::repositories::AccountDirectory;
use fe_shared::{DirectoryBackend, DirectoryConfig};

use crate::directory::{SupabaseAccountDirectory, SupabaseConfig};

fn supabase_settings(url: &str) -> DirectoryConfig {
    DirectoryConfig {
        backend: DirectoryBackend::Supabase,
        supabase_url: Some(url.to_string()),
        service_role_key: Some("service-role-key".to_string()),
        request_timeout_secs: 2,
        ..DirectoryConfig::default()
    }
}

#[test]
fn test_config_from_settings() {
    let config = SupabaseConfig::from_settings(&supabase_settings("https://demo.supabase.co/")).unwrap();
    assert_eq!(config.url, "https://demo.supabase.co");
    assert_eq!(config.users_table, "users");
    assert_eq!(config.table_url(), "https://demo.supabase.co/rest/v1/users");
}

#[test]
fn test_config_requires_url_and_key() {
    let mut settings = supabase_settings("https://demo.supabase.co");
    settings.supabase_url = None;
    assert_eq!(
        SupabaseConfig::from_settings(&settings).unwrap_err(),
        ConfigurationError::MissingCredentials {
            name: "SUPABASE_URL".to_string()
        }
    );

    let mut settings = supabase_settings("https://demo.supabase.co");
    settings.service_role_key = Some(String::new());
    assert_eq!(
        SupabaseConfig::from_settings(&settings).unwrap_err(),
        ConfigurationError::MissingCredentials {
            name: "SUPABASE_SERVICE_ROLE_KEY".to_string()
        }
    );
}

#[test]
fn test_eq_filter() {
    let filter = SupabaseAccountDirectory::eq_filter("phone_number", "+15551234567");
    assert_eq!(filter[0], ("phone_number".to_string(), "eq.+15551234567".to_string()));
    assert_eq!(filter[1], ("select".to_string(), "*".to_string()));
}

#[tokio::test]
async fn test_unreachable_directory_is_dependency_error() {
    let config = SupabaseConfig::from_settings(&supabase_settings("http://127.0.0.1:1")).unwrap();
    let directory = SupabaseAccountDirectory::new(config).unwrap();
    assert_eq!(directory.config().table_url(), "http://127.0.0.1:1/rest/v1/users");

    let lookup = directory.find_by_id("user-1").await;
    assert!(matches!(
        lookup,
        Err(DomainError::Dependency(DependencyError::AccountDirectory { .. }))
    ));

    let create = directory.create("+15551234567").await;
    assert!(matches!(
        create,
        Err(DomainError::Dependency(DependencyError::AccountDirectory { .. }))
    ));
}
